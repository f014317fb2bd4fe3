//! Service layer: data access over the floor-plan schema.

pub mod plan;
