//! Floor-plan visualization/editor tool.
//!
//! The crate splits into a thin HTTP backend and a pure layout core. The
//! backend serves Room/Door/Window records from PostgreSQL as one aggregate
//! payload plus pass-through CRUD. The [`layout`] module turns those records
//! into an abstract scene (room groups, dimension labels, door/window
//! segments on room edges) and drives the interactive editor: add, delete,
//! group, ungroup, copy, paste, and move/resize with single-step overlap
//! nudging. Editor mutations are session-local and never written back.

pub mod db;
pub mod layout;
pub mod routes;
pub mod services;
pub mod state;
