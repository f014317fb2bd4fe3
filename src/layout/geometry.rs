//! Opening edge placement and room overlap resolution.
//!
//! Everything here is pure and stateless. Openings map to absolute line
//! segments on their owning room's edge; moving rooms are tested against the
//! rest of the plan with an axis-aligned bounding-box check and resolved
//! with a single-step nudge. The nudge is best-effort and non-convergent:
//! it relies on being re-invoked on every movement tick and makes no
//! guarantee of eventual separation.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::layout::consts::NUDGE_STEP;
use crate::layout::doc::{Opening, Room, Side};

/// A point in plan coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An absolute line segment in plan coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

/// Compute the absolute segment for an opening on `room`'s edge.
///
/// Left/right sides produce a vertical segment at the room's left/right edge
/// x-coordinate, spanning from the vertical midpoint to midpoint plus the
/// opening width. Top/bottom produce the horizontal equivalent at the top/
/// bottom edge y-coordinate. An unrecognized `position` returns `None`.
///
/// Opening width is not validated against the edge length; a too-wide
/// opening overhangs the room corner.
#[must_use]
pub fn opening_segment(room: &Room, opening: &Opening) -> Option<Segment> {
    let side = Side::from_str(&opening.position)?;
    let mid_y = room.y + room.height / 2.0;
    let mid_x = room.x + room.width / 2.0;

    let segment = match side {
        Side::Left => Segment {
            a: Point::new(room.x, mid_y),
            b: Point::new(room.x, mid_y + opening.width),
        },
        Side::Right => Segment {
            a: Point::new(room.x + room.width, mid_y),
            b: Point::new(room.x + room.width, mid_y + opening.width),
        },
        Side::Top => Segment {
            a: Point::new(mid_x, room.y),
            b: Point::new(mid_x + opening.width, room.y),
        },
        Side::Bottom => Segment {
            a: Point::new(mid_x, room.y + room.height),
            b: Point::new(mid_x + opening.width, room.y + room.height),
        },
    };
    Some(segment)
}

/// Place an opening against a set of rooms.
///
/// Returns `None` when no room matches the opening's `room_id` or when the
/// side is unrecognized; both are silent skips, not errors.
#[must_use]
pub fn place_opening(rooms: &[Room], opening: &Opening) -> Option<Segment> {
    let room = rooms.iter().find(|room| room.id == opening.room_id)?;
    opening_segment(room, opening)
}

/// Axis-aligned bounding-box intersection test. Symmetric by construction;
/// rectangles that merely touch along an edge do not overlap.
#[must_use]
pub fn rooms_overlap(a: &Room, b: &Room) -> bool {
    a.x < b.x + b.width && b.x < a.x + a.width && a.y < b.y + b.height && b.y < a.y + a.height
}

/// Single-step overlap resolution for a moving room.
///
/// Tests `moving` against every other room (same-id entries are skipped) and
/// returns the nudged position, one step in each axis, when any intersection
/// is found. Returns `None` when the room is clear.
#[must_use]
pub fn resolve_overlap(moving: &Room, others: &[Room]) -> Option<(f64, f64)> {
    let collides = others
        .iter()
        .filter(|other| other.id != moving.id)
        .any(|other| rooms_overlap(moving, other));
    collides.then(|| (moving.x + NUDGE_STEP, moving.y + NUDGE_STEP))
}
