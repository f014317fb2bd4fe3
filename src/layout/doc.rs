//! Document model: rooms, openings, and the in-memory plan document.
//!
//! `Room` and `Opening` are the wire and storage records; `FloorPlan` is the
//! aggregate payload returned by the read endpoint; `PlanDoc` is the runtime
//! document the editor mutates. An `Opening` covers both doors and windows —
//! the two are structurally identical and only differ in which sequence (and
//! which table) they live in.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a room or opening.
pub type RecordId = Uuid;

/// A rectangular room with identity, size, and position.
///
/// Position is the top-left corner in a shared, unit-less 2-D coordinate
/// space. Invariant: `width > 0 && height > 0` (enforced at creation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RecordId,
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
}

/// A door or window attached to one room edge.
///
/// `position` is stored verbatim from the record; nominally one of
/// `left | right | top | bottom`, but unvalidated. Anything else fails to
/// parse as a [`Side`] and the opening is skipped at placement time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub id: RecordId,
    pub room_id: RecordId,
    pub position: String,
    pub width: f64,
}

/// Which room edge an opening sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    /// Parse a stored `position` value. Returns `None` for anything outside
    /// the four canonical sides; callers treat that as a silent skip.
    #[must_use]
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

/// The aggregate payload: all rooms, doors, and windows as three ordered
/// sequences, unfiltered and unpaginated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FloorPlan {
    pub rooms: Vec<Room>,
    pub doors: Vec<Opening>,
    pub windows: Vec<Opening>,
}

/// In-memory plan document owned by the editor.
///
/// Rooms keep their fetch order; openings are never re-ordered. Mutations
/// here are session-local and are not written back to storage.
#[derive(Debug, Clone, Default)]
pub struct PlanDoc {
    pub rooms: Vec<Room>,
    pub doors: Vec<Opening>,
    pub windows: Vec<Opening>,
}

impl PlanDoc {
    /// Build a document from the aggregate payload.
    #[must_use]
    pub fn from_plan(plan: FloorPlan) -> Self {
        Self { rooms: plan.rooms, doors: plan.doors, windows: plan.windows }
    }

    /// Look up a room by id.
    #[must_use]
    pub fn room(&self, id: RecordId) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    /// Look up a room mutably by id.
    pub fn room_mut(&mut self, id: RecordId) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.id == id)
    }

    /// Look up an opening by id across both doors and windows.
    #[must_use]
    pub fn opening(&self, id: RecordId) -> Option<&Opening> {
        self.doors
            .iter()
            .chain(self.windows.iter())
            .find(|opening| opening.id == id)
    }

    /// Append a room.
    pub fn push_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    /// Remove the first room whose name matches, returning it if found.
    ///
    /// Matching is by name, so duplicate names collide and the first entry
    /// wins. Openings that referenced the removed room are left in place;
    /// they silently fail placement from then on.
    pub fn remove_room_by_name(&mut self, name: &str) -> Option<Room> {
        let index = self.rooms.iter().position(|room| room.name == name)?;
        Some(self.rooms.remove(index))
    }

    /// Number of rooms in the document.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
