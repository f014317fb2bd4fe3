//! Editor state: selection, clipboard, and the editing operations.
//!
//! DESIGN
//! ======
//! The editor owns one [`PlanDoc`] and the scene derived from it, and is
//! driven by UI callbacks on a single thread. Its only extra state is a
//! mutable selection pointer and a one-slot clipboard. Edits are
//! session-local: nothing here writes back to storage, and pasted nodes are
//! visual-only, never reconciled into the document.
//!
//! ERROR HANDLING
//! ==============
//! Nothing in here is fatal. Missing selection, empty clipboard, and unknown
//! ids are all silent no-ops.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use uuid::Uuid;

use crate::layout::consts::{ADD_STAGGER, DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH, DISPLAY_SCALE, PASTE_OFFSET};
use crate::layout::doc::{FloorPlan, PlanDoc, RecordId, Room};
use crate::layout::geometry;
use crate::layout::scene::{self, GroupNode, SceneNode};

/// Interactive editor over one floor plan.
pub struct Editor {
    doc: PlanDoc,
    scene: Vec<SceneNode>,
    selection: Option<String>,
    clipboard: Option<SceneNode>,
}

impl Editor {
    /// Create an editor over an existing document.
    #[must_use]
    pub fn new(doc: PlanDoc) -> Self {
        let scene = scene::build_scene(&doc);
        Self { doc, scene, selection: None, clipboard: None }
    }

    /// Create an editor from the aggregate payload fetched at startup.
    #[must_use]
    pub fn from_plan(plan: FloorPlan) -> Self {
        Self::new(PlanDoc::from_plan(plan))
    }

    /// The underlying document.
    #[must_use]
    pub fn doc(&self) -> &PlanDoc {
        &self.doc
    }

    /// The current scene, in draw order.
    #[must_use]
    pub fn scene(&self) -> &[SceneNode] {
        &self.scene
    }

    /// The currently selected group name, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Point the selection at a group by name. Selection is name-addressed,
    /// so duplicate names collide and the first scene entry wins.
    pub fn select(&mut self, name: impl Into<String>) {
        self.selection = Some(name.into());
    }

    /// Drop the selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    // ── Editing actions ─────────────────────────────────────────

    /// Append a new room with default size and a staggered position, and add
    /// its group to the scene. Returns the fresh identity.
    #[allow(clippy::cast_precision_loss)]
    pub fn add_room(&mut self) -> RecordId {
        let count = self.doc.room_count();
        let room = Room {
            id: Uuid::new_v4(),
            name: format!("Room {}", count + 1),
            width: DEFAULT_ROOM_WIDTH,
            height: DEFAULT_ROOM_HEIGHT,
            x: ADD_STAGGER * count as f64,
            y: ADD_STAGGER * count as f64,
        };
        let id = room.id;
        self.scene.push(scene::room_group(&room));
        self.doc.push_room(room);
        id
    }

    /// Remove the selected room from the document and its group from the
    /// scene, matching by name. Exactly one entry is removed from each; the
    /// room's openings are left in place and silently fail placement from
    /// then on. No-op without a selection.
    pub fn delete_selected(&mut self) {
        let Some(name) = self.selection.take() else {
            return;
        };
        self.doc.remove_room_by_name(&name);
        if let Some(index) = self
            .scene
            .iter()
            .position(|node| node.group_name() == Some(name.as_str()))
        {
            self.scene.remove(index);
        }
    }

    /// Bundle the named top-level groups into a new group, without touching
    /// the underlying records. Children are repositioned relative to the
    /// bundle origin. Selects the new bundle and returns its name; no-op
    /// when no names match.
    pub fn group(&mut self, names: &[&str]) -> Option<String> {
        let mut members: Vec<SceneNode> = Vec::new();
        let mut index = 0;
        while index < self.scene.len() {
            let is_member = self.scene[index]
                .group_name()
                .is_some_and(|name| names.contains(&name));
            if is_member {
                members.push(self.scene.remove(index));
            } else {
                index += 1;
            }
        }
        if members.is_empty() {
            return None;
        }

        let left = members
            .iter()
            .map(|node| node.position().0)
            .fold(f64::INFINITY, f64::min);
        let top = members
            .iter()
            .map(|node| node.position().1)
            .fold(f64::INFINITY, f64::min);
        for member in &mut members {
            member.translate(-left, -top);
        }

        let bundles = self
            .scene
            .iter()
            .filter(|node| matches!(node, SceneNode::Group(group) if group.room_id.is_none()))
            .count();
        let name = format!("Group {}", bundles + 1);
        self.scene.push(SceneNode::Group(GroupNode {
            room_id: None,
            name: name.clone(),
            left,
            top,
            children: members,
        }));
        self.selection = Some(name.clone());
        Some(name)
    }

    /// Unbundle the selected group: its children return to the top level at
    /// absolute positions, in order. No-op without a selection or when the
    /// selection is not a group.
    pub fn ungroup_selected(&mut self) {
        let Some(name) = self.selection.take() else {
            return;
        };
        let Some(index) = self
            .scene
            .iter()
            .position(|node| node.group_name() == Some(name.as_str()))
        else {
            return;
        };
        let SceneNode::Group(group) = self.scene.remove(index) else {
            return;
        };
        for mut child in group.children {
            child.translate(group.left, group.top);
            self.scene.push(child);
        }
    }

    /// Clone the selected node (groups recursively) into the clipboard slot.
    /// No-op without a selection.
    pub fn copy(&mut self) {
        let Some(name) = self.selection.as_deref() else {
            return;
        };
        let node = self
            .scene
            .iter()
            .find(|node| node.group_name() == Some(name))
            .cloned();
        if node.is_some() {
            self.clipboard = node;
        }
    }

    /// Insert a clone of the clipboard content offset by the paste delta.
    /// The clipboard advances to the clone, so consecutive pastes cascade.
    /// Pasted nodes carry no record links. No-op with an empty clipboard.
    pub fn paste(&mut self) {
        let Some(source) = self.clipboard.as_ref() else {
            return;
        };
        let clone = scene::clone_with_offset(source, PASTE_OFFSET, PASTE_OFFSET);
        self.clipboard = Some(clone.clone());
        self.scene.push(clone);
    }

    // ── Interaction callbacks ───────────────────────────────────

    /// Move callback from the drawing surface. Applies the new position,
    /// runs the single-step overlap nudge against every other room, and
    /// refreshes the room's visuals. Unknown ids are a silent no-op.
    pub fn move_room(&mut self, id: RecordId, x: f64, y: f64) {
        if self.doc.room(id).is_none() {
            return;
        }
        if let Some(room) = self.doc.room_mut(id) {
            room.x = x;
            room.y = y;
        }
        self.nudge_and_refresh(id);
    }

    /// Resize callback from the drawing surface. Non-positive dimensions are
    /// rejected (silent no-op), preserving the room size invariant.
    pub fn resize_room(&mut self, id: RecordId, width: f64, height: f64) {
        if width <= 0.0 || height <= 0.0 || self.doc.room(id).is_none() {
            return;
        }
        if let Some(room) = self.doc.room_mut(id) {
            room.width = width;
            room.height = height;
        }
        self.nudge_and_refresh(id);
    }

    fn nudge_and_refresh(&mut self, id: RecordId) {
        let nudged = self
            .doc
            .room(id)
            .and_then(|room| geometry::resolve_overlap(room, &self.doc.rooms));
        if let Some((x, y)) = nudged {
            if let Some(room) = self.doc.room_mut(id) {
                room.x = x;
                room.y = y;
            }
        }
        self.refresh_room(id);
    }

    /// Re-derive the room's group node and the segments of its openings
    /// after a geometry change. A room group that has been bundled into an
    /// ad-hoc group is not individually refreshed.
    fn refresh_room(&mut self, id: RecordId) {
        let Some(room) = self.doc.room(id).cloned() else {
            return;
        };
        if let Some(index) = self
            .scene
            .iter()
            .position(|node| matches!(node, SceneNode::Group(group) if group.room_id == Some(id)))
        {
            self.scene[index] = scene::room_group(&room);
        }

        for node in &mut self.scene {
            let SceneNode::Segment(segment) = node else {
                continue;
            };
            let Some(opening_id) = segment.opening_id else {
                continue;
            };
            let Some(opening) = self.doc.opening(opening_id) else {
                continue;
            };
            if opening.room_id != id {
                continue;
            }
            if let Some(placed) = geometry::opening_segment(&room, opening) {
                segment.x1 = placed.a.x * DISPLAY_SCALE;
                segment.y1 = placed.a.y * DISPLAY_SCALE;
                segment.x2 = placed.b.x * DISPLAY_SCALE;
                segment.y2 = placed.b.y * DISPLAY_SCALE;
            }
        }
    }
}
