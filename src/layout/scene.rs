//! Abstract scene graph handed to the rendering host.
//!
//! The scene is the drawing-surface object model: one group per room holding
//! the room rectangle and its dimension label, plus one segment per placeable
//! door or window. Group children are positioned relative to the group
//! origin, mirroring how the canvas library nests objects. The host walks
//! the node list in order; later nodes draw on top.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::Serialize;
use uuid::Uuid;

use crate::layout::consts::{
    DISPLAY_SCALE, DOOR_STROKE, LABEL_FONT_SIZE, LABEL_INSET, OPENING_STROKE_WIDTH, ROOM_FILL, ROOM_STROKE,
    ROOM_STROKE_WIDTH, WINDOW_STROKE,
};
use crate::layout::doc::{Opening, PlanDoc, Room};
use crate::layout::geometry;

/// A filled, stroked rectangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RectNode {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub fill: &'static str,
    pub stroke: &'static str,
    pub stroke_width: f64,
}

/// A text label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelNode {
    pub left: f64,
    pub top: f64,
    pub text: String,
    pub font_size: f64,
}

/// A stroked line segment. `opening_id` links derived segments back to their
/// opening record so interaction callbacks can refresh them; clones carry
/// `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentNode {
    pub opening_id: Option<Uuid>,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: &'static str,
    pub stroke_width: f64,
}

/// A named bundle of child nodes positioned relative to the group origin.
/// `room_id` links room groups back to their record; ad-hoc bundles and
/// pasted clones carry `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupNode {
    pub room_id: Option<Uuid>,
    pub name: String,
    pub left: f64,
    pub top: f64,
    pub children: Vec<SceneNode>,
}

/// One node in the scene graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SceneNode {
    Rect(RectNode),
    Label(LabelNode),
    Segment(SegmentNode),
    Group(GroupNode),
}

impl SceneNode {
    /// The node's position: group/rect/label origin, or a segment's first
    /// endpoint.
    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        match self {
            Self::Rect(rect) => (rect.left, rect.top),
            Self::Label(label) => (label.left, label.top),
            Self::Segment(segment) => (segment.x1, segment.y1),
            Self::Group(group) => (group.left, group.top),
        }
    }

    /// Shift the node in place.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Self::Rect(rect) => {
                rect.left += dx;
                rect.top += dy;
            }
            Self::Label(label) => {
                label.left += dx;
                label.top += dy;
            }
            Self::Segment(segment) => {
                segment.x1 += dx;
                segment.y1 += dy;
                segment.x2 += dx;
                segment.y2 += dy;
            }
            Self::Group(group) => {
                group.left += dx;
                group.top += dy;
            }
        }
    }

    /// The group name, for name-addressed operations. `None` for leaf nodes.
    #[must_use]
    pub fn group_name(&self) -> Option<&str> {
        match self {
            Self::Group(group) => Some(group.name.as_str()),
            _ => None,
        }
    }
}

/// Dimension label text for a room, with the room's unit-less dimensions.
#[must_use]
pub fn dimension_label(room: &Room) -> String {
    format!("{} ({:.0} x {:.0})", room.name, room.width, room.height)
}

/// Build the visual group for one room: rectangle plus dimension label,
/// children positioned relative to the group origin.
#[must_use]
pub fn room_group(room: &Room) -> SceneNode {
    SceneNode::Group(GroupNode {
        room_id: Some(room.id),
        name: room.name.clone(),
        left: room.x * DISPLAY_SCALE,
        top: room.y * DISPLAY_SCALE,
        children: vec![
            SceneNode::Rect(RectNode {
                left: 0.0,
                top: 0.0,
                width: room.width * DISPLAY_SCALE,
                height: room.height * DISPLAY_SCALE,
                fill: ROOM_FILL,
                stroke: ROOM_STROKE,
                stroke_width: ROOM_STROKE_WIDTH,
            }),
            SceneNode::Label(LabelNode {
                left: LABEL_INSET,
                top: LABEL_INSET,
                text: dimension_label(room),
                font_size: LABEL_FONT_SIZE,
            }),
        ],
    })
}

/// Whether a segment renders as a door or a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpeningStyle {
    Door,
    Window,
}

impl OpeningStyle {
    #[must_use]
    fn stroke(self) -> &'static str {
        match self {
            Self::Door => DOOR_STROKE,
            Self::Window => WINDOW_STROKE,
        }
    }
}

/// Build the segment node for one opening, or `None` when the opening's room
/// is missing or its side is unrecognized.
#[must_use]
pub fn opening_node(rooms: &[Room], opening: &Opening, style: OpeningStyle) -> Option<SceneNode> {
    let segment = geometry::place_opening(rooms, opening)?;
    Some(SceneNode::Segment(SegmentNode {
        opening_id: Some(opening.id),
        x1: segment.a.x * DISPLAY_SCALE,
        y1: segment.a.y * DISPLAY_SCALE,
        x2: segment.b.x * DISPLAY_SCALE,
        y2: segment.b.y * DISPLAY_SCALE,
        stroke: style.stroke(),
        stroke_width: OPENING_STROKE_WIDTH,
    }))
}

/// Build the full scene from a document: one group per room, then one
/// segment per placeable door and window. Openings that fail placement
/// produce no node.
#[must_use]
pub fn build_scene(doc: &PlanDoc) -> Vec<SceneNode> {
    let mut nodes: Vec<SceneNode> = doc.rooms.iter().map(room_group).collect();
    nodes.extend(
        doc.doors
            .iter()
            .filter_map(|door| opening_node(&doc.rooms, door, OpeningStyle::Door)),
    );
    nodes.extend(
        doc.windows
            .iter()
            .filter_map(|window| opening_node(&doc.rooms, window, OpeningStyle::Window)),
    );
    nodes
}

/// Deep-clone a node for pasting: members are cloned recursively, record
/// links are stripped (pasted nodes are visual-only), and the clone is
/// offset from the source by `(dx, dy)`.
#[must_use]
pub fn clone_with_offset(node: &SceneNode, dx: f64, dy: f64) -> SceneNode {
    let mut clone = strip_record_links(node.clone());
    clone.translate(dx, dy);
    clone
}

fn strip_record_links(node: SceneNode) -> SceneNode {
    match node {
        SceneNode::Segment(segment) => SceneNode::Segment(SegmentNode { opening_id: None, ..segment }),
        SceneNode::Group(group) => SceneNode::Group(GroupNode {
            room_id: None,
            name: group.name,
            left: group.left,
            top: group.top,
            children: group.children.into_iter().map(strip_record_links).collect(),
        }),
        other => other,
    }
}
