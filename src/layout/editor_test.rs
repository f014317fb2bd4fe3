#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::layout::doc::Opening;
use crate::layout::scene::SceneNode;

fn make_room(name: &str, x: f64, y: f64, width: f64, height: f64) -> Room {
    Room { id: Uuid::new_v4(), name: name.to_owned(), width, height, x, y }
}

fn make_opening(room_id: Uuid, position: &str, width: f64) -> Opening {
    Opening { id: Uuid::new_v4(), room_id, position: position.to_owned(), width }
}

fn demo_editor() -> Editor {
    let living = make_room("Living Room", 0.0, 0.0, 400.0, 300.0);
    let bedroom = make_room("Bedroom", 400.0, 0.0, 300.0, 300.0);
    let doors = vec![make_opening(bedroom.id, "right", 50.0)];
    let windows = vec![make_opening(bedroom.id, "left", 80.0)];
    Editor::new(PlanDoc { rooms: vec![living, bedroom], doors, windows })
}

fn group_names(editor: &Editor) -> Vec<&str> {
    editor
        .scene()
        .iter()
        .filter_map(SceneNode::group_name)
        .collect()
}

// =============================================================
// Add
// =============================================================

#[test]
fn add_room_grows_sequence_by_one_with_unique_identity() {
    let mut editor = demo_editor();
    let before = editor.doc().room_count();
    let id = editor.add_room();
    assert_eq!(editor.doc().room_count(), before + 1);
    assert!(editor.doc().rooms.iter().filter(|room| room.id == id).count() == 1);

    let other = editor.add_room();
    assert_ne!(id, other);
    assert_eq!(editor.doc().room_count(), before + 2);
}

#[test]
fn add_room_staggers_position_and_adds_group() {
    let mut editor = Editor::new(PlanDoc::default());
    let first = editor.add_room();
    let second = editor.add_room();

    let first_room = editor.doc().room(first).unwrap();
    let second_room = editor.doc().room(second).unwrap();
    assert_eq!((first_room.x, first_room.y), (0.0, 0.0));
    assert_eq!((second_room.x, second_room.y), (20.0, 20.0));
    assert_eq!(group_names(&editor), vec!["Room 1", "Room 2"]);
}

// =============================================================
// Delete
// =============================================================

#[test]
fn delete_selected_removes_exactly_one_name_match() {
    let mut editor = demo_editor();
    editor.select("Bedroom");
    editor.delete_selected();

    assert_eq!(editor.doc().room_count(), 1);
    assert_eq!(editor.doc().rooms[0].name, "Living Room");
    assert!(!group_names(&editor).contains(&"Bedroom"));
    assert_eq!(editor.selection(), None);
}

#[test]
fn delete_with_duplicate_names_removes_first_only() {
    let first = make_room("Bedroom", 0.0, 0.0, 100.0, 100.0);
    let second = make_room("Bedroom", 500.0, 0.0, 100.0, 100.0);
    let second_id = second.id;
    let mut editor = Editor::new(PlanDoc { rooms: vec![first, second], doors: vec![], windows: vec![] });

    editor.select("Bedroom");
    editor.delete_selected();

    assert_eq!(editor.doc().room_count(), 1);
    assert_eq!(editor.doc().rooms[0].id, second_id);
    assert_eq!(group_names(&editor), vec!["Bedroom"]);
}

#[test]
fn delete_without_selection_is_noop() {
    let mut editor = demo_editor();
    let rooms = editor.doc().room_count();
    let nodes = editor.scene().len();
    editor.delete_selected();
    assert_eq!(editor.doc().room_count(), rooms);
    assert_eq!(editor.scene().len(), nodes);
}

#[test]
fn deleted_room_leaves_openings_unplaceable() {
    let mut editor = demo_editor();
    editor.select("Bedroom");
    editor.delete_selected();

    // Records remain but a rebuilt scene places nothing for them.
    assert_eq!(editor.doc().doors.len(), 1);
    let rebuilt = crate::layout::scene::build_scene(editor.doc());
    let segments = rebuilt
        .iter()
        .filter(|node| matches!(node, SceneNode::Segment(_)))
        .count();
    assert_eq!(segments, 0);
}

// =============================================================
// Group / ungroup
// =============================================================

#[test]
fn group_bundles_members_and_selects_bundle() {
    let mut editor = demo_editor();
    let name = editor.group(&["Living Room", "Bedroom"]).unwrap();
    assert_eq!(name, "Group 1");
    assert_eq!(editor.selection(), Some("Group 1"));

    let bundle = editor
        .scene()
        .iter()
        .find(|node| node.group_name() == Some("Group 1"))
        .unwrap();
    let SceneNode::Group(group) = bundle else {
        panic!("expected a group");
    };
    assert_eq!(group.room_id, None);
    assert_eq!(group.children.len(), 2);
    // Members are repositioned relative to the bundle origin.
    assert_eq!(group.left, 0.0);
    assert_eq!(group.children[1].position(), (400.0, 0.0));
}

#[test]
fn group_with_no_matches_is_noop() {
    let mut editor = demo_editor();
    let nodes = editor.scene().len();
    assert!(editor.group(&["Attic"]).is_none());
    assert_eq!(editor.scene().len(), nodes);
}

#[test]
fn ungroup_restores_absolute_positions() {
    let mut editor = demo_editor();
    editor.group(&["Living Room", "Bedroom"]).unwrap();
    editor.ungroup_selected();

    assert!(group_names(&editor).contains(&"Living Room"));
    assert!(group_names(&editor).contains(&"Bedroom"));
    let bedroom = editor
        .scene()
        .iter()
        .find(|node| node.group_name() == Some("Bedroom"))
        .unwrap();
    assert_eq!(bedroom.position(), (400.0, 0.0));
    assert_eq!(editor.selection(), None);
}

#[test]
fn group_does_not_touch_room_records() {
    let mut editor = demo_editor();
    let rooms_before = editor.doc().rooms.clone();
    editor.group(&["Living Room", "Bedroom"]).unwrap();
    editor.ungroup_selected();
    assert_eq!(editor.doc().rooms, rooms_before);
}

// =============================================================
// Copy / paste
// =============================================================

#[test]
fn paste_inserts_offset_clone_and_leaves_doc_untouched() {
    let mut editor = demo_editor();
    let rooms_before = editor.doc().room_count();
    let nodes_before = editor.scene().len();

    editor.select("Living Room");
    editor.copy();
    editor.paste();

    assert_eq!(editor.scene().len(), nodes_before + 1);
    assert_eq!(editor.doc().room_count(), rooms_before);

    let SceneNode::Group(pasted) = editor.scene().last().unwrap() else {
        panic!("expected a pasted group");
    };
    assert_eq!(pasted.room_id, None);
    assert_eq!((pasted.left, pasted.top), (10.0, 10.0));
}

#[test]
fn consecutive_pastes_cascade() {
    let mut editor = demo_editor();
    editor.select("Living Room");
    editor.copy();
    editor.paste();
    editor.paste();

    let last_two: Vec<(f64, f64)> = editor
        .scene()
        .iter()
        .rev()
        .take(2)
        .map(SceneNode::position)
        .collect();
    assert_eq!(last_two, vec![(20.0, 20.0), (10.0, 10.0)]);
}

#[test]
fn copy_without_selection_and_paste_without_clipboard_are_noops() {
    let mut editor = demo_editor();
    let nodes = editor.scene().len();
    editor.copy();
    editor.paste();
    assert_eq!(editor.scene().len(), nodes);
}

#[test]
fn copied_group_pastes_members_recursively() {
    let mut editor = demo_editor();
    editor.group(&["Living Room", "Bedroom"]).unwrap();
    editor.copy();
    editor.paste();

    let SceneNode::Group(pasted) = editor.scene().last().unwrap() else {
        panic!("expected a pasted group");
    };
    assert_eq!(pasted.room_id, None);
    assert_eq!(pasted.children.len(), 2);
    for child in &pasted.children {
        let SceneNode::Group(member) = child else {
            panic!("expected member groups");
        };
        assert_eq!(member.room_id, None);
    }
}

// =============================================================
// Move / resize
// =============================================================

#[test]
fn move_room_clear_of_others_applies_position() {
    let mut editor = demo_editor();
    let id = editor.doc().rooms[0].id;
    editor.move_room(id, 0.0, 1000.0);

    let room = editor.doc().room(id).unwrap();
    assert_eq!((room.x, room.y), (0.0, 1000.0));

    let group = editor
        .scene()
        .iter()
        .find(|node| node.group_name() == Some("Living Room"))
        .unwrap();
    assert_eq!(group.position(), (0.0, 1000.0));
}

#[test]
fn move_room_into_overlap_applies_nudge() {
    let mut editor = demo_editor();
    let id = editor.doc().rooms[0].id;
    // Drop the living room onto the bedroom at (400, 0).
    editor.move_room(id, 450.0, 50.0);

    let room = editor.doc().room(id).unwrap();
    assert_eq!((room.x, room.y), (451.0, 51.0));
}

#[test]
fn move_room_refreshes_opening_segments() {
    let mut editor = demo_editor();
    let bedroom_id = editor.doc().rooms[1].id;
    editor.move_room(bedroom_id, 400.0, 1000.0);

    let segment_ys: Vec<f64> = editor
        .scene()
        .iter()
        .filter_map(|node| match node {
            SceneNode::Segment(segment) => Some(segment.y1),
            _ => None,
        })
        .collect();
    // Both of the bedroom's openings follow it to the new midpoint height.
    assert_eq!(segment_ys, vec![1150.0, 1150.0]);
}

#[test]
fn move_unknown_room_is_noop() {
    let mut editor = demo_editor();
    let scene_before = editor.scene().to_vec();
    editor.move_room(Uuid::new_v4(), 9.0, 9.0);
    assert_eq!(editor.scene(), &scene_before[..]);
}

#[test]
fn resize_room_applies_and_updates_label() {
    let mut editor = demo_editor();
    let id = editor.doc().rooms[0].id;
    editor.resize_room(id, 500.0, 400.0);

    let room = editor.doc().room(id).unwrap();
    assert_eq!((room.width, room.height), (500.0, 400.0));

    let SceneNode::Group(group) = editor
        .scene()
        .iter()
        .find(|node| node.group_name() == Some("Living Room"))
        .unwrap()
    else {
        panic!("expected a group");
    };
    let SceneNode::Label(label) = &group.children[1] else {
        panic!("expected a label");
    };
    assert_eq!(label.text, "Living Room (500 x 400)");
}

#[test]
fn resize_rejects_non_positive_dimensions() {
    let mut editor = demo_editor();
    let id = editor.doc().rooms[0].id;
    editor.resize_room(id, 0.0, 100.0);
    editor.resize_room(id, 100.0, -5.0);

    let room = editor.doc().room(id).unwrap();
    assert_eq!((room.width, room.height), (400.0, 300.0));
}
