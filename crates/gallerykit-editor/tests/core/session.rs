use gallerykit_core::Point;
use gallerykit_editor::{
    Circle, EditorSession, GalleryFile, ObjectKind, ObjectPatch, Rect, ReorderDirection,
};

#[test]
fn every_mutation_is_undoable() {
    let mut session = EditorSession::new();

    let a = session.add_object(10.0, 10.0, ObjectKind::Rect(Rect::new(50.0, 50.0)));
    let b = session.add_object(200.0, 200.0, ObjectKind::Circle(Circle::new(30.0)));

    session.select(a, false);
    session.select(b, true);
    session.translate_selected(5.0, 5.0);
    session.update_object(a, &ObjectPatch {
        opacity: Some(0.4),
        ..ObjectPatch::default()
    });
    session.select(a, false);
    session.reorder_selected(ReorderDirection::Up);

    // 5 mutations: two adds, one move, one update, one reorder.
    assert_eq!(session.history.undo_depth(), 5);

    while session.undo() {}
    assert!(session.document.objects.is_empty());
    assert!(!session.can_undo());
}

#[test]
fn session_reload_drops_ui_state_but_keeps_document() {
    let mut session = EditorSession::new();
    let id = session.add_object(50.0, 60.0, ObjectKind::Rect(Rect::new(40.0, 40.0)));
    session.viewport.set_zoom(3.0);
    session.select(id, false);

    let json = session.to_gallery().to_json_string().unwrap();
    let reopened = EditorSession::from_gallery(GalleryFile::from_json_str(&json).unwrap());

    assert!(reopened.document.contains(id));
    assert_eq!(reopened.viewport.zoom(), 1.0);
    assert_eq!(reopened.selected_count(), 0);
    assert!(!reopened.can_undo());
    assert!(!reopened.is_modified);
}

#[test]
fn modified_flag_follows_saves() {
    let mut session = EditorSession::new();
    assert!(!session.is_modified);

    session.add_object(0.0, 0.0, ObjectKind::Rect(Rect::new(10.0, 10.0)));
    assert!(session.is_modified);
    assert!(session.display_name().ends_with('*'));

    session.mark_saved();
    assert!(!session.is_modified);
    assert_eq!(session.display_name(), "Untitled");
}

#[test]
fn drag_with_snap_commits_snapped_position_as_one_step() {
    let mut session = EditorSession::new();
    session.grid_enabled = false;
    let id = session.add_object(0.0, 0.0, ObjectKind::Rect(Rect::new(60.0, 60.0)));

    session.begin_gesture(id);
    // Simulate a drag ending near the canvas center line (1080 wide).
    for proposed in [
        Point::new(200.0, 300.0),
        Point::new(400.0, 305.0),
        Point::new(514.0, 310.0),
    ] {
        let snapped = session.snap_drag(id, proposed);
        session.preview_gesture(&ObjectPatch::position(snapped.x, snapped.y));
    }
    session.end_gesture();

    // 540 - 30: the final preview landed on the snapped position.
    assert_eq!(session.document.find(id).unwrap().x, 510.0);
    session.undo();
    assert_eq!(session.document.find(id).unwrap().x, 0.0);
}
