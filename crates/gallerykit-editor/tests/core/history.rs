use gallerykit_editor::{
    AddObject, CanvasObject, Document, EditorCommand, History, ObjectKind, Rect,
    TranslateObjects,
};

fn add(doc_obj: CanvasObject) -> EditorCommand {
    EditorCommand::Add(AddObject {
        id: doc_obj.id,
        parent: None,
        object: Some(doc_obj),
    })
}

fn rect(x: f64, y: f64) -> CanvasObject {
    CanvasObject::new(x, y, ObjectKind::Rect(Rect::new(25.0, 25.0)))
}

#[test]
fn fifty_one_commands_retain_fifty_steps() {
    let mut doc = Document::default();
    let mut history = History::new(50);

    let obj = rect(0.0, 0.0);
    let id = obj.id;
    history.execute(add(obj), &mut doc);
    for _ in 0..50 {
        history.execute(
            EditorCommand::Translate(TranslateObjects {
                ids: vec![id],
                dx: 2.0,
                dy: 0.0,
            }),
            &mut doc,
        );
    }

    assert_eq!(history.undo_depth(), 50);

    let mut undone = 0;
    while history.undo(&mut doc) {
        undone += 1;
    }
    assert_eq!(undone, 50);

    // The oldest command (the add) was evicted: the object survives at
    // its pre-translation position.
    assert!(doc.contains(id));
    assert_eq!(doc.find(id).unwrap().x, 0.0);
}

#[test]
fn undo_then_redo_round_trips_exactly() {
    let mut doc = Document::default();
    let mut history = History::new(50);

    let a = rect(10.0, 10.0);
    let b = rect(100.0, 100.0);
    let b_id = b.id;
    history.execute(add(a), &mut doc);
    history.execute(add(b), &mut doc);
    history.execute(
        EditorCommand::Translate(TranslateObjects {
            ids: vec![b_id],
            dx: -3.0,
            dy: 8.0,
        }),
        &mut doc,
    );

    let final_state = doc.clone();

    history.undo(&mut doc);
    history.undo(&mut doc);
    let mid_state = doc.clone();

    history.redo(&mut doc);
    history.redo(&mut doc);
    assert_eq!(doc, final_state);

    // And undoing again reproduces the intermediate state too.
    history.undo(&mut doc);
    history.undo(&mut doc);
    assert_eq!(doc, mid_state);
}

#[test]
fn descriptions_track_stack_tops() {
    let mut doc = Document::default();
    let mut history = History::new(10);

    assert!(history.undo_description().is_none());

    history.execute(add(rect(0.0, 0.0)), &mut doc);
    assert_eq!(history.undo_description().as_deref(), Some("Add object"));
    assert!(history.redo_description().is_none());

    history.undo(&mut doc);
    assert_eq!(history.redo_description().as_deref(), Some("Add object"));
}
