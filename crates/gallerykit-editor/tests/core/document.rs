use gallerykit_editor::{
    CanvasObject, Circle, Document, Frame, Group, ObjectKind, ObjectPatch, Rect, ReorderDirection,
};

fn rect(x: f64, y: f64, w: f64, h: f64) -> CanvasObject {
    CanvasObject::new(x, y, ObjectKind::Rect(Rect::new(w, h)))
}

#[test]
fn update_reflects_exactly_the_patched_fields_at_depth() {
    // Three levels: frame > group > rect.
    let leaf = rect(10.0, 10.0, 40.0, 30.0);
    let leaf_id = leaf.id;
    let group = CanvasObject::new(20.0, 20.0, ObjectKind::Group(Group::new(vec![leaf])));
    let mut frame = CanvasObject::new(0.0, 0.0, ObjectKind::Frame(Frame::new(500.0, 500.0)));
    if let ObjectKind::Frame(f) = &mut frame.kind {
        f.children.push(group);
    }

    let mut doc = Document::default();
    doc.insert(frame);

    let patch = ObjectPatch {
        x: Some(77.0),
        opacity: Some(0.5),
        width: Some(111.0),
        ..ObjectPatch::default()
    };
    assert!(doc.update(leaf_id, &patch));

    let updated = doc.find(leaf_id).unwrap();
    assert_eq!(updated.x, 77.0);
    assert_eq!(updated.opacity, 0.5);
    // Untouched fields keep their values.
    assert_eq!(updated.y, 10.0);
    assert_eq!(updated.rotation, 0.0);
    match &updated.kind {
        ObjectKind::Rect(r) => {
            assert_eq!(r.width, 111.0);
            assert_eq!(r.height, 30.0);
        }
        _ => unreachable!(),
    }
}

#[test]
fn repositioning_a_child_never_detaches_it() {
    let child = rect(5.0, 5.0, 20.0, 20.0);
    let child_id = child.id;
    let group = CanvasObject::new(100.0, 100.0, ObjectKind::Group(Group::new(vec![child])));
    let group_id = group.id;

    let mut doc = Document::default();
    doc.insert(group);

    // A string of moves, some far outside the group's derived bounds.
    for (x, y) in [(500.0, 500.0), (-300.0, 40.0), (0.0, -900.0), (2.0, 2.0)] {
        assert!(doc.update(child_id, &ObjectPatch::position(x, y)));
        let parent = doc.find(group_id).unwrap();
        let children = parent.children().unwrap();
        assert_eq!(children.len(), 1, "child vanished after move to ({x},{y})");
        assert_eq!(children[0].id, child_id);
    }
    assert_eq!(doc.total_count(), 2);
}

#[test]
fn container_bounds_are_derived_from_children() {
    let child = rect(0.0, 0.0, 10.0, 10.0);
    let child_id = child.id;
    let group = CanvasObject::new(100.0, 100.0, ObjectKind::Group(Group::new(vec![child])));
    let group_id = group.id;

    let mut doc = Document::default();
    doc.insert(group);

    let before = doc.absolute_bounds(group_id).unwrap();
    assert_eq!((before.min_x, before.max_x), (100.0, 110.0));

    doc.update(child_id, &ObjectPatch::position(50.0, 0.0));
    let after = doc.absolute_bounds(group_id).unwrap();
    assert_eq!((after.min_x, after.max_x), (150.0, 160.0));
}

#[test]
fn reorder_swaps_nested_siblings_only() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let b = rect(20.0, 0.0, 10.0, 10.0);
    let a_id = a.id;
    let b_id = b.id;
    let group = CanvasObject::new(0.0, 0.0, ObjectKind::Group(Group::new(vec![a, b])));
    let group_id = group.id;
    let top = rect(50.0, 50.0, 10.0, 10.0);
    let top_id = top.id;

    let mut doc = Document::default();
    doc.insert(group);
    doc.insert(top);

    assert!(doc.reorder(a_id, ReorderDirection::Up));
    let children = doc.find(group_id).unwrap().children().unwrap();
    assert_eq!(children[0].id, b_id);
    assert_eq!(children[1].id, a_id);

    // The top-level list is untouched.
    assert_eq!(doc.objects[0].id, group_id);
    assert_eq!(doc.objects[1].id, top_id);
}

#[test]
fn find_missing_id_returns_none() {
    let mut doc = Document::default();
    doc.insert(rect(0.0, 0.0, 10.0, 10.0));
    assert!(doc.find(uuid::Uuid::new_v4()).is_none());
}

#[test]
fn circle_absolute_bounds_through_rotated_parent() {
    let circle = CanvasObject::new(30.0, 0.0, ObjectKind::Circle(Circle::new(10.0)));
    let circle_id = circle.id;
    let mut group = CanvasObject::new(200.0, 200.0, ObjectKind::Group(Group::new(vec![circle])));
    group.rotation = 90.0;

    let mut doc = Document::default();
    doc.insert(group);

    // Circle center (30, 0) in group space lands at (200, 230).
    let b = doc.absolute_bounds(circle_id).unwrap();
    assert!((b.center().x - 200.0).abs() < 1e-9);
    assert!((b.center().y - 230.0).abs() < 1e-9);
    assert!((b.width() - 20.0).abs() < 1e-9);
}
