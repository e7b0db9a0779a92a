use gallerykit_core::{Point, SnapConfig};
use gallerykit_editor::snap::{snap_position, GuideOrientation, SnapContext, SnapSource};
use gallerykit_editor::{CanvasObject, Circle, ObjectKind, Rect};

fn context(siblings: &[CanvasObject]) -> SnapContext<'_> {
    SnapContext {
        canvas_width: 1080.0,
        canvas_height: 1080.0,
        siblings,
        zoom: 1.0,
        grid_enabled: false,
        config: SnapConfig::default(),
    }
}

#[test]
fn center_snap_yields_guide_and_position_from_the_contract() {
    // The documented behavior: an object whose center is within the
    // threshold of canvas_width / 2 snaps to
    // x = canvas_width / 2 - object_width / 2 with a guide at the
    // center line.
    let rect = CanvasObject::new(0.0, 0.0, ObjectKind::Rect(Rect::new(64.0, 64.0)));
    let result = snap_position(&rect, Point::new(514.0, 200.0), &context(&[]));

    assert_eq!(result.x, 1080.0 / 2.0 - 64.0 / 2.0);
    assert_eq!(result.guides.len(), 1);
    assert_eq!(result.guides[0].position, 540.0);
    assert_eq!(result.guides[0].orientation, GuideOrientation::Vertical);
}

#[test]
fn both_axes_snap_independently() {
    let rect = CanvasObject::new(0.0, 0.0, ObjectKind::Rect(Rect::new(64.0, 64.0)));
    let result = snap_position(&rect, Point::new(514.0, 511.0), &context(&[]));

    assert_eq!(result.x, 508.0);
    assert_eq!(result.y, 508.0);
    assert_eq!(result.guides.len(), 2);
}

#[test]
fn guides_vanish_outside_threshold() {
    let rect = CanvasObject::new(0.0, 0.0, ObjectKind::Rect(Rect::new(64.0, 64.0)));
    let result = snap_position(&rect, Point::new(100.0, 100.0), &context(&[]));
    assert!(result.guides.is_empty());
    assert_eq!((result.x, result.y), (100.0, 100.0));
}

#[test]
fn sibling_center_to_center_alignment() {
    let anchor = CanvasObject::new(100.0, 100.0, ObjectKind::Rect(Rect::new(80.0, 80.0)));
    let siblings = vec![anchor];

    // Moving rect center proposed at (143, 500): 3 off the sibling's
    // center x of 140.
    let moving = CanvasObject::new(0.0, 0.0, ObjectKind::Rect(Rect::new(40.0, 40.0)));
    let result = snap_position(&moving, Point::new(123.0, 500.0), &context(&siblings));

    assert_eq!(result.x, 120.0);
    assert_eq!(result.guides[0].source, SnapSource::Sibling);
    assert_eq!(result.guides[0].position, 140.0);
}

#[test]
fn hidden_siblings_do_not_attract() {
    let mut anchor = CanvasObject::new(100.0, 100.0, ObjectKind::Rect(Rect::new(80.0, 80.0)));
    anchor.visible = false;
    let siblings = vec![anchor];

    let moving = CanvasObject::new(0.0, 0.0, ObjectKind::Rect(Rect::new(40.0, 40.0)));
    let result = snap_position(&moving, Point::new(123.0, 500.0), &context(&siblings));
    assert!(result.guides.is_empty());
}

#[test]
fn rotated_rect_snaps_on_its_rotated_center() {
    // A 100x40 rect rotated 90 degrees around its top-left anchor has
    // its visual center at anchor + (-20, 50), not anchor + (50, 20).
    let mut rect = CanvasObject::new(0.0, 0.0, ObjectKind::Rect(Rect::new(100.0, 40.0)));
    rect.rotation = 90.0;

    // Proposed anchor (557, 200): center x = 557 - 20 = 537, within
    // threshold of 540. The unrotated center (607) would not be.
    let result = snap_position(&rect, Point::new(557.0, 200.0), &context(&[]));
    assert_eq!(result.guides.len(), 1);
    assert_eq!(result.guides[0].position, 540.0);
    assert!((result.x - 560.0).abs() < 1e-9);
}

#[test]
fn rotated_circle_anchor_is_its_center() {
    let mut circle = CanvasObject::new(0.0, 0.0, ObjectKind::Circle(Circle::new(25.0)));
    circle.rotation = 214.0;

    let result = snap_position(&circle, Point::new(538.0, 544.0), &context(&[]));
    assert_eq!((result.x, result.y), (540.0, 540.0));
    assert_eq!(result.guides.len(), 2);
    assert!(result
        .guides
        .iter()
        .all(|g| g.source == SnapSource::CanvasCenter));
}

#[test]
fn grid_beats_sibling_on_equal_distance() {
    // Sibling left edge at 104, grid line at 100; a leading edge
    // proposed at 102 is 2 away from both.
    let sibling = CanvasObject::new(104.0, 600.0, ObjectKind::Rect(Rect::new(50.0, 50.0)));
    let siblings = vec![sibling];

    let mut ctx = context(&siblings);
    ctx.grid_enabled = true;

    let moving = CanvasObject::new(0.0, 0.0, ObjectKind::Rect(Rect::new(30.0, 30.0)));
    let result = snap_position(&moving, Point::new(102.0, 300.0), &ctx);
    assert_eq!(result.x, 100.0);
    assert_eq!(result.guides[0].source, SnapSource::Grid);
}
