use gallerykit_editor::{
    CanvasObject, Circle, Document, Frame, GalleryFile, Group, Image, Line, ObjectKind, Rect,
    Text,
};
use gallerykit_core::Point;

fn full_document() -> Document {
    let mut doc = Document::new(1920.0, 1080.0);
    doc.background = "#1d1d1f".to_string();

    doc.insert(CanvasObject::new(
        10.0,
        10.0,
        ObjectKind::Rect(Rect::new(120.0, 80.0)),
    ));
    doc.insert(CanvasObject::new(
        300.0,
        300.0,
        ObjectKind::Circle(Circle::new(45.0)),
    ));
    doc.insert(CanvasObject::new(
        50.0,
        500.0,
        ObjectKind::Text(Text::new("Open studio night", 24.0)),
    ));
    doc.insert(CanvasObject::new(
        600.0,
        100.0,
        ObjectKind::Image(Image::new("https://cdn.example/u/paint.png", 240.0, 180.0)),
    ));
    doc.insert(CanvasObject::new(
        0.0,
        0.0,
        ObjectKind::Line(Line::new(vec![
            Point::new(0.0, 0.0),
            Point::new(50.0, 80.0),
            Point::new(120.0, 60.0),
        ])),
    ));

    let nested = CanvasObject::new(12.0, 12.0, ObjectKind::Circle(Circle::new(8.0)));
    let group = CanvasObject::new(800.0, 700.0, ObjectKind::Group(Group::new(vec![nested])));
    doc.insert(group);

    let mut frame = CanvasObject::new(1000.0, 100.0, ObjectKind::Frame(Frame::new(400.0, 300.0)));
    if let ObjectKind::Frame(f) = &mut frame.kind {
        f.children.push(CanvasObject::new(
            20.0,
            20.0,
            ObjectKind::Rect(Rect::new(60.0, 60.0)),
        ));
    }
    doc.insert(frame);
    doc
}

#[test]
fn every_kind_survives_a_round_trip() {
    let original = GalleryFile::new("Every kind", full_document());
    let json = original.to_json_string().unwrap();
    let reloaded = GalleryFile::from_json_str(&json).unwrap();

    assert_eq!(original.document, reloaded.document);
    assert_eq!(reloaded.document.total_count(), 9);
}

#[test]
fn reserialization_is_structurally_identical() {
    let original = GalleryFile::new("Stable", full_document());
    let first = original.to_json_string().unwrap();
    let second = GalleryFile::from_json_str(&first)
        .unwrap()
        .to_json_string()
        .unwrap();

    let a: serde_json::Value = serde_json::from_str(&first).unwrap();
    let b: serde_json::Value = serde_json::from_str(&second).unwrap();
    assert_eq!(a, b);
}

#[test]
fn truncated_json_is_rejected() {
    let json = GalleryFile::new("Cut off", full_document())
        .to_json_string()
        .unwrap();
    let truncated = &json[..json.len() / 2];
    assert!(GalleryFile::from_json_str(truncated).is_err());
}

#[test]
fn file_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gallery.json");

    let original = GalleryFile::new("On disk", full_document());
    original.save_to_file(&path).unwrap();

    let reloaded = GalleryFile::load_from_file(&path).unwrap();
    assert_eq!(original.document, reloaded.document);
    assert_eq!(reloaded.metadata.name, "On disk");
}

#[test]
fn viewport_state_is_not_persisted() {
    let json = GalleryFile::new("No ui state", full_document())
        .to_json_string()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    for key in ["zoom", "pan_x", "pan_y", "selection"] {
        assert!(value.get(key).is_none(), "unexpected key {key}");
    }
}
