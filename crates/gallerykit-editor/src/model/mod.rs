use gallerykit_core::{rotate_point, Bounds, Point};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod circle;
mod frame;
mod group;
mod image;
mod line;
mod patch;
mod rect;
mod text;

pub use circle::Circle;
pub use frame::Frame;
pub use group::Group;
pub use image::Image;
pub use line::Line;
pub use patch::ObjectPatch;
pub use rect::Rect;
pub use text::Text;

fn default_scale() -> f64 {
    1.0
}

fn default_opacity() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}

/// One drawable entity in a gallery document.
///
/// Common placement fields live here; everything shape-specific lives
/// in the closed [`ObjectKind`] union. `(x, y)` is the object's anchor
/// in its parent's coordinate space: the top-left corner for boxy
/// kinds, the center for circles, the local origin for lines and
/// containers. Rotation is in degrees around the anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasObject {
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "default_scale")]
    pub scale_x: f64,
    #[serde(default = "default_scale")]
    pub scale_y: f64,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default = "default_true")]
    pub draggable: bool,
    #[serde(default)]
    pub z_index: i32,
    #[serde(flatten)]
    pub kind: ObjectKind,
}

/// Closed union of drawable kinds.
///
/// Every per-object operation is an exhaustive `match` over this enum;
/// adding a kind means adding one variant here and one arm per visitor,
/// which the compiler enforces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ObjectKind {
    Rect(Rect),
    Circle(Circle),
    Text(Text),
    Image(Image),
    Line(Line),
    Group(Group),
    Frame(Frame),
}

impl CanvasObject {
    /// Creates an object with a fresh id and default placement fields.
    pub fn new(x: f64, y: f64, kind: ObjectKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            x,
            y,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            opacity: 1.0,
            visible: true,
            draggable: true,
            z_index: 0,
            kind,
        }
    }

    /// Display name for layer lists and command descriptions.
    pub fn label(&self) -> &'static str {
        match &self.kind {
            ObjectKind::Rect(_) => "Rectangle",
            ObjectKind::Circle(_) => "Circle",
            ObjectKind::Text(_) => "Text",
            ObjectKind::Image(_) => "Image",
            ObjectKind::Line(_) => "Line",
            ObjectKind::Group(_) => "Group",
            ObjectKind::Frame(_) => "Frame",
        }
    }

    /// Child list for container kinds, `None` for leaves.
    pub fn children(&self) -> Option<&Vec<CanvasObject>> {
        match &self.kind {
            ObjectKind::Group(g) => Some(&g.children),
            ObjectKind::Frame(f) => Some(&f.children),
            ObjectKind::Rect(_)
            | ObjectKind::Circle(_)
            | ObjectKind::Text(_)
            | ObjectKind::Image(_)
            | ObjectKind::Line(_) => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<CanvasObject>> {
        match &mut self.kind {
            ObjectKind::Group(g) => Some(&mut g.children),
            ObjectKind::Frame(f) => Some(&mut f.children),
            ObjectKind::Rect(_)
            | ObjectKind::Circle(_)
            | ObjectKind::Text(_)
            | ObjectKind::Image(_)
            | ObjectKind::Line(_) => None,
        }
    }

    /// Extent of the object before rotation, in its parent's space.
    ///
    /// Container bounds are derived from children on every call and
    /// never stored; a child moving outside them changes the result of
    /// the next call, nothing else.
    fn unrotated_bounds(&self) -> Bounds {
        match &self.kind {
            ObjectKind::Rect(r) => Bounds::new(
                self.x,
                self.y,
                self.x + r.width * self.scale_x,
                self.y + r.height * self.scale_y,
            ),
            ObjectKind::Circle(c) => {
                let rx = c.radius * self.scale_x;
                let ry = c.radius * self.scale_y;
                Bounds::new(self.x - rx, self.y - ry, self.x + rx, self.y + ry)
            }
            ObjectKind::Text(t) => {
                let (w, h) = t.estimated_size();
                Bounds::new(
                    self.x,
                    self.y,
                    self.x + w * self.scale_x,
                    self.y + h * self.scale_y,
                )
            }
            ObjectKind::Image(i) => Bounds::new(
                self.x,
                self.y,
                self.x + i.width * self.scale_x,
                self.y + i.height * self.scale_y,
            ),
            ObjectKind::Line(l) => {
                let b = l.points_bounds();
                Bounds::new(
                    self.x + b.min_x * self.scale_x,
                    self.y + b.min_y * self.scale_y,
                    self.x + b.max_x * self.scale_x,
                    self.y + b.max_y * self.scale_y,
                )
            }
            ObjectKind::Group(g) => {
                let mut union = Bounds::empty();
                for child in &g.children {
                    union = union.union(&child.bounds());
                }
                if union.is_empty() {
                    return Bounds::new(self.x, self.y, self.x, self.y);
                }
                Bounds::new(
                    self.x + union.min_x * self.scale_x,
                    self.y + union.min_y * self.scale_y,
                    self.x + union.max_x * self.scale_x,
                    self.y + union.max_y * self.scale_y,
                )
            }
            ObjectKind::Frame(f) => Bounds::new(
                self.x,
                self.y,
                self.x + f.width * self.scale_x,
                self.y + f.height * self.scale_y,
            ),
        }
    }

    /// Bounding box in the parent's coordinate space, rotation applied.
    pub fn bounds(&self) -> Bounds {
        let b = self.unrotated_bounds();
        if self.rotation.abs() < 1e-9 {
            return b;
        }
        let anchor = Point::new(self.x, self.y);
        let corners = [
            rotate_point(Point::new(b.min_x, b.min_y), anchor, self.rotation),
            rotate_point(Point::new(b.max_x, b.min_y), anchor, self.rotation),
            rotate_point(Point::new(b.max_x, b.max_y), anchor, self.rotation),
            rotate_point(Point::new(b.min_x, b.max_y), anchor, self.rotation),
        ];
        Bounds::from_corners(&corners)
    }

    /// Center the user perceives, i.e. the unrotated center carried
    /// through the object's rotation around its anchor. For circles the
    /// anchor is the center, so rotation leaves it in place.
    pub fn visual_center(&self) -> Point {
        let center = self.unrotated_bounds().center();
        if self.rotation.abs() < 1e-9 {
            return center;
        }
        rotate_point(center, Point::new(self.x, self.y), self.rotation)
    }

    /// Clones this object with fresh ids throughout, for paste.
    pub fn deep_clone_with_new_ids(&self) -> CanvasObject {
        let mut copy = self.clone();
        copy.reassign_ids();
        copy
    }

    fn reassign_ids(&mut self) {
        self.id = Uuid::new_v4();
        if let Some(children) = self.children_mut() {
            for child in children {
                child.reassign_ids();
            }
        }
    }
}
