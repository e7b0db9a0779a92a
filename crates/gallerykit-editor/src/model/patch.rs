use gallerykit_core::Point;

use super::{CanvasObject, ObjectKind};

/// Partial update applied to one object.
///
/// Unset fields are left alone. Fields that do not exist on the target
/// kind are ignored, so a patch can be built from a generic properties
/// panel without inspecting the object first. Applying a patch never
/// removes the object from its parent, whatever the resulting
/// position is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rotation: Option<f64>,
    pub scale_x: Option<f64>,
    pub scale_y: Option<f64>,
    pub opacity: Option<f64>,
    pub visible: Option<bool>,
    pub draggable: Option<bool>,
    pub z_index: Option<i32>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub radius: Option<f64>,
    pub corner_radius: Option<f64>,
    pub fill: Option<String>,
    pub content: Option<String>,
    pub font_size: Option<f64>,
    pub src: Option<String>,
    pub points: Option<Vec<Point>>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub background: Option<String>,
}

impl ObjectPatch {
    /// Patch that only moves the object.
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Returns a copy of `obj` with this patch applied.
    pub fn apply_to(&self, obj: &CanvasObject) -> CanvasObject {
        let mut out = obj.clone();

        if let Some(x) = self.x {
            out.x = x;
        }
        if let Some(y) = self.y {
            out.y = y;
        }
        if let Some(rotation) = self.rotation {
            out.rotation = rotation;
        }
        if let Some(scale_x) = self.scale_x {
            out.scale_x = scale_x;
        }
        if let Some(scale_y) = self.scale_y {
            out.scale_y = scale_y;
        }
        if let Some(opacity) = self.opacity {
            out.opacity = opacity.clamp(0.0, 1.0);
        }
        if let Some(visible) = self.visible {
            out.visible = visible;
        }
        if let Some(draggable) = self.draggable {
            out.draggable = draggable;
        }
        if let Some(z_index) = self.z_index {
            out.z_index = z_index;
        }

        match &mut out.kind {
            ObjectKind::Rect(r) => {
                if let Some(width) = self.width {
                    r.width = width;
                }
                if let Some(height) = self.height {
                    r.height = height;
                }
                if let Some(corner_radius) = self.corner_radius {
                    r.corner_radius = corner_radius;
                }
                if let Some(fill) = &self.fill {
                    r.fill = fill.clone();
                }
            }
            ObjectKind::Circle(c) => {
                if let Some(radius) = self.radius {
                    c.radius = radius;
                }
                if let Some(fill) = &self.fill {
                    c.fill = fill.clone();
                }
            }
            ObjectKind::Text(t) => {
                if let Some(content) = &self.content {
                    t.content = content.clone();
                }
                if let Some(font_size) = self.font_size {
                    t.font_size = font_size;
                }
                if let Some(fill) = &self.fill {
                    t.fill = fill.clone();
                }
            }
            ObjectKind::Image(i) => {
                if let Some(src) = &self.src {
                    i.src = src.clone();
                }
                if let Some(width) = self.width {
                    i.width = width;
                }
                if let Some(height) = self.height {
                    i.height = height;
                }
            }
            ObjectKind::Line(l) => {
                if let Some(points) = &self.points {
                    l.points = points.clone();
                }
                if let Some(stroke) = &self.stroke {
                    l.stroke = stroke.clone();
                }
                if let Some(stroke_width) = self.stroke_width {
                    l.stroke_width = stroke_width;
                }
            }
            ObjectKind::Group(_) => {}
            ObjectKind::Frame(f) => {
                if let Some(width) = self.width {
                    f.width = width;
                }
                if let Some(height) = self.height {
                    f.height = height;
                }
                if let Some(background) = &self.background {
                    f.background = background.clone();
                }
            }
        }

        out
    }
}
