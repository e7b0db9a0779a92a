use gallerykit_core::{Bounds, Point};
use serde::{Deserialize, Serialize};

/// Polyline whose points are relative to the object's anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub points: Vec<Point>,
    #[serde(default = "default_stroke")]
    pub stroke: String,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
}

fn default_stroke() -> String {
    "#000000".to_string()
}

fn default_stroke_width() -> f64 {
    2.0
}

impl Line {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            stroke: default_stroke(),
            stroke_width: default_stroke_width(),
        }
    }

    /// Extent of the point list in local (anchor-relative) space.
    pub fn points_bounds(&self) -> Bounds {
        let mut b = Bounds::empty();
        for p in &self.points {
            b.min_x = b.min_x.min(p.x);
            b.min_y = b.min_y.min(p.y);
            b.max_x = b.max_x.max(p.x);
            b.max_y = b.max_y.max(p.y);
        }
        if b.is_empty() {
            Bounds::new(0.0, 0.0, 0.0, 0.0)
        } else {
            b
        }
    }
}
