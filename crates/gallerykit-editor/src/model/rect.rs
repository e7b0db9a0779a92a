use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_fill")]
    pub fill: String,
    #[serde(default)]
    pub corner_radius: f64,
}

fn default_fill() -> String {
    "#000000".to_string()
}

impl Rect {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            fill: default_fill(),
            corner_radius: 0.0,
        }
    }

    /// Corner radius clamped so opposite corners never overlap.
    pub fn effective_corner_radius(&self) -> f64 {
        self.corner_radius.min(self.width.min(self.height) / 2.0)
    }
}
