use serde::{Deserialize, Serialize};

use super::CanvasObject;

/// Fixed-size container with its own backdrop. Children are positioned
/// relative to the frame's origin, same convention as [`super::Group`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default)]
    pub children: Vec<CanvasObject>,
}

fn default_background() -> String {
    "#ffffff".to_string()
}

impl Frame {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: default_background(),
            children: Vec::new(),
        }
    }
}
