use serde::{Deserialize, Serialize};

/// Bitmap placed on the canvas. `src` is the URL returned by the
/// backend's upload endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub width: f64,
    pub height: f64,
}

impl Image {
    pub fn new(src: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            src: src.into(),
            width,
            height,
        }
    }
}
