use serde::{Deserialize, Serialize};

/// Circle anchored at its center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f64,
    #[serde(default = "default_fill")]
    pub fill: String,
}

fn default_fill() -> String {
    "#000000".to_string()
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            fill: default_fill(),
        }
    }
}
