use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub content: String,
    pub font_size: f64,
    #[serde(default = "default_fill")]
    pub fill: String,
}

fn default_fill() -> String {
    "#000000".to_string()
}

impl Text {
    pub fn new(content: impl Into<String>, font_size: f64) -> Self {
        Self {
            content: content.into(),
            font_size,
            fill: default_fill(),
        }
    }

    /// Rough display extent. Real text metrics belong to the renderer;
    /// this is only used for snapping and layer-list bounds.
    pub fn estimated_size(&self) -> (f64, f64) {
        let longest_line = self
            .content
            .lines()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        let line_count = self.content.lines().count().max(1);
        (
            longest_line as f64 * self.font_size * 0.6,
            line_count as f64 * self.font_size * 1.2,
        )
    }
}
