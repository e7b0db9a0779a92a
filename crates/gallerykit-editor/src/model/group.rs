use serde::{Deserialize, Serialize};

use super::CanvasObject;

/// Container whose children are positioned relative to its origin.
///
/// A group's own `(x, y)` is authoritative; its visual bounds are the
/// union of the children's transformed bounds, derived on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub children: Vec<CanvasObject>,
}

impl Group {
    pub fn new(children: Vec<CanvasObject>) -> Self {
        Self { children }
    }
}
