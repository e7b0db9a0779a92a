//! Canonical object tree and lookup/update/delete by id.
//!
//! Children of `Group` and `Frame` objects are stored parent-relative,
//! uniformly. Absolute placement is derived on read by composing the
//! ancestor chain; nothing in the tree ever stores a derived absolute
//! coordinate, and derived bounds are never used to decide whether an
//! object stays in the tree.

use std::collections::HashSet;

use gallerykit_core::{constants, rotate_point, Bounds, DocumentError, Point};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{CanvasObject, ObjectPatch};

/// Direction for sibling reordering. `Up` moves the object later in
/// the list (painted above its neighbor), `Down` earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderDirection {
    Up,
    Down,
}

/// A gallery page: canvas dimensions, background, and the object tree.
/// Top-level order is paint order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub width: f64,
    pub height: f64,
    pub background: String,
    pub objects: Vec<CanvasObject>,
}

impl Document {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: constants::DEFAULT_BACKGROUND.to_string(),
            objects: Vec::new(),
        }
    }

    /// Depth-first lookup, including nested children.
    pub fn find(&self, id: Uuid) -> Option<&CanvasObject> {
        fn walk(objects: &[CanvasObject], id: Uuid) -> Option<&CanvasObject> {
            for obj in objects {
                if obj.id == id {
                    return Some(obj);
                }
                if let Some(children) = obj.children() {
                    if let Some(found) = walk(children, id) {
                        return Some(found);
                    }
                }
            }
            None
        }
        walk(&self.objects, id)
    }

    pub fn find_mut(&mut self, id: Uuid) -> Option<&mut CanvasObject> {
        fn walk(objects: &mut [CanvasObject], id: Uuid) -> Option<&mut CanvasObject> {
            for obj in objects {
                if obj.id == id {
                    return Some(obj);
                }
                if let Some(children) = obj.children_mut() {
                    if let Some(found) = walk(children, id) {
                        return Some(found);
                    }
                }
            }
            None
        }
        walk(&mut self.objects, id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.find(id).is_some()
    }

    /// Replaces the matching object with a patched copy. Returns
    /// `false` without touching anything when the id is absent.
    pub fn update(&mut self, id: Uuid, patch: &ObjectPatch) -> bool {
        match self.find_mut(id) {
            Some(obj) => {
                *obj = patch.apply_to(obj);
                true
            }
            None => {
                tracing::debug!(%id, "update on absent object ignored");
                false
            }
        }
    }

    /// Adds an object at the top level, painted above everything.
    pub fn insert(&mut self, obj: CanvasObject) {
        self.objects.push(obj);
    }

    /// Adds an object as the last child of a container.
    pub fn insert_into(&mut self, parent_id: Uuid, obj: CanvasObject) -> Result<(), DocumentError> {
        let parent = self
            .find_mut(parent_id)
            .ok_or(DocumentError::ObjectNotFound { id: parent_id })?;
        match parent.children_mut() {
            Some(children) => {
                children.push(obj);
                Ok(())
            }
            None => Err(DocumentError::Validation {
                message: format!("object {parent_id} is not a container"),
            }),
        }
    }

    /// Sibling list and index holding `id`: `(None, i)` for top-level
    /// objects, `(Some(parent_id), i)` for nested ones.
    pub fn locate(&self, id: Uuid) -> Option<(Option<Uuid>, usize)> {
        fn walk(
            objects: &[CanvasObject],
            parent: Option<Uuid>,
            id: Uuid,
        ) -> Option<(Option<Uuid>, usize)> {
            if let Some(pos) = objects.iter().position(|o| o.id == id) {
                return Some((parent, pos));
            }
            for obj in objects {
                if let Some(children) = obj.children() {
                    if let Some(found) = walk(children, Some(obj.id), id) {
                        return Some(found);
                    }
                }
            }
            None
        }
        walk(&self.objects, None, id)
    }

    /// Inserts at an exact position in a sibling list, clamping the
    /// index to the list length. Used to restore removed objects.
    pub fn insert_at(
        &mut self,
        parent: Option<Uuid>,
        index: usize,
        obj: CanvasObject,
    ) -> Result<(), DocumentError> {
        let siblings = match parent {
            None => &mut self.objects,
            Some(pid) => self
                .find_mut(pid)
                .ok_or(DocumentError::ObjectNotFound { id: pid })?
                .children_mut()
                .ok_or_else(|| DocumentError::Validation {
                    message: format!("object {pid} is not a container"),
                })?,
        };
        let index = index.min(siblings.len());
        siblings.insert(index, obj);
        Ok(())
    }

    /// Removes the object wherever it sits, top-level or nested.
    pub fn remove(&mut self, id: Uuid) -> Option<CanvasObject> {
        fn walk(objects: &mut Vec<CanvasObject>, id: Uuid) -> Option<CanvasObject> {
            if let Some(pos) = objects.iter().position(|o| o.id == id) {
                return Some(objects.remove(pos));
            }
            for obj in objects {
                if let Some(children) = obj.children_mut() {
                    if let Some(removed) = walk(children, id) {
                        return Some(removed);
                    }
                }
            }
            None
        }
        walk(&mut self.objects, id)
    }

    /// Swaps the object with its adjacent sibling at the same nesting
    /// level. Returns `false` at list boundaries or for unknown ids.
    pub fn reorder(&mut self, id: Uuid, direction: ReorderDirection) -> bool {
        fn walk(objects: &mut Vec<CanvasObject>, id: Uuid, direction: ReorderDirection) -> bool {
            if let Some(pos) = objects.iter().position(|o| o.id == id) {
                let target = match direction {
                    ReorderDirection::Up if pos + 1 < objects.len() => pos + 1,
                    ReorderDirection::Down if pos > 0 => pos - 1,
                    _ => return false,
                };
                objects.swap(pos, target);
                return true;
            }
            for obj in objects {
                if let Some(children) = obj.children_mut() {
                    if walk(children, id, direction) {
                        return true;
                    }
                }
            }
            false
        }
        walk(&mut self.objects, id, direction)
    }

    /// Anchor position of the object in canvas (absolute) coordinates,
    /// composing every ancestor's translation, rotation, and scale.
    pub fn absolute_position(&self, id: Uuid) -> Option<Point> {
        fn walk(objects: &[CanvasObject], id: Uuid, placement: Placement) -> Option<Point> {
            for obj in objects {
                if obj.id == id {
                    return Some(placement.apply(Point::new(obj.x, obj.y)));
                }
                if let Some(children) = obj.children() {
                    if let Some(p) = walk(children, id, placement.descend(obj)) {
                        return Some(p);
                    }
                }
            }
            None
        }
        walk(&self.objects, id, Placement::identity())
    }

    /// Bounding box of the object in canvas coordinates, derived on
    /// read. Display-only; never persisted, never a mutation criterion.
    pub fn absolute_bounds(&self, id: Uuid) -> Option<Bounds> {
        fn walk(objects: &[CanvasObject], id: Uuid, placement: Placement) -> Option<Bounds> {
            for obj in objects {
                if obj.id == id {
                    let b = obj.bounds();
                    let corners = [
                        placement.apply(Point::new(b.min_x, b.min_y)),
                        placement.apply(Point::new(b.max_x, b.min_y)),
                        placement.apply(Point::new(b.max_x, b.max_y)),
                        placement.apply(Point::new(b.min_x, b.max_y)),
                    ];
                    return Some(Bounds::from_corners(&corners));
                }
                if let Some(children) = obj.children() {
                    if let Some(b) = walk(children, id, placement.descend(obj)) {
                        return Some(b);
                    }
                }
            }
            None
        }
        walk(&self.objects, id, Placement::identity())
    }

    /// Checks the whole-tree id uniqueness invariant.
    pub fn validate(&self) -> Result<(), DocumentError> {
        fn walk(objects: &[CanvasObject], seen: &mut HashSet<Uuid>) -> Result<(), DocumentError> {
            for obj in objects {
                if !seen.insert(obj.id) {
                    return Err(DocumentError::DuplicateId { id: obj.id });
                }
                if let Some(children) = obj.children() {
                    walk(children, seen)?;
                }
            }
            Ok(())
        }
        let mut seen = HashSet::new();
        walk(&self.objects, &mut seen)
    }

    /// Depth-first traversal over every object in the tree.
    pub fn iter_depth_first(&self) -> impl Iterator<Item = &CanvasObject> {
        let mut stack: Vec<&CanvasObject> = self.objects.iter().rev().collect();
        std::iter::from_fn(move || {
            let obj = stack.pop()?;
            if let Some(children) = obj.children() {
                stack.extend(children.iter().rev());
            }
            Some(obj)
        })
    }

    /// Total object count, children included.
    pub fn total_count(&self) -> usize {
        self.iter_depth_first().count()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(
            constants::DEFAULT_CANVAS_WIDTH,
            constants::DEFAULT_CANVAS_HEIGHT,
        )
    }
}

/// Accumulated ancestor transform used while descending the tree.
#[derive(Debug, Clone, Copy)]
struct Placement {
    origin: Point,
    rotation: f64,
    scale_x: f64,
    scale_y: f64,
}

impl Placement {
    fn identity() -> Self {
        Self {
            origin: Point::new(0.0, 0.0),
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    /// Maps a point from this placement's local space to canvas space.
    fn apply(&self, p: Point) -> Point {
        let scaled = Point::new(p.x * self.scale_x, p.y * self.scale_y);
        let rotated = rotate_point(scaled, Point::new(0.0, 0.0), self.rotation);
        Point::new(self.origin.x + rotated.x, self.origin.y + rotated.y)
    }

    /// Placement for the children of `container`.
    fn descend(&self, container: &CanvasObject) -> Placement {
        Placement {
            origin: self.apply(Point::new(container.x, container.y)),
            rotation: self.rotation + container.rotation,
            scale_x: self.scale_x * container.scale_x,
            scale_y: self.scale_y * container.scale_y,
        }
    }
}
