//! Move, align, and gesture operations for the editor session.
//!
//! Continuous interactions (dragging an object, scrubbing a rotation
//! or opacity slider) must not flood the history with one command per
//! intermediate value. A gesture captures the object's state once at
//! the start, previews intermediate values by mutating the document
//! directly, and commits exactly one state-swap command at the end,
//! so one user action is one undo step.

use gallerykit_core::{Bounds, Point};
use uuid::Uuid;

use super::EditorSession;
use crate::command::{CompositeCommand, EditorCommand, TranslateObjects, UpdateObject};
use crate::model::{CanvasObject, ObjectPatch};
use crate::snap::{snap_position, SnapContext, SnapResult};

/// Alignment targets for multi-selection alignment.
pub enum Alignment {
    Left,
    CenterHorizontal,
    Right,
    Top,
    CenterVertical,
    Bottom,
}

/// In-flight continuous interaction.
pub(crate) struct Gesture {
    id: Uuid,
    old_state: CanvasObject,
}

impl EditorSession {
    /// Moves the selected objects by a delta, one undo step.
    pub fn translate_selected(&mut self, dx: f64, dy: f64) {
        let ids: Vec<Uuid> = self.selected_ids().to_vec();
        if ids.is_empty() {
            return;
        }
        self.execute(EditorCommand::Translate(TranslateObjects { ids, dx, dy }));
    }

    /// One-shot patch of a single object as its own undo step.
    /// Returns `false` (and changes nothing) for unknown ids.
    pub fn update_object(&mut self, id: Uuid, patch: &ObjectPatch) -> bool {
        let Some(old_state) = self.document.find(id).cloned() else {
            tracing::debug!(%id, "update on absent object ignored");
            return false;
        };
        let new_state = patch.apply_to(&old_state);
        if new_state == old_state {
            return true;
        }
        self.execute(EditorCommand::Update(UpdateObject {
            id,
            old_state,
            new_state,
        }));
        true
    }

    /// Starts a continuous interaction on one object, capturing its
    /// state for the eventual single undo step. An already-running
    /// gesture is committed first.
    pub fn begin_gesture(&mut self, id: Uuid) -> bool {
        if self.gesture.is_some() {
            self.end_gesture();
        }
        match self.document.find(id) {
            Some(obj) => {
                self.gesture = Some(Gesture {
                    id,
                    old_state: obj.clone(),
                });
                true
            }
            None => false,
        }
    }

    /// Applies an intermediate value during a gesture. Bypasses the
    /// history on purpose; `end_gesture` reconciles.
    pub fn preview_gesture(&mut self, patch: &ObjectPatch) {
        if let Some(gesture) = &self.gesture {
            let id = gesture.id;
            self.document.update(id, patch);
        }
    }

    /// Ends the interaction, committing one command covering the whole
    /// gesture. A gesture that changed nothing leaves no history entry.
    pub fn end_gesture(&mut self) -> bool {
        let Some(gesture) = self.gesture.take() else {
            return false;
        };
        let Some(new_state) = self.document.find(gesture.id).cloned() else {
            return false;
        };
        if new_state == gesture.old_state {
            return false;
        }
        self.execute(EditorCommand::Update(UpdateObject {
            id: gesture.id,
            old_state: gesture.old_state,
            new_state,
        }));
        true
    }

    /// Abandons the interaction, restoring the captured state.
    pub fn cancel_gesture(&mut self) {
        if let Some(gesture) = self.gesture.take() {
            if let Some(obj) = self.document.find_mut(gesture.id) {
                *obj = gesture.old_state;
            }
        }
    }

    /// Snap query for a drag in progress. Respects the session's snap
    /// toggle; with snapping off the position passes through with no
    /// guides. Siblings are the objects at the dragged object's own
    /// nesting level.
    pub fn snap_drag(&self, id: Uuid, proposed: Point) -> SnapResult {
        let Some(moving) = self.document.find(id) else {
            return SnapResult {
                x: proposed.x,
                y: proposed.y,
                guides: Default::default(),
            };
        };
        if !self.snap_enabled {
            return SnapResult {
                x: proposed.x,
                y: proposed.y,
                guides: Default::default(),
            };
        }

        let parent = self.document.locate(id).and_then(|(parent, _)| parent);
        let siblings = match parent {
            None => &self.document.objects,
            Some(pid) => match self.document.find(pid).and_then(|p| p.children()) {
                Some(children) => children,
                None => &self.document.objects,
            },
        };

        let ctx = SnapContext {
            canvas_width: self.document.width,
            canvas_height: self.document.height,
            siblings,
            zoom: self.viewport.zoom(),
            grid_enabled: self.grid_enabled,
            config: self.snap_config,
        };
        snap_position(moving, proposed, &ctx)
    }

    /// Aligns the selected objects to the selection's union bounds,
    /// one undo step. Needs at least two selected objects.
    pub fn align_selected(&mut self, alignment: Alignment) {
        let ids: Vec<Uuid> = self.selected_ids().to_vec();
        if ids.len() < 2 {
            return;
        }

        let mut union = Bounds::empty();
        let mut boxed = Vec::with_capacity(ids.len());
        for id in &ids {
            if let Some(b) = self.document.absolute_bounds(*id) {
                union = union.union(&b);
                boxed.push((*id, b));
            }
        }
        if union.is_empty() {
            return;
        }

        let mut commands = Vec::new();
        for (id, b) in boxed {
            let (dx, dy) = match alignment {
                Alignment::Left => (union.min_x - b.min_x, 0.0),
                Alignment::CenterHorizontal => (union.center().x - b.center().x, 0.0),
                Alignment::Right => (union.max_x - b.max_x, 0.0),
                Alignment::Top => (0.0, union.min_y - b.min_y),
                Alignment::CenterVertical => (0.0, union.center().y - b.center().y),
                Alignment::Bottom => (0.0, union.max_y - b.max_y),
            };
            if dx != 0.0 || dy != 0.0 {
                commands.push(EditorCommand::Translate(TranslateObjects {
                    ids: vec![id],
                    dx,
                    dy,
                }));
            }
        }
        if commands.is_empty() {
            return;
        }

        self.execute(EditorCommand::Composite(CompositeCommand {
            commands,
            name: "Align objects".to_string(),
        }));
    }
}
