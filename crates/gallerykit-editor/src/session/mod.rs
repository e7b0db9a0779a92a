//! Editor session state for UI integration.
//!
//! Owns the document, the command history, and the per-session UI
//! state (selection, clipboard, viewport, grid/snap toggles). Every
//! document mutation goes through [`History::execute`]; the only
//! exception is gesture previews, which are reconciled into a single
//! command when the gesture ends.
//!
//! Split into submodules:
//! - `objects`: add, delete, clipboard, group/ungroup, reorder
//! - `transforms`: move, align, gestures, snap-assisted dragging

mod objects;
mod transforms;

pub use transforms::Alignment;

use gallerykit_core::SnapConfig;
use uuid::Uuid;

use crate::document::Document;
use crate::history::History;
use crate::model::CanvasObject;
use crate::serialization::GalleryFile;
use crate::viewport::Viewport;

pub struct EditorSession {
    pub document: Document,
    pub history: History,
    pub viewport: Viewport,
    pub clipboard: Vec<CanvasObject>,
    pub grid_enabled: bool,
    pub snap_enabled: bool,
    pub snap_config: SnapConfig,
    pub is_modified: bool,
    pub gallery_name: String,
    selection: Vec<Uuid>,
    pub(crate) gesture: Option<transforms::Gesture>,
}

impl EditorSession {
    /// Creates a session over an empty default-sized document.
    pub fn new() -> Self {
        Self::with_document(Document::default(), "Untitled")
    }

    pub fn with_document(document: Document, name: impl Into<String>) -> Self {
        Self {
            document,
            history: History::with_default_capacity(),
            viewport: Viewport::default(),
            clipboard: Vec::new(),
            grid_enabled: true,
            snap_enabled: true,
            snap_config: SnapConfig::default(),
            is_modified: false,
            gallery_name: name.into(),
            selection: Vec::new(),
            gesture: None,
        }
    }

    /// Opens a persisted gallery. History, selection, and viewport
    /// start fresh; only document state survives a reload.
    pub fn from_gallery(file: GalleryFile) -> Self {
        let name = file.metadata.name.clone();
        Self::with_document(file.document, name)
    }

    /// Snapshot for persistence.
    pub fn to_gallery(&self) -> GalleryFile {
        GalleryFile::new(self.gallery_name.clone(), self.document.clone())
    }

    pub(crate) fn execute(&mut self, cmd: crate::command::EditorCommand) {
        self.history.execute(cmd, &mut self.document);
        self.is_modified = true;
    }

    /// Undo the last change.
    pub fn undo(&mut self) -> bool {
        self.cancel_gesture();
        let undone = self.history.undo(&mut self.document);
        if undone {
            self.is_modified = true;
            self.prune_selection();
        }
        undone
    }

    /// Redo the last undone change.
    pub fn redo(&mut self) -> bool {
        self.cancel_gesture();
        let redone = self.history.redo(&mut self.document);
        if redone {
            self.is_modified = true;
            self.prune_selection();
        }
        redone
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Selects an object, optionally keeping the current selection.
    /// Unknown ids are ignored.
    pub fn select(&mut self, id: Uuid, multi: bool) {
        if !self.document.contains(id) {
            return;
        }
        if !multi {
            self.selection.clear();
        }
        if !self.selection.contains(&id) {
            self.selection.push(id);
        }
    }

    pub fn deselect(&mut self, id: Uuid) {
        self.selection.retain(|s| *s != id);
    }

    pub fn deselect_all(&mut self) {
        self.selection.clear();
    }

    /// Selects every top-level object.
    pub fn select_all(&mut self) {
        self.selection = self.document.objects.iter().map(|o| o.id).collect();
    }

    pub fn selected_ids(&self) -> &[Uuid] {
        &self.selection
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub fn is_selected(&self, id: Uuid) -> bool {
        self.selection.contains(&id)
    }

    /// Drops selected ids that no longer exist (after undo of an add,
    /// delete, and similar).
    fn prune_selection(&mut self) {
        let doc = &self.document;
        self.selection.retain(|id| doc.contains(*id));
    }

    pub fn toggle_grid(&mut self) {
        self.grid_enabled = !self.grid_enabled;
    }

    pub fn toggle_snap(&mut self) {
        self.snap_enabled = !self.snap_enabled;
    }

    /// Called by the persistence layer after a successful save.
    pub fn mark_saved(&mut self) {
        self.is_modified = false;
    }

    /// Title-bar name, starred while unsaved changes exist.
    pub fn display_name(&self) -> String {
        if self.is_modified {
            format!("{}*", self.gallery_name)
        } else {
            self.gallery_name.clone()
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
