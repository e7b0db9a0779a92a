//! Object operations (add, delete, clipboard, grouping, reordering)
//! for the editor session.

use gallerykit_core::Bounds;
use uuid::Uuid;

use super::EditorSession;
use crate::command::{
    AddObject, CompositeCommand, EditorCommand, GroupObjects, PasteObjects, RemoveObject,
    ReorderObject, UngroupObjects,
};
use crate::document::ReorderDirection;
use crate::model::{CanvasObject, ObjectKind};

impl EditorSession {
    /// Adds an object at the top level, selecting it.
    pub fn add_object(&mut self, x: f64, y: f64, kind: ObjectKind) -> Uuid {
        let obj = CanvasObject::new(x, y, kind);
        let id = obj.id;
        self.execute(EditorCommand::Add(AddObject {
            id,
            parent: None,
            object: Some(obj),
        }));
        self.deselect_all();
        self.select(id, false);
        id
    }

    /// Adds an object as the last child of a container. Returns the
    /// new id, or `None` when the parent is missing or not a
    /// container (nothing is mutated in that case).
    pub fn add_object_to(
        &mut self,
        parent_id: Uuid,
        x: f64,
        y: f64,
        kind: ObjectKind,
    ) -> Option<Uuid> {
        let is_container = self
            .document
            .find(parent_id)
            .map(|p| p.children().is_some())?;
        if !is_container {
            tracing::debug!(%parent_id, "add into non-container refused");
            return None;
        }

        let obj = CanvasObject::new(x, y, kind);
        let id = obj.id;
        self.execute(EditorCommand::Add(AddObject {
            id,
            parent: Some(parent_id),
            object: Some(obj),
        }));
        Some(id)
    }

    /// Deletes the selected objects as one undo step.
    pub fn delete_selected(&mut self) {
        let ids: Vec<Uuid> = self.selected_ids().to_vec();
        if ids.is_empty() {
            return;
        }

        let commands = ids
            .into_iter()
            .map(|id| EditorCommand::Remove(RemoveObject { id, object: None }))
            .collect();

        self.execute(EditorCommand::Composite(CompositeCommand {
            commands,
            name: "Delete objects".to_string(),
        }));
        self.deselect_all();
    }

    /// Copies selected objects into the session clipboard. Clipboard
    /// entries are deep clones; ids are remapped at paste time.
    pub fn copy_selected(&mut self) {
        let doc = &self.document;
        self.clipboard = self
            .selected_ids()
            .iter()
            .filter_map(|id| doc.find(*id).cloned())
            .collect();
    }

    /// Pastes the clipboard centered on the given canvas point, as a
    /// single undo step. Pasted objects get fresh ids throughout and
    /// become the new selection.
    pub fn paste_at(&mut self, x: f64, y: f64) {
        if self.clipboard.is_empty() {
            return;
        }

        let mut union = Bounds::empty();
        for obj in &self.clipboard {
            union = union.union(&obj.bounds());
        }
        let center = union.center();
        let dx = x - center.x;
        let dy = y - center.y;

        let mut ids = Vec::with_capacity(self.clipboard.len());
        let mut objects = Vec::with_capacity(self.clipboard.len());
        for obj in &self.clipboard {
            let mut copy = obj.deep_clone_with_new_ids();
            copy.x += dx;
            copy.y += dy;
            ids.push(copy.id);
            objects.push(Some(copy));
        }

        self.execute(EditorCommand::Paste(PasteObjects {
            ids: ids.clone(),
            objects,
        }));

        self.deselect_all();
        for id in ids {
            self.select(id, true);
        }
    }

    /// True when at least two top-level siblings are selected.
    pub fn can_group(&self) -> bool {
        self.selected_ids().len() >= 2
            && self
                .selected_ids()
                .iter()
                .all(|id| self.document.locate(*id).map(|(p, _)| p) == Some(None))
    }

    /// True when any selected object is a group.
    pub fn can_ungroup(&self) -> bool {
        self.selected_ids().iter().any(|id| {
            matches!(
                self.document.find(*id).map(|o| &o.kind),
                Some(ObjectKind::Group(_))
            )
        })
    }

    /// Wraps the selected top-level objects into a new group whose
    /// children keep their absolute placement.
    pub fn group_selected(&mut self) -> Option<Uuid> {
        if !self.can_group() {
            return None;
        }

        // Keep paint order inside the group.
        let mut member_ids: Vec<Uuid> = self
            .document
            .objects
            .iter()
            .map(|o| o.id)
            .filter(|id| self.is_selected(*id))
            .collect();
        member_ids.dedup();

        let group_id = Uuid::new_v4();
        self.execute(EditorCommand::Group(GroupObjects::new(
            group_id,
            member_ids,
        )));
        self.deselect_all();
        self.select(group_id, false);
        Some(group_id)
    }

    /// Dissolves selected groups, children keeping their absolute
    /// placement, all as one undo step.
    pub fn ungroup_selected(&mut self) {
        let group_ids: Vec<Uuid> = self
            .selected_ids()
            .iter()
            .copied()
            .filter(|id| {
                matches!(
                    self.document.find(*id).map(|o| &o.kind),
                    Some(ObjectKind::Group(_))
                )
            })
            .collect();
        if group_ids.is_empty() {
            return;
        }

        let members: Vec<Uuid> = group_ids
            .iter()
            .filter_map(|id| self.document.find(*id))
            .flat_map(|g| g.children().into_iter().flatten().map(|c| c.id))
            .collect();

        let commands = group_ids
            .into_iter()
            .map(|id| EditorCommand::Ungroup(UngroupObjects::new(id)))
            .collect();

        self.execute(EditorCommand::Composite(CompositeCommand {
            commands,
            name: "Ungroup objects".to_string(),
        }));

        self.deselect_all();
        for id in members {
            self.select(id, true);
        }
    }

    /// Moves the single selected object one step in paint order.
    pub fn reorder_selected(&mut self, direction: ReorderDirection) {
        let &[id] = self.selected_ids() else {
            return;
        };
        self.execute(EditorCommand::Reorder(ReorderObject::new(id, direction)));
    }
}
