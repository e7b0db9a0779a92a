//! Undoable units of document mutation.
//!
//! Every user-initiated mutation is expressed as an [`EditorCommand`]
//! and routed through [`crate::history::History`]; mutating the
//! document directly from UI code bypasses undo and is a bug. Commands
//! carry the data their own inverse needs (the removed object, the
//! previous state, the negated delta), following the pattern of
//! swapping ownership between the command and the tree.

use gallerykit_core::{rotate_point, Bounds, Point};
use uuid::Uuid;

use crate::document::{Document, ReorderDirection};
use crate::model::{CanvasObject, Group, ObjectKind};

#[derive(Debug, Clone)]
pub enum EditorCommand {
    Add(AddObject),
    Remove(RemoveObject),
    Update(UpdateObject),
    Translate(TranslateObjects),
    Paste(PasteObjects),
    Reorder(ReorderObject),
    Group(GroupObjects),
    Ungroup(UngroupObjects),
    Composite(CompositeCommand),
}

#[derive(Debug, Clone)]
pub struct AddObject {
    pub id: Uuid,
    /// Target container; `None` adds at the top level.
    pub parent: Option<Uuid>,
    /// `Some` while off the document (before apply / after undo).
    pub object: Option<CanvasObject>,
}

#[derive(Debug, Clone)]
pub struct RemoveObject {
    pub id: Uuid,
    /// `Some` while removed, together with where it came from.
    pub object: Option<(CanvasObject, Option<Uuid>, usize)>,
}

#[derive(Debug, Clone)]
pub struct UpdateObject {
    pub id: Uuid,
    pub old_state: CanvasObject,
    pub new_state: CanvasObject,
}

#[derive(Debug, Clone)]
pub struct TranslateObjects {
    pub ids: Vec<Uuid>,
    pub dx: f64,
    pub dy: f64,
}

#[derive(Debug, Clone)]
pub struct PasteObjects {
    pub ids: Vec<Uuid>,
    /// `Some` while off the document.
    pub objects: Vec<Option<CanvasObject>>,
}

#[derive(Debug, Clone)]
pub struct ReorderObject {
    pub id: Uuid,
    pub direction: ReorderDirection,
    /// Whether apply actually swapped; a boundary no-op must not be
    /// inverted on undo.
    moved: bool,
}

impl ReorderObject {
    pub fn new(id: Uuid, direction: ReorderDirection) -> Self {
        Self {
            id,
            direction,
            moved: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GroupObjects {
    pub group_id: Uuid,
    pub member_ids: Vec<Uuid>,
    /// Original member states and locations, captured on apply.
    removed: Vec<(CanvasObject, Option<Uuid>, usize)>,
}

impl GroupObjects {
    pub fn new(group_id: Uuid, member_ids: Vec<Uuid>) -> Self {
        Self {
            group_id,
            member_ids,
            removed: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UngroupObjects {
    pub group_id: Uuid,
    /// Original group object and location, captured on apply.
    original: Option<(CanvasObject, Option<Uuid>, usize)>,
}

impl UngroupObjects {
    pub fn new(group_id: Uuid) -> Self {
        Self {
            group_id,
            original: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompositeCommand {
    pub commands: Vec<EditorCommand>,
    pub name: String,
}

impl EditorCommand {
    /// Human-readable label for history UI.
    pub fn description(&self) -> String {
        match self {
            EditorCommand::Add(_) => "Add object".to_string(),
            EditorCommand::Remove(_) => "Delete object".to_string(),
            EditorCommand::Update(cmd) => format!("Edit {}", cmd.new_state.label()),
            EditorCommand::Translate(cmd) => {
                if cmd.ids.len() == 1 {
                    "Move object".to_string()
                } else {
                    format!("Move {} objects", cmd.ids.len())
                }
            }
            EditorCommand::Paste(cmd) => format!("Paste {} objects", cmd.ids.len()),
            EditorCommand::Reorder(_) => "Reorder object".to_string(),
            EditorCommand::Group(_) => "Group objects".to_string(),
            EditorCommand::Ungroup(_) => "Ungroup objects".to_string(),
            EditorCommand::Composite(cmd) => cmd.name.clone(),
        }
    }

    pub fn apply(&mut self, doc: &mut Document) {
        match self {
            EditorCommand::Add(cmd) => {
                if let Some(obj) = cmd.object.take() {
                    match cmd.parent {
                        None => doc.insert(obj),
                        Some(parent_id) => {
                            if let Err(err) = doc.insert_into(parent_id, obj) {
                                tracing::warn!(%err, "add target vanished, skipping");
                            }
                        }
                    }
                }
            }
            EditorCommand::Remove(cmd) => {
                if let Some(location) = doc.locate(cmd.id) {
                    if let Some(obj) = doc.remove(cmd.id) {
                        cmd.object = Some((obj, location.0, location.1));
                    }
                }
            }
            EditorCommand::Update(cmd) => {
                if let Some(obj) = doc.find_mut(cmd.id) {
                    *obj = cmd.new_state.clone();
                }
            }
            EditorCommand::Translate(cmd) => {
                for id in &cmd.ids {
                    if let Some(obj) = doc.find_mut(*id) {
                        obj.x += cmd.dx;
                        obj.y += cmd.dy;
                    }
                }
            }
            EditorCommand::Paste(cmd) => {
                for slot in &mut cmd.objects {
                    if let Some(obj) = slot.take() {
                        doc.insert(obj);
                    }
                }
            }
            EditorCommand::Reorder(cmd) => {
                cmd.moved = doc.reorder(cmd.id, cmd.direction);
            }
            EditorCommand::Group(cmd) => {
                cmd.removed.clear();
                for id in &cmd.member_ids {
                    if let Some((parent, index)) = doc.locate(*id) {
                        if let Some(obj) = doc.remove(*id) {
                            cmd.removed.push((obj, parent, index));
                        }
                    }
                }
                if cmd.removed.is_empty() {
                    return;
                }

                // Group origin: min corner of the members' union bounds,
                // so children keep small non-negative offsets.
                let mut union = Bounds::empty();
                for (obj, _, _) in &cmd.removed {
                    union = union.union(&obj.bounds());
                }
                let origin = Point::new(union.min_x, union.min_y);

                let parent = cmd.removed[0].1;
                let index = cmd
                    .removed
                    .iter()
                    .filter(|(_, p, _)| *p == parent)
                    .map(|(_, _, i)| *i)
                    .min()
                    .unwrap_or(0);

                let children: Vec<CanvasObject> = cmd
                    .removed
                    .iter()
                    .map(|(obj, _, _)| {
                        let mut child = obj.clone();
                        child.x -= origin.x;
                        child.y -= origin.y;
                        child
                    })
                    .collect();

                let mut group =
                    CanvasObject::new(origin.x, origin.y, ObjectKind::Group(Group::new(children)));
                group.id = cmd.group_id;

                if doc.insert_at(parent, index, group).is_err() {
                    // Parent vanished between capture and insert; fall
                    // back to the top level rather than losing objects.
                    let mut group = CanvasObject::new(
                        origin.x,
                        origin.y,
                        ObjectKind::Group(Group::new(
                            cmd.removed
                                .iter()
                                .map(|(obj, _, _)| {
                                    let mut child = obj.clone();
                                    child.x -= origin.x;
                                    child.y -= origin.y;
                                    child
                                })
                                .collect(),
                        )),
                    );
                    group.id = cmd.group_id;
                    doc.insert(group);
                }
            }
            EditorCommand::Ungroup(cmd) => {
                let Some((parent, index)) = doc.locate(cmd.group_id) else {
                    return;
                };
                let Some(group) = doc.remove(cmd.group_id) else {
                    return;
                };

                let children = group.children().cloned().unwrap_or_default();
                for (offset, child) in children.into_iter().enumerate() {
                    let rebased = rebase_to_parent_space(&group, child);
                    if doc.insert_at(parent, index + offset, rebased).is_err() {
                        tracing::warn!(group = %cmd.group_id, "ungroup parent vanished");
                    }
                }
                cmd.original = Some((group, parent, index));
            }
            EditorCommand::Composite(cmd) => {
                for sub in &mut cmd.commands {
                    sub.apply(doc);
                }
            }
        }
    }

    pub fn undo(&mut self, doc: &mut Document) {
        match self {
            EditorCommand::Add(cmd) => {
                if let Some(obj) = doc.remove(cmd.id) {
                    cmd.object = Some(obj);
                }
            }
            EditorCommand::Remove(cmd) => {
                if let Some((obj, parent, index)) = cmd.object.take() {
                    if doc.insert_at(parent, index, obj.clone()).is_err() {
                        doc.insert(obj);
                    }
                }
            }
            EditorCommand::Update(cmd) => {
                if let Some(obj) = doc.find_mut(cmd.id) {
                    *obj = cmd.old_state.clone();
                }
            }
            EditorCommand::Translate(cmd) => {
                for id in &cmd.ids {
                    if let Some(obj) = doc.find_mut(*id) {
                        obj.x -= cmd.dx;
                        obj.y -= cmd.dy;
                    }
                }
            }
            EditorCommand::Paste(cmd) => {
                cmd.objects.clear();
                for id in &cmd.ids {
                    cmd.objects.push(doc.remove(*id));
                }
            }
            EditorCommand::Reorder(cmd) => {
                if cmd.moved {
                    let inverse = match cmd.direction {
                        ReorderDirection::Up => ReorderDirection::Down,
                        ReorderDirection::Down => ReorderDirection::Up,
                    };
                    doc.reorder(cmd.id, inverse);
                    cmd.moved = false;
                }
            }
            EditorCommand::Group(cmd) => {
                if doc.remove(cmd.group_id).is_none() {
                    return;
                }
                // Restore members exactly where they were; ascending
                // index order keeps later indices valid.
                let mut restore = std::mem::take(&mut cmd.removed);
                restore.sort_by_key(|(_, _, index)| *index);
                for (obj, parent, index) in restore {
                    if doc.insert_at(parent, index, obj.clone()).is_err() {
                        doc.insert(obj);
                    }
                }
            }
            EditorCommand::Ungroup(cmd) => {
                let Some((group, parent, index)) = cmd.original.take() else {
                    return;
                };
                let member_ids: Vec<Uuid> = group
                    .children()
                    .map(|cs| cs.iter().map(|c| c.id).collect())
                    .unwrap_or_default();
                for id in member_ids {
                    doc.remove(id);
                }
                if doc.insert_at(parent, index, group.clone()).is_err() {
                    doc.insert(group);
                }
            }
            EditorCommand::Composite(cmd) => {
                for sub in cmd.commands.iter_mut().rev() {
                    sub.undo(doc);
                }
            }
        }
    }
}

/// Rewrites a child of `group` into the group's parent space so its
/// absolute placement is unchanged: the group's scale and rotation are
/// baked into the child's own transform.
fn rebase_to_parent_space(group: &CanvasObject, mut child: CanvasObject) -> CanvasObject {
    let scaled = Point::new(child.x * group.scale_x, child.y * group.scale_y);
    let rotated = rotate_point(scaled, Point::new(0.0, 0.0), group.rotation);
    child.x = group.x + rotated.x;
    child.y = group.y + rotated.y;
    child.rotation += group.rotation;
    child.scale_x *= group.scale_x;
    child.scale_y *= group.scale_y;
    child
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rect;

    fn rect_at(x: f64, y: f64) -> CanvasObject {
        CanvasObject::new(x, y, ObjectKind::Rect(Rect::new(50.0, 50.0)))
    }

    #[test]
    fn add_then_undo_leaves_document_unchanged() {
        let mut doc = Document::default();
        let obj = rect_at(10.0, 10.0);
        let id = obj.id;

        let mut cmd = EditorCommand::Add(AddObject {
            id,
            parent: None,
            object: Some(obj),
        });
        cmd.apply(&mut doc);
        assert!(doc.contains(id));

        cmd.undo(&mut doc);
        assert!(!doc.contains(id));
        assert!(doc.objects.is_empty());
    }

    #[test]
    fn remove_undo_restores_paint_order() {
        let mut doc = Document::default();
        let a = rect_at(0.0, 0.0);
        let b = rect_at(10.0, 0.0);
        let c = rect_at(20.0, 0.0);
        let b_id = b.id;
        let order: Vec<Uuid> = vec![a.id, b.id, c.id];
        doc.insert(a);
        doc.insert(b);
        doc.insert(c);

        let mut cmd = EditorCommand::Remove(RemoveObject {
            id: b_id,
            object: None,
        });
        cmd.apply(&mut doc);
        assert_eq!(doc.objects.len(), 2);

        cmd.undo(&mut doc);
        let restored: Vec<Uuid> = doc.objects.iter().map(|o| o.id).collect();
        assert_eq!(restored, order);
    }

    #[test]
    fn translate_undo_is_exact_inverse() {
        let mut doc = Document::default();
        let obj = rect_at(100.0, 100.0);
        let id = obj.id;
        doc.insert(obj);

        let mut cmd = EditorCommand::Translate(TranslateObjects {
            ids: vec![id],
            dx: 12.5,
            dy: -7.0,
        });
        cmd.apply(&mut doc);
        assert_eq!(doc.find(id).unwrap().x, 112.5);

        cmd.undo(&mut doc);
        assert_eq!(doc.find(id).unwrap().x, 100.0);
        assert_eq!(doc.find(id).unwrap().y, 100.0);
    }

    #[test]
    fn group_apply_preserves_absolute_positions() {
        let mut doc = Document::default();
        let a = rect_at(100.0, 100.0);
        let b = rect_at(200.0, 200.0);
        let a_id = a.id;
        let b_id = b.id;
        doc.insert(a);
        doc.insert(b);

        let group_id = Uuid::new_v4();
        let mut cmd = EditorCommand::Group(GroupObjects::new(group_id, vec![a_id, b_id]));
        cmd.apply(&mut doc);

        assert_eq!(doc.objects.len(), 1);
        let pa = doc.absolute_position(a_id).unwrap();
        let pb = doc.absolute_position(b_id).unwrap();
        assert_eq!((pa.x, pa.y), (100.0, 100.0));
        assert_eq!((pb.x, pb.y), (200.0, 200.0));

        cmd.undo(&mut doc);
        assert_eq!(doc.objects.len(), 2);
        assert!(doc.find(group_id).is_none());
        assert_eq!(doc.find(a_id).unwrap().x, 100.0);
    }

    #[test]
    fn ungroup_bakes_group_transform_into_children() {
        let mut child = rect_at(10.0, 0.0);
        child.rotation = 0.0;
        let child_id = child.id;
        let mut group = CanvasObject::new(100.0, 100.0, ObjectKind::Group(Group::new(vec![child])));
        group.rotation = 90.0;
        let group_id = group.id;

        let mut doc = Document::default();
        doc.insert(group);
        let before = doc.absolute_position(child_id).unwrap();

        let mut cmd = EditorCommand::Ungroup(UngroupObjects::new(group_id));
        cmd.apply(&mut doc);

        assert!(doc.find(group_id).is_none());
        let after = doc.absolute_position(child_id).unwrap();
        assert!((before.x - after.x).abs() < 1e-9);
        assert!((before.y - after.y).abs() < 1e-9);
        assert_eq!(doc.find(child_id).unwrap().rotation, 90.0);

        cmd.undo(&mut doc);
        assert!(doc.find(group_id).is_some());
        assert_eq!(doc.find(child_id).unwrap().x, 10.0);
    }

    #[test]
    fn boundary_reorder_undo_does_not_move() {
        let mut doc = Document::default();
        let a = rect_at(0.0, 0.0);
        let b = rect_at(10.0, 0.0);
        let b_id = b.id;
        let order: Vec<Uuid> = vec![a.id, b.id];
        doc.insert(a);
        doc.insert(b);

        let mut cmd = EditorCommand::Reorder(ReorderObject::new(b_id, ReorderDirection::Up));
        cmd.apply(&mut doc);
        cmd.undo(&mut doc);

        let ids: Vec<Uuid> = doc.objects.iter().map(|o| o.id).collect();
        assert_eq!(ids, order);
    }
}
