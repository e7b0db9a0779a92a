//! # GalleryKit Editor
//!
//! Headless core of the gallery canvas editor: the document model, the
//! undo/redo command history, the snap engine, and the persisted wire
//! format. UI toolkits and network code sit on top of this crate; it
//! owns no rendering and no I/O beyond reading and writing gallery
//! JSON.
//!
//! ## Core Components
//!
//! ### Document
//! - **Model**: closed tagged union of drawable kinds (rect, circle,
//!   text, image, line, group, frame) with common placement fields
//! - **Document**: the canonical object tree; lookup, patch, delete,
//!   and reorder by id, including inside nested containers
//! - **Serialization**: versioned JSON gallery files, fail-closed
//!   loading
//!
//! ### Editing
//! - **Commands**: every mutation as an execute/undo pair
//! - **History**: bounded undo/redo double stack
//! - **Session**: selection, clipboard, gestures, grouping, alignment
//!
//! ### Interaction
//! - **Snap engine**: canvas-center, grid, and sibling alignment with
//!   transient guide lines
//! - **Viewport**: zoom/pan and screen-canvas coordinate mapping
//!
//! ## Architecture
//!
//! ```text
//! EditorSession (selection, clipboard, gestures)
//!   ├── Document (object tree)
//!   ├── History (undo/redo stacks)
//!   ├── SnapEngine (drag assistance)
//!   └── Viewport (zoom/pan)
//!
//! GalleryFile (persisted JSON)
//! ```
//!
//! Children of groups and frames are stored parent-relative; absolute
//! placement is always derived on read. Bounds of containers are
//! likewise derived and never persisted.

pub mod command;
pub mod document;
pub mod history;
pub mod model;
pub mod serialization;
pub mod session;
pub mod snap;
pub mod viewport;

pub use command::{
    AddObject, CompositeCommand, EditorCommand, GroupObjects, PasteObjects, RemoveObject,
    ReorderObject, TranslateObjects, UngroupObjects, UpdateObject,
};
pub use document::{Document, ReorderDirection};
pub use history::History;
pub use model::{
    CanvasObject, Circle, Frame, Group, Image, Line, ObjectKind, ObjectPatch, Rect, Text,
};
pub use serialization::{GalleryFile, GalleryMetadata};
pub use session::{Alignment, EditorSession};
pub use snap::{Guide, GuideOrientation, SnapContext, SnapResult, SnapSource};
pub use viewport::Viewport;
