//! # GalleryKit Persistence
//!
//! Persistence adapter for gallery documents: the asynchronous store
//! contract the backend fulfills, a file-backed implementation for
//! tests and offline use, and the debounced auto-saver that coalesces
//! document mutations into last-write-wins saves.
//!
//! The adapter is optimistic: a failed save is reported and logged but
//! the in-memory document is never rolled back. There is no automatic
//! retry; the document stays dirty and the next mutation or manual
//! flush tries again.

pub mod autosave;
pub mod file_store;
pub mod store;

pub use autosave::AutoSaver;
pub use file_store::FileStore;
pub use store::{GalleryStore, MemoryStore};
