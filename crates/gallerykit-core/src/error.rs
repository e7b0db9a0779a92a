//! Error handling for GalleryKit.
//!
//! Provides error types for the two layers of the workspace:
//! - Document errors (tree invariants, validation)
//! - Persistence errors (store, serialization, I/O)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Document error type
///
/// Represents violations of the document tree's invariants and
/// failed validations. Operations that hit one of these abort
/// without partial state changes.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Two objects in the tree share an id
    #[error("Duplicate object id {id}")]
    DuplicateId {
        /// The id that appears more than once.
        id: uuid::Uuid,
    },

    /// An operation referenced an id not present in the tree
    #[error("Object {id} not found")]
    ObjectNotFound {
        /// The id that was looked up.
        id: uuid::Uuid,
    },

    /// Reorder target has no adjacent sibling in that direction
    #[error("Object {id} has no sibling in the requested direction")]
    NoAdjacentSibling {
        /// The id whose sibling was requested.
        id: uuid::Uuid,
    },

    /// A persisted document failed structural validation
    #[error("Malformed document: {reason}")]
    MalformedDocument {
        /// Why the document was rejected.
        reason: String,
    },

    /// An input failed validation before any mutation was applied
    #[error("Validation failed: {message}")]
    Validation {
        /// What was wrong with the input.
        message: String,
    },
}

/// Persistence error type
///
/// Represents failures while saving or loading a gallery through a
/// store. The in-memory document is never rolled back on save
/// failure; callers decide whether to retry.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The backing store rejected or failed the operation
    #[error("Store error: {message}")]
    Store {
        /// A message describing the store failure.
        message: String,
    },

    /// No gallery exists under the requested id
    #[error("Gallery {id} not found")]
    NotFound {
        /// The gallery id that was requested.
        id: String,
    },

    /// The gallery exists but has been soft-deleted
    #[error("Gallery {id} is deleted")]
    Deleted {
        /// The gallery id that was requested.
        id: String,
    },

    /// JSON encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Filesystem or network I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The save was superseded by a newer one before completing
    #[error("Save superseded by a newer request")]
    Superseded,

    /// The document being persisted failed validation
    #[error(transparent)]
    Document(#[from] DocumentError),
}
