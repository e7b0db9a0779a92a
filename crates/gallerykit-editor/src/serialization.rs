//! Serialization and deserialization for gallery documents.
//!
//! Implements the persisted JSON shape consumed by the backend: canvas
//! dimensions, background, and the object tree, plus a format version
//! and metadata envelope. Loading fails closed: malformed JSON, an
//! unknown object type, or a duplicate id rejects the whole document
//! rather than silently dropping objects.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use gallerykit_core::DocumentError;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::document::Document;

/// Gallery file format version
const FILE_FORMAT_VERSION: &str = "1.0";

fn default_version() -> String {
    FILE_FORMAT_VERSION.to_string()
}

/// Complete persisted gallery document.
///
/// Only document state is persisted; viewport, selection, and history
/// are session state and deliberately absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryFile {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub metadata: GalleryMetadata,
    #[serde(flatten)]
    pub document: Document,
}

/// Gallery metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Default for GalleryMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            name: "Untitled".to_string(),
            created: now,
            modified: now,
        }
    }
}

impl GalleryFile {
    /// Wraps a document for persistence under the given name.
    pub fn new(name: impl Into<String>, document: Document) -> Self {
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: GalleryMetadata {
                name: name.into(),
                ..GalleryMetadata::default()
            },
            document,
        }
    }

    /// Bumps the modified timestamp; called just before a save.
    pub fn touch(&mut self) {
        self.metadata.modified = Utc::now();
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parses and validates a persisted gallery. Any defect rejects
    /// the whole document; no partial loads.
    pub fn from_json_str(content: &str) -> std::result::Result<Self, DocumentError> {
        let file: GalleryFile =
            serde_json::from_str(content).map_err(|e| DocumentError::MalformedDocument {
                reason: e.to_string(),
            })?;
        file.validate()?;
        Ok(file)
    }

    /// Structural checks beyond what serde enforces.
    pub fn validate(&self) -> std::result::Result<(), DocumentError> {
        if !self.document.width.is_finite() || self.document.width <= 0.0 {
            return Err(DocumentError::MalformedDocument {
                reason: format!("non-positive canvas width {}", self.document.width),
            });
        }
        if !self.document.height.is_finite() || self.document.height <= 0.0 {
            return Err(DocumentError::MalformedDocument {
                reason: format!("non-positive canvas height {}", self.document.height),
            });
        }
        self.document.validate()
    }

    /// Save gallery to a file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self
            .to_json_string()
            .context("Failed to serialize gallery")?;

        std::fs::write(path.as_ref(), json).context("Failed to write gallery file")?;

        Ok(())
    }

    /// Load gallery from a file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read gallery file")?;

        let gallery =
            Self::from_json_str(&content).context("Failed to parse gallery file")?;

        Ok(gallery)
    }
}
