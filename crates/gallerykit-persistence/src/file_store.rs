//! File-backed gallery store.
//!
//! One JSON file per gallery under a root directory, with a sidecar
//! tombstone for soft deletes and an `uploads/` directory for images.
//! Used by tests and by offline/desktop builds; the production backend
//! fulfills the same [`GalleryStore`] contract over HTTP.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use gallerykit_core::PersistenceError;
use gallerykit_editor::GalleryFile;

use crate::store::GalleryStore;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at the given directory, creating it and
    /// its `uploads/` subdirectory if needed.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, PersistenceError> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(root.join("uploads"))?;
        Ok(Self { root })
    }

    fn gallery_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.json", sanitize(id)))
    }

    fn tombstone_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.json.deleted", sanitize(id)))
    }
}

/// Keeps ids usable as file names.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[async_trait]
impl GalleryStore for FileStore {
    async fn save_gallery(&self, id: &str, gallery: &GalleryFile) -> Result<(), PersistenceError> {
        gallery.validate()?;
        let json = gallery.to_json_string()?;
        std::fs::write(self.gallery_path(id), json)?;

        // Saving resurrects a soft-deleted gallery.
        let tombstone = self.tombstone_path(id);
        if tombstone.exists() {
            std::fs::remove_file(tombstone)?;
        }
        tracing::debug!(gallery = id, "saved to file store");
        Ok(())
    }

    async fn load_gallery(&self, id: &str) -> Result<GalleryFile, PersistenceError> {
        if self.tombstone_path(id).exists() {
            return Err(PersistenceError::Deleted { id: id.to_string() });
        }
        let path = self.gallery_path(id);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PersistenceError::NotFound { id: id.to_string() });
            }
            Err(e) => return Err(e.into()),
        };
        let gallery = GalleryFile::from_json_str(&content)?;
        Ok(gallery)
    }

    async fn delete_gallery(&self, id: &str) -> Result<(), PersistenceError> {
        if !self.gallery_path(id).exists() {
            return Err(PersistenceError::NotFound { id: id.to_string() });
        }
        std::fs::write(
            self.tombstone_path(id),
            format!("deleted {}\n", Utc::now().to_rfc3339()),
        )?;
        Ok(())
    }

    async fn upload_image(
        &self,
        bytes: &[u8],
        filename: &str,
    ) -> Result<String, PersistenceError> {
        let key = format!("uploads/{}-{}", uuid::Uuid::new_v4(), sanitize(filename));
        std::fs::write(self.root.join(&key), bytes)?;
        Ok(key)
    }
}
