//! Store contract for gallery documents.
//!
//! The backend exposes CRUD for the containing gallery record plus an
//! image-upload endpoint returning a URL to embed in `image` objects.
//! The editor treats these as opaque calls with success/failure
//! outcomes.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use gallerykit_core::PersistenceError;
use gallerykit_editor::GalleryFile;

/// Backend collaborator persisting galleries and uploaded images.
///
/// `save_gallery` must be idempotent: saving the same snapshot twice
/// leaves the same stored state, so callers may retry freely.
#[async_trait]
pub trait GalleryStore: Send + Sync {
    /// Persists the full document snapshot under the gallery id.
    async fn save_gallery(&self, id: &str, gallery: &GalleryFile) -> Result<(), PersistenceError>;

    /// Loads the latest persisted snapshot.
    async fn load_gallery(&self, id: &str) -> Result<GalleryFile, PersistenceError>;

    /// Soft-deletes the gallery; subsequent loads fail with
    /// [`PersistenceError::Deleted`] until it is saved again.
    async fn delete_gallery(&self, id: &str) -> Result<(), PersistenceError>;

    /// Stores image bytes and returns the URL to embed in an `image`
    /// object's `src` field.
    async fn upload_image(&self, bytes: &[u8], filename: &str)
        -> Result<String, PersistenceError>;
}

struct MemoryRecord {
    gallery: GalleryFile,
    deleted: bool,
}

/// In-memory store for tests and previews.
pub struct MemoryStore {
    records: Mutex<HashMap<String, MemoryRecord>>,
    uploads: Mutex<HashMap<String, Vec<u8>>>,
    save_count: AtomicUsize,
    fail_saves: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            uploads: Mutex::new(HashMap::new()),
            save_count: AtomicUsize::new(0),
            fail_saves: AtomicBool::new(false),
        }
    }

    /// Number of completed saves, for asserting debounce behavior.
    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }

    /// Makes subsequent saves fail, for failure-path tests.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GalleryStore for MemoryStore {
    async fn save_gallery(&self, id: &str, gallery: &GalleryFile) -> Result<(), PersistenceError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(PersistenceError::Store {
                message: "simulated save failure".to_string(),
            });
        }
        gallery.validate()?;

        let mut records = self
            .records
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        records.insert(
            id.to_string(),
            MemoryRecord {
                gallery: gallery.clone(),
                deleted: false,
            },
        );
        self.save_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn load_gallery(&self, id: &str) -> Result<GalleryFile, PersistenceError> {
        let records = self
            .records
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        match records.get(id) {
            None => Err(PersistenceError::NotFound { id: id.to_string() }),
            Some(record) if record.deleted => {
                Err(PersistenceError::Deleted { id: id.to_string() })
            }
            Some(record) => Ok(record.gallery.clone()),
        }
    }

    async fn delete_gallery(&self, id: &str) -> Result<(), PersistenceError> {
        let mut records = self
            .records
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        match records.get_mut(id) {
            None => Err(PersistenceError::NotFound { id: id.to_string() }),
            Some(record) => {
                record.deleted = true;
                Ok(())
            }
        }
    }

    async fn upload_image(
        &self,
        bytes: &[u8],
        filename: &str,
    ) -> Result<String, PersistenceError> {
        let key = format!("uploads/{}-{}", uuid::Uuid::new_v4(), filename);
        self.uploads
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(key.clone(), bytes.to_vec());
        Ok(key)
    }
}
