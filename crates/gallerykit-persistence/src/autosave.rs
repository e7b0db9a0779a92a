//! Debounced auto-save.
//!
//! Every document mutation hands the auto-saver a fresh snapshot and
//! resets a debounce timer; the save fires once input quiesces. Only
//! the latest snapshot is ever kept, and a save still in flight when a
//! newer one starts is aborted: last write wins, nothing queues
//! unboundedly. A manual `flush` bypasses the debounce.
//!
//! Save failures are logged and reported; the in-memory document is
//! not rolled back and nothing retries automatically. The session
//! stays dirty, so the next mutation or flush tries again.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use gallerykit_core::{AutoSaveConfig, PersistenceError};
use gallerykit_editor::GalleryFile;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::store::GalleryStore;

enum Msg {
    Dirty(Box<GalleryFile>),
    Flush(
        Option<Box<GalleryFile>>,
        oneshot::Sender<Result<(), PersistenceError>>,
    ),
}

/// Handle to the auto-save worker for one open gallery.
pub struct AutoSaver {
    tx: mpsc::UnboundedSender<Msg>,
    worker: JoinHandle<()>,
}

impl AutoSaver {
    /// Starts the worker for the given gallery id.
    pub fn spawn(
        store: Arc<dyn GalleryStore>,
        gallery_id: impl Into<String>,
        config: AutoSaveConfig,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let gallery_id = gallery_id.into();
        let worker = tokio::spawn(run(rx, store, gallery_id, config));
        Self { tx, worker }
    }

    /// Registers a mutation: stores the snapshot as the save
    /// candidate and resets the debounce timer.
    pub fn mark_dirty(&self, snapshot: GalleryFile) {
        if self.tx.send(Msg::Dirty(Box::new(snapshot))).is_err() {
            tracing::warn!("auto-save worker gone, mutation not scheduled");
        }
    }

    /// Saves immediately, superseding any in-flight auto-save. With
    /// `None`, saves the pending snapshot if there is one.
    pub async fn flush(
        &self,
        snapshot: Option<GalleryFile>,
    ) -> Result<(), PersistenceError> {
        let (ack, done) = oneshot::channel();
        self.tx
            .send(Msg::Flush(snapshot.map(Box::new), ack))
            .map_err(|_| PersistenceError::Store {
                message: "auto-save worker gone".to_string(),
            })?;
        done.await.map_err(|_| PersistenceError::Store {
            message: "auto-save worker dropped flush".to_string(),
        })?
    }

    /// Stops the worker, saving any still-pending snapshot first.
    pub async fn shutdown(self) {
        drop(self.tx);
        if let Err(e) = self.worker.await {
            if !e.is_cancelled() {
                tracing::error!(error = %e, "auto-save worker panicked");
            }
        }
    }
}

struct InFlight {
    generation: u64,
    handle: JoinHandle<()>,
}

async fn run(
    mut rx: mpsc::UnboundedReceiver<Msg>,
    store: Arc<dyn GalleryStore>,
    gallery_id: String,
    config: AutoSaveConfig,
) {
    let mut pending: Option<Box<GalleryFile>> = None;
    let mut deadline: Option<Instant> = None;
    let mut in_flight: Option<InFlight> = None;
    // Bumped for every started save; a task whose generation is stale
    // by completion time was superseded.
    let current = Arc::new(AtomicU64::new(0));

    loop {
        tokio::select! {
            msg = rx.recv() => match msg {
                Some(Msg::Dirty(snapshot)) => {
                    pending = Some(snapshot);
                    deadline = Some(Instant::now() + config.debounce);
                }
                Some(Msg::Flush(snapshot, ack)) => {
                    deadline = None;
                    let snapshot = snapshot.or_else(|| pending.take());
                    let result = match snapshot {
                        Some(mut snapshot) => {
                            supersede(&mut in_flight);
                            current.fetch_add(1, Ordering::SeqCst);
                            snapshot.touch();
                            let result = store.save_gallery(&gallery_id, &snapshot).await;
                            if let Err(e) = &result {
                                tracing::warn!(gallery = %gallery_id, error = %e, "manual save failed");
                            }
                            result
                        }
                        None => Ok(()),
                    };
                    let _ = ack.send(result);
                }
                None => {
                    // Handle dropped: final save of anything pending.
                    if let Some(mut snapshot) = pending.take() {
                        supersede(&mut in_flight);
                        snapshot.touch();
                        if let Err(e) = store.save_gallery(&gallery_id, &snapshot).await {
                            tracing::warn!(gallery = %gallery_id, error = %e, "final save failed");
                        }
                    }
                    break;
                }
            },
            _ = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                deadline = None;
                if let Some(mut snapshot) = pending.take() {
                    supersede(&mut in_flight);
                    let generation = current.fetch_add(1, Ordering::SeqCst) + 1;
                    snapshot.touch();

                    let store = store.clone();
                    let gallery_id = gallery_id.clone();
                    let current = current.clone();
                    let handle = tokio::spawn(async move {
                        let result = store.save_gallery(&gallery_id, &snapshot).await;
                        if current.load(Ordering::SeqCst) != generation {
                            tracing::debug!(gallery = %gallery_id, "save result superseded");
                            return;
                        }
                        match result {
                            Ok(()) => tracing::debug!(gallery = %gallery_id, "auto-saved"),
                            Err(e) => {
                                tracing::warn!(gallery = %gallery_id, error = %e, "auto-save failed")
                            }
                        }
                    });
                    in_flight = Some(InFlight { generation, handle });
                }
            }
        }
    }
}

/// Aborts a still-running save so the newer one wins.
fn supersede(in_flight: &mut Option<InFlight>) {
    if let Some(prev) = in_flight.take() {
        if !prev.handle.is_finished() {
            prev.handle.abort();
            tracing::debug!(generation = prev.generation, "in-flight save superseded");
        }
    }
}
