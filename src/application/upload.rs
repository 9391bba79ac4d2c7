//! Upload coordination use case

use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;
use tokio::task::JoinHandle;

use crate::domain::audio::{format_duration, AudioFile};
use crate::domain::job::JobId;

use super::ports::Transcriber;
use super::store::{JobStore, JobUpdate, SharedJobStore};

/// Errors from the upload boundary
#[derive(Debug, Clone, Error)]
pub enum UploadError {
    #[error("No file selected")]
    NoFileSelected,

    #[error("Failed to read audio file \"{path}\": {message}")]
    UnreadableFile { path: String, message: String },
}

/// Creates an optimistic placeholder job for each submission, issues the
/// transcription request in the background, and reconciles the result back
/// into the store by job id.
///
/// Any number of submissions may be outstanding at once. Each in-flight
/// request carries only its own id, so out-of-order completion lands on the
/// right row regardless of submission order.
pub struct UploadCoordinator<T: Transcriber + 'static> {
    store: SharedJobStore,
    transcriber: Arc<T>,
    in_flight: Mutex<Vec<JoinHandle<()>>>,
}

impl<T: Transcriber + 'static> UploadCoordinator<T> {
    /// Create a coordinator over a shared store
    pub fn new(store: SharedJobStore, transcriber: T) -> Self {
        Self {
            store,
            transcriber: Arc::new(transcriber),
            in_flight: Mutex::new(Vec::new()),
        }
    }

    /// Handle to the underlying store
    pub fn store(&self) -> SharedJobStore {
        Arc::clone(&self.store)
    }

    /// Submit an audio file for transcription.
    ///
    /// The placeholder job is created and its id returned synchronously;
    /// the network request runs in a spawned task and reports back through
    /// `JobStore::update`.
    pub fn submit(&self, file: AudioFile) -> JobId {
        let id = self
            .lock_store()
            .create(file.name().to_string(), file.size_mb());
        self.spawn_request(id, file);
        id
    }

    /// Re-issue the transcription request for an existing job.
    ///
    /// The only supported recovery path for a failed job; there is no
    /// automatic retry loop. On success the job resolves exactly as if the
    /// original submission had succeeded.
    pub fn retry(&self, id: JobId, file: AudioFile) {
        self.spawn_request(id, file);
    }

    /// Wait for every outstanding transcription request to settle.
    pub async fn wait_idle(&self) {
        let handles = std::mem::take(&mut *self.lock_in_flight());
        for handle in handles {
            // A panicked request task must not take the caller down with it
            let _ = handle.await;
        }
    }

    fn spawn_request(&self, id: JobId, file: AudioFile) {
        let store = Arc::clone(&self.store);
        let transcriber = Arc::clone(&self.transcriber);

        let handle = tokio::spawn(async move {
            let update = match transcriber.transcribe(&file).await {
                Ok(result) => JobUpdate::resolved(
                    format_duration(result.duration_secs),
                    result.transcript,
                ),
                Err(e) => JobUpdate::failed(e.to_string()),
            };

            lock(&store).update(id, update);
        });

        self.lock_in_flight().push(handle);
    }

    fn lock_store(&self) -> MutexGuard<'_, JobStore> {
        lock(&self.store)
    }

    fn lock_in_flight(&self) -> MutexGuard<'_, Vec<JoinHandle<()>>> {
        self.in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Lock the shared store, recovering from a poisoned lock.
/// Store mutations are infallible merges, so a panic elsewhere cannot have
/// left the collection half-written.
fn lock(store: &SharedJobStore) -> MutexGuard<'_, JobStore> {
    store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
