//! Transcript panel selection

use crate::domain::error::ExportNotReadyError;
use crate::domain::job::{ExportArtifact, Job, JobId};

use super::store::JobStore;

/// Tracks which job the transcript panel shows.
///
/// Selection is carried by id, never by table position, and resolved
/// against the live store on every render - resorting, filtering, or
/// paging the table never changes which job is shown.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    selected: Option<JobId>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a job as the active selection
    pub fn select(&mut self, id: JobId) {
        self.selected = Some(id);
    }

    /// Clear the selection
    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<JobId> {
        self.selected
    }

    /// Resolve the selection against the live store
    pub fn current<'a>(&self, store: &'a JobStore) -> Option<&'a Job> {
        self.selected.and_then(|id| store.get(id))
    }

    /// Build the export artifact for a job's transcript.
    ///
    /// Fails while the transcript has not arrived; the store is untouched
    /// either way.
    pub fn export_transcript(&self, job: &Job) -> Result<ExportArtifact, ExportNotReadyError> {
        job.export_transcript()
    }
}
