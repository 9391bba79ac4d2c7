//! Transcription job entity

use std::fmt;

use crate::domain::error::ExportNotReadyError;

/// Opaque job identifier.
///
/// Allocated once at creation and never reused. All asynchronous result
/// reconciliation is keyed by this id - never by table position, name
/// (duplicate filenames are legal), or submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobId(u64);

impl JobId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Derived job status, never stored directly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    /// Submitted, transcription request still in flight
    Pending,
    /// Transcript and duration have arrived
    Ready,
    /// The transcription request failed; the job is retained
    Failed,
}

/// One row of the job table.
///
/// `name` and `size_mb` are fixed at creation. `duration_label` and
/// `transcript` are written once when the transcription result arrives.
#[derive(Debug, Clone)]
pub struct Job {
    pub id: JobId,
    pub name: String,
    pub size_mb: f64,
    pub duration_label: Option<String>,
    pub transcript: Option<String>,
    pub error: Option<String>,
}

impl Job {
    pub(crate) fn pending(id: JobId, name: impl Into<String>, size_mb: f64) -> Self {
        Self {
            id,
            name: name.into(),
            size_mb,
            duration_label: None,
            transcript: None,
            error: None,
        }
    }

    /// Derive the status from the resolved fields
    pub fn status(&self) -> JobStatus {
        if self.error.is_some() {
            JobStatus::Failed
        } else if self.transcript.is_some() {
            JobStatus::Ready
        } else {
            JobStatus::Pending
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status() == JobStatus::Ready
    }

    /// Duration label for display and sorting; empty while pending
    pub fn duration_text(&self) -> &str {
        self.duration_label.as_deref().unwrap_or("")
    }

    /// Build the export artifact for this job's transcript.
    ///
    /// Fails while the transcript has not arrived yet.
    pub fn export_transcript(&self) -> Result<ExportArtifact, ExportNotReadyError> {
        match self.transcript.as_deref() {
            Some(transcript) => Ok(ExportArtifact {
                filename: format!("{}.txt", self.name),
                content: transcript.to_string(),
            }),
            None => Err(ExportNotReadyError {
                name: self.name.clone(),
            }),
        }
    }
}

/// Plain-text export payload handed to a delivery adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub content: String,
}
