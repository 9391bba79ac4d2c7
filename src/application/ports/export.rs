//! Transcript export port interface

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::job::ExportArtifact;

/// Errors from delivering an export artifact
#[derive(Debug, Clone, Error)]
pub enum DeliveryError {
    #[error("Failed to write export: {0}")]
    WriteError(String),
}

/// Port for delivering an export artifact to the platform's save/download
/// capability. The core only builds the `{filename, content}` payload; where
/// it lands is up to the adapter.
#[async_trait]
pub trait TranscriptSink: Send + Sync {
    /// Deliver the artifact, returning where it was written.
    async fn deliver(&self, artifact: &ExportArtifact) -> Result<PathBuf, DeliveryError>;
}
