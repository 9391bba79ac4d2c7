//! Filesystem transcript sink adapter

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{DeliveryError, TranscriptSink};
use crate::domain::job::ExportArtifact;

/// Writes export artifacts as plain-text files in a target directory.
/// Stands in for the browser's download capability.
pub struct FsTranscriptSink {
    dir: PathBuf,
}

impl FsTranscriptSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl TranscriptSink for FsTranscriptSink {
    async fn deliver(&self, artifact: &ExportArtifact) -> Result<PathBuf, DeliveryError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| DeliveryError::WriteError(e.to_string()))?;

        let path = self.dir.join(&artifact.filename);
        fs::write(&path, &artifact.content)
            .await
            .map_err(|e| DeliveryError::WriteError(e.to_string()))?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn writes_artifact_under_directory() {
        let dir = tempdir().unwrap();
        let sink = FsTranscriptSink::new(dir.path());

        let artifact = ExportArtifact {
            filename: "meeting.wav.txt".to_string(),
            content: "hello world".to_string(),
        };

        let path = sink.deliver(&artifact).await.unwrap();
        assert_eq!(path, dir.path().join("meeting.wav.txt"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello world");
    }

    #[tokio::test]
    async fn creates_missing_directories() {
        let dir = tempdir().unwrap();
        let sink = FsTranscriptSink::new(dir.path().join("exports/today"));

        let artifact = ExportArtifact {
            filename: "a.wav.txt".to_string(),
            content: "x".to_string(),
        };

        let path = sink.deliver(&artifact).await.unwrap();
        assert!(path.exists());
    }
}
