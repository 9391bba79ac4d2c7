//! Transcription port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::audio::AudioFile;

/// Transcription errors
#[derive(Debug, Clone, Error)]
pub enum TranscriptionError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Result of a successful transcription call
#[derive(Debug, Clone)]
pub struct Transcription {
    /// Reported audio duration in seconds
    pub duration_secs: f64,
    /// Plain transcript text
    pub transcript: String,
}

/// Port for audio transcription
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe an audio file to text.
    ///
    /// # Arguments
    /// * `audio` - The audio file to transcribe
    ///
    /// # Returns
    /// The transcript and reported duration, or an error
    async fn transcribe(&self, audio: &AudioFile) -> Result<Transcription, TranscriptionError>;
}
