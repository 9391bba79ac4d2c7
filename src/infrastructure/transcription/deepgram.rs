//! Deepgram API transcriber adapter

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{Transcriber, Transcription, TranscriptionError};
use crate::domain::audio::AudioFile;
use crate::domain::config::{AppConfig, DEFAULT_HOST, DEFAULT_LANGUAGE, DEFAULT_MODEL};

// Response types for the Deepgram listen API.
// Only `metadata.duration` and the first channel's first alternative
// transcript are read; everything else in the document is ignored.

#[derive(Debug, Deserialize)]
struct ListenResponse {
    metadata: Option<Metadata>,
    results: Option<ListenResults>,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    duration: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ListenResults {
    channels: Option<Vec<Channel>>,
}

#[derive(Debug, Deserialize)]
struct Channel {
    alternatives: Option<Vec<Alternative>>,
}

#[derive(Debug, Deserialize)]
struct Alternative {
    transcript: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    err_msg: Option<String>,
}

/// Deepgram API transcriber
pub struct DeepgramTranscriber {
    api_key: String,
    host: String,
    language: String,
    model: String,
    smart_format: bool,
    client: reqwest::Client,
}

impl DeepgramTranscriber {
    /// Create a new Deepgram transcriber with the given API key and
    /// default service options
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: DEFAULT_HOST.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            smart_format: true,
            client: reqwest::Client::new(),
        }
    }

    /// Create a new Deepgram transcriber against a custom host
    pub fn with_host(api_key: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::new(api_key)
        }
    }

    /// Create a transcriber from application configuration
    pub fn from_config(api_key: impl Into<String>, config: &AppConfig) -> Self {
        Self {
            api_key: api_key.into(),
            host: config.host_or_default().to_string(),
            language: config.language_or_default().to_string(),
            model: config.model_or_default().to_string(),
            smart_format: config.smart_format_or_default(),
            client: reqwest::Client::new(),
        }
    }

    /// Build the listen endpoint URL with query options
    fn listen_url(&self) -> String {
        format!(
            "{}/v1/listen?language={}&model={}&smart_format={}",
            self.host.trim_end_matches('/'),
            self.language,
            self.model,
            self.smart_format
        )
    }

    /// Pull the duration and transcript out of a parsed response
    fn extract(response: ListenResponse) -> Result<Transcription, TranscriptionError> {
        let duration_secs = response
            .metadata
            .and_then(|m| m.duration)
            .ok_or_else(|| TranscriptionError::ParseError("missing metadata.duration".to_string()))?;

        let transcript = response
            .results
            .and_then(|r| r.channels)
            .and_then(|mut c| if c.is_empty() { None } else { Some(c.remove(0)) })
            .and_then(|c| c.alternatives)
            .and_then(|mut a| if a.is_empty() { None } else { Some(a.remove(0)) })
            .and_then(|a| a.transcript)
            .ok_or_else(|| {
                TranscriptionError::ParseError(
                    "missing results.channels[0].alternatives[0].transcript".to_string(),
                )
            })?;

        Ok(Transcription {
            duration_secs,
            transcript,
        })
    }

    /// Turn a non-success body into an error message, preferring the
    /// service's `err_msg` field when present
    fn error_message(status: reqwest::StatusCode, body: &str) -> String {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|e| e.err_msg)
            .unwrap_or_else(|| format!("HTTP {}", status))
    }
}

#[async_trait]
impl Transcriber for DeepgramTranscriber {
    async fn transcribe(&self, audio: &AudioFile) -> Result<Transcription, TranscriptionError> {
        let url = self.listen_url();

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, format!("Token {}", self.api_key))
            .header(reqwest::header::CONTENT_TYPE, audio.mime_type().as_str())
            .body(audio.data().to_vec())
            .send()
            .await
            .map_err(|e| TranscriptionError::RequestFailed(e.to_string()))?;

        let status = response.status();

        // Handle HTTP errors
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(TranscriptionError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TranscriptionError::RateLimited);
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TranscriptionError::ApiError(Self::error_message(
                status, &body,
            )));
        }

        // Parse response
        let response: ListenResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::ParseError(e.to_string()))?;

        Self::extract(response)
    }
}
