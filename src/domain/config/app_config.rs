//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::table::DEFAULT_PAGE_SIZE;

/// Default transcription service host
pub const DEFAULT_HOST: &str = "https://api.deepgram.com";

/// Default transcription language
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default transcription model
pub const DEFAULT_MODEL: &str = "enhanced";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub host: Option<String>,
    pub language: Option<String>,
    pub model: Option<String>,
    pub smart_format: Option<bool>,
    pub page_size: Option<usize>,
    pub export_dir: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            host: Some(DEFAULT_HOST.to_string()),
            language: Some(DEFAULT_LANGUAGE.to_string()),
            model: Some(DEFAULT_MODEL.to_string()),
            smart_format: Some(true),
            page_size: Some(DEFAULT_PAGE_SIZE),
            export_dir: Some(".".to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            host: other.host.or(self.host),
            language: other.language.or(self.language),
            model: other.model.or(self.model),
            smart_format: other.smart_format.or(self.smart_format),
            page_size: other.page_size.or(self.page_size),
            export_dir: other.export_dir.or(self.export_dir),
        }
    }

    pub fn host_or_default(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn language_or_default(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    pub fn model_or_default(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn smart_format_or_default(&self) -> bool {
        self.smart_format.unwrap_or(true)
    }

    pub fn page_size_or_default(&self) -> usize {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn export_dir_or_default(&self) -> &str {
        self.export_dir.as_deref().unwrap_or(".")
    }
}
