//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod audio;
pub mod config;
pub mod error;
pub mod job;
pub mod table;

// Re-export common types
pub use audio::{format_duration, AudioFile, AudioMimeType};
pub use config::AppConfig;
pub use error::*;
pub use job::{ExportArtifact, Job, JobId, JobStatus};
pub use table::{filter_jobs, sort_jobs, PageState, SortColumn, SortDirection, SortState};
