//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod export;
pub mod transcriber;

// Re-export common types
pub use config::ConfigStore;
pub use export::{DeliveryError, TranscriptSink};
pub use transcriber::{Transcriber, Transcription, TranscriptionError};
