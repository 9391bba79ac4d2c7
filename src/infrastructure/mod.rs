//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the Deepgram API and the
//! filesystem.

pub mod config;
pub mod export;
pub mod transcription;

// Re-export adapters
pub use config::XdgConfigStore;
pub use export::FsTranscriptSink;
pub use transcription::DeepgramTranscriber;
