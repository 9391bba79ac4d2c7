//! Transcription adapters

mod deepgram;

pub use deepgram::DeepgramTranscriber;
