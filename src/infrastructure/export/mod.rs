//! Export delivery adapters

mod fs;

pub use fs::FsTranscriptSink;
