//! Waveboard - audio transcription job table CLI
//!
//! This crate submits audio files to a Deepgram-style transcription service
//! and tracks each submission in an owned job table with sorting, filtering,
//! pagination, selection, and transcript export.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core business logic, value objects, entities, and errors
//! - **Application**: Job store, table view derivation, upload coordination,
//!   and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Deepgram API, XDG config,
//!   filesystem export)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
