//! Job domain module

mod job;

pub use job::{ExportArtifact, Job, JobId, JobStatus};
