//! Application layer - Use cases and port interfaces
//!
//! Contains the job store, view derivation, upload coordination, and trait
//! definitions for external system interactions.

pub mod ports;
pub mod selection;
pub mod store;
pub mod upload;
pub mod view;

// Re-export core types
pub use selection::SelectionController;
pub use store::{JobStore, JobUpdate, SharedJobStore};
pub use upload::{UploadCoordinator, UploadError};
pub use view::{TableView, TableWindow};
