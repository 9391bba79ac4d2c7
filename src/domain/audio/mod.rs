//! Audio domain module

mod audio_file;
mod duration;

pub use audio_file::{AudioFile, AudioMimeType};
pub use duration::format_duration;
