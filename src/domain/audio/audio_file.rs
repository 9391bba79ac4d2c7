//! Audio file value object

use std::fmt;
use std::path::Path;

/// Bytes per megabyte used for the size column
const BYTES_PER_MB: f64 = 1_048_576.0;

/// Supported audio MIME types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioMimeType {
    Wav,
    Mp3,
    Flac,
    Ogg,
    Mp4,
    Webm,
}

impl AudioMimeType {
    /// Get the MIME type string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mp3",
            Self::Flac => "audio/flac",
            Self::Ogg => "audio/ogg",
            Self::Mp4 => "audio/mp4",
            Self::Webm => "audio/webm",
        }
    }

    /// Guess the MIME type from a file extension, defaulting to WAV
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "mp3" => Self::Mp3,
            "flac" => Self::Flac,
            "ogg" | "oga" => Self::Ogg,
            "mp4" | "m4a" => Self::Mp4,
            "webm" => Self::Webm,
            _ => Self::Wav,
        }
    }
}

impl fmt::Display for AudioMimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for AudioMimeType {
    fn default() -> Self {
        Self::Wav
    }
}

/// Value object representing an audio file ready for submission.
/// Contains the display name, raw bytes, and MIME type.
#[derive(Debug, Clone)]
pub struct AudioFile {
    name: String,
    data: Vec<u8>,
    mime_type: AudioMimeType,
}

impl AudioFile {
    /// Create an AudioFile from a name and raw bytes
    pub fn new(name: impl Into<String>, data: Vec<u8>, mime_type: AudioMimeType) -> Self {
        Self {
            name: name.into(),
            data,
            mime_type,
        }
    }

    /// Create an AudioFile from a path and raw bytes, deriving the display
    /// name and MIME type from the file name.
    pub fn from_path(path: &Path, data: Vec<u8>) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mime_type = path
            .extension()
            .map(|e| AudioMimeType::from_extension(&e.to_string_lossy()))
            .unwrap_or_default();

        Self {
            name,
            data,
            mime_type,
        }
    }

    /// Get the display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the raw audio data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume and return the raw audio data
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Get the MIME type
    pub fn mime_type(&self) -> AudioMimeType {
        self.mime_type
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Size in megabytes, rounded to 2 decimal places.
    /// Computed once at submission and stored on the job row.
    pub fn size_mb(&self) -> f64 {
        (self.data.len() as f64 / BYTES_PER_MB * 100.0).round() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn mime_type_as_str() {
        assert_eq!(AudioMimeType::Wav.as_str(), "audio/wav");
        assert_eq!(AudioMimeType::Mp3.as_str(), "audio/mp3");
        assert_eq!(AudioMimeType::Flac.as_str(), "audio/flac");
    }

    #[test]
    fn mime_type_from_extension() {
        assert_eq!(AudioMimeType::from_extension("mp3"), AudioMimeType::Mp3);
        assert_eq!(AudioMimeType::from_extension("M4A"), AudioMimeType::Mp4);
        assert_eq!(AudioMimeType::from_extension("unknown"), AudioMimeType::Wav);
    }

    #[test]
    fn from_path_derives_name_and_mime() {
        let path = PathBuf::from("/tmp/recordings/call.flac");
        let file = AudioFile::from_path(&path, vec![1, 2, 3]);

        assert_eq!(file.name(), "call.flac");
        assert_eq!(file.mime_type(), AudioMimeType::Flac);
        assert_eq!(file.size_bytes(), 3);
    }

    #[test]
    fn size_mb_rounds_to_two_decimals() {
        // 1.5 MB exactly
        let file = AudioFile::new("a.wav", vec![0u8; 1_572_864], AudioMimeType::Wav);
        assert_eq!(file.size_mb(), 1.5);

        // 1 MB + 1 KB = 1.0009765625 MB -> 1.0
        let file = AudioFile::new("b.wav", vec![0u8; 1_049_600], AudioMimeType::Wav);
        assert_eq!(file.size_mb(), 1.0);
    }

    #[test]
    fn empty_file_is_zero_mb() {
        let file = AudioFile::new("empty.wav", vec![], AudioMimeType::Wav);
        assert_eq!(file.size_mb(), 0.0);
    }
}
