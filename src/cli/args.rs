//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::table::SortColumn;

/// Valid config keys for `waveboard config set/get`
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "api_key",
    "host",
    "language",
    "model",
    "smart_format",
    "page_size",
    "export_dir",
];

/// Check whether a key can be set/get via the config subcommand
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

/// Waveboard - audio transcription job table
#[derive(Parser, Debug)]
#[command(name = "waveboard")]
#[command(version)]
#[command(about = "Submit audio files to a transcription service and browse the results")]
#[command(long_about = None)]
pub struct Cli {
    /// Audio files to submit for transcription
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Filter rows by a case-insensitive substring of the file name
    #[arg(short, long, value_name = "TEXT")]
    pub query: Option<String>,

    /// Toggle a column's sort direction (repeat the flag to toggle again)
    #[arg(short = 's', long = "sort-by", value_enum, value_name = "COLUMN")]
    pub sort_by: Vec<ColumnArg>,

    /// Page of the table to show (1-based, clamped into range)
    #[arg(short, long, value_name = "N")]
    pub page: Option<usize>,

    /// Rows per page
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Show the transcript panel for the first job with this file name
    #[arg(long, value_name = "NAME")]
    pub show: Option<String>,

    /// Export every ready transcript as <name>.txt
    #[arg(short, long)]
    pub export: bool,

    /// Directory for exported transcripts
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Re-issue the request once for jobs that failed
    #[arg(long)]
    pub retry_failed: bool,

    /// Transcription service host
    #[arg(long, value_name = "URL")]
    pub host: Option<String>,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Sortable column argument
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ColumnArg {
    Name,
    Duration,
    Size,
}

impl From<ColumnArg> for SortColumn {
    fn from(arg: ColumnArg) -> Self {
        match arg {
            ColumnArg::Name => SortColumn::Name,
            ColumnArg::Duration => SortColumn::Duration,
            ColumnArg::Size => SortColumn::Size,
        }
    }
}

/// Resolved options for the table runner
#[derive(Debug, Clone)]
pub struct TableOptions {
    pub files: Vec<PathBuf>,
    pub query: Option<String>,
    pub sort_toggles: Vec<SortColumn>,
    pub page: Option<usize>,
    pub page_size: usize,
    pub show: Option<String>,
    pub export: bool,
    pub export_dir: PathBuf,
    pub retry_failed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_files_and_flags() {
        let cli = Cli::try_parse_from([
            "waveboard",
            "a.wav",
            "b.wav",
            "--query",
            "a",
            "--sort-by",
            "name",
            "--sort-by",
            "name",
            "--page",
            "2",
        ])
        .unwrap();

        assert_eq!(cli.files.len(), 2);
        assert_eq!(cli.query.as_deref(), Some("a"));
        assert_eq!(cli.sort_by.len(), 2);
        assert_eq!(cli.page, Some(2));
    }

    #[test]
    fn column_arg_maps_to_sort_column() {
        assert_eq!(SortColumn::from(ColumnArg::Duration), SortColumn::Duration);
        assert_eq!(SortColumn::from(ColumnArg::Size), SortColumn::Size);
    }

    #[test]
    fn config_key_validation() {
        assert!(is_valid_config_key("api_key"));
        assert!(is_valid_config_key("smart_format"));
        assert!(!is_valid_config_key("unknown_key"));
    }

    #[test]
    fn rejects_unknown_sort_column() {
        assert!(Cli::try_parse_from(["waveboard", "--sort-by", "transcript"]).is_err());
    }
}
