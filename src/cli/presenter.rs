//! CLI presenter for output formatting

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::application::view::TableWindow;
use crate::domain::job::{Job, JobStatus};

/// Minimum width of the name column, from the header label
const NAME_HEADER: &str = "NAME";

/// Presenter for CLI output formatting
pub struct Presenter {
    spinner: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Update spinner message
    pub fn update_spinner(&self, message: &str) {
        if let Some(ref spinner) = self.spinner {
            spinner.set_message(message.to_string());
        }
    }

    /// Stop spinner without status
    pub fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Render the visible table window with its pager line
    pub fn table(&self, window: &TableWindow) {
        let name_width = window
            .rows
            .iter()
            .map(|job| job.name.len())
            .chain(std::iter::once(NAME_HEADER.len()))
            .max()
            .unwrap_or(NAME_HEADER.len());

        println!(
            "{:<name_width$}  {:>8}  {:>9}  {}",
            NAME_HEADER.bold(),
            "DURATION".bold(),
            "SIZE (MB)".bold(),
            "STATUS".bold(),
        );

        for job in &window.rows {
            println!("{}", Self::format_row(job, name_width));
        }

        println!(
            "page {} of {} ({} file{})",
            window.page,
            window.page_count,
            window.total_matching,
            if window.total_matching == 1 { "" } else { "s" }
        );
    }

    /// Render the transcript detail panel for the selected job
    pub fn transcript_panel(&self, job: &Job) {
        println!();
        println!("{} {}", "Transcript:".bold(), job.name);
        match job.status() {
            JobStatus::Ready => {
                if let Some(transcript) = job.transcript.as_deref() {
                    println!("{}", transcript);
                }
            }
            JobStatus::Pending => println!("{}", "transcribing...".dimmed()),
            JobStatus::Failed => {
                println!(
                    "{}",
                    job.error.as_deref().unwrap_or("transcription failed").red()
                );
            }
        }
    }

    fn format_row(job: &Job, name_width: usize) -> String {
        format!(
            "{:<name_width$}  {:>8}  {:>9.2}  {}",
            job.name,
            job.duration_text(),
            job.size_mb,
            Self::status_label(job),
        )
    }

    fn status_label(job: &Job) -> String {
        match job.status() {
            JobStatus::Pending => "transcribing...".to_string(),
            JobStatus::Ready => "ready".to_string(),
            JobStatus::Failed => format!(
                "failed: {}",
                job.error.as_deref().unwrap_or("unknown error")
            ),
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
