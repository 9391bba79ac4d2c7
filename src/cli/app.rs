//! Main app runner for the job table

use std::env;
use std::process::ExitCode;
use std::sync::MutexGuard;

use crate::application::ports::export::TranscriptSink;
use crate::application::ports::ConfigStore;
use crate::application::store::{JobStore, SharedJobStore};
use crate::application::{SelectionController, TableView, UploadCoordinator, UploadError};
use crate::domain::audio::AudioFile;
use crate::domain::config::AppConfig;
use crate::domain::job::{Job, JobId, JobStatus};
use crate::infrastructure::{DeepgramTranscriber, FsTranscriptSink, XdgConfigStore};

use super::args::TableOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run the submit-and-render workflow
pub async fn run_table(options: TableOptions, config: &AppConfig) -> ExitCode {
    let mut presenter = Presenter::new();

    // Validation: an upload attempt with no file creates no job
    if options.files.is_empty() {
        presenter.error(&UploadError::NoFileSelected.to_string());
        return ExitCode::from(EXIT_USAGE_ERROR);
    }

    // Load API key from environment or config
    let api_key = match get_api_key(config) {
        Ok(key) => key,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let transcriber = DeepgramTranscriber::from_config(api_key, config);
    let coordinator = UploadCoordinator::new(JobStore::shared(), transcriber);
    let store = coordinator.store();

    // Submit every readable file; keep the bytes around for --retry-failed
    presenter.start_spinner("Transcribing...");
    let mut submitted: Vec<(JobId, AudioFile)> = Vec::new();
    for path in &options.files {
        match tokio::fs::read(path).await {
            Ok(bytes) => {
                let file = AudioFile::from_path(path, bytes);
                let id = coordinator.submit(file.clone());
                submitted.push((id, file));
            }
            Err(e) => {
                let err = UploadError::UnreadableFile {
                    path: path.display().to_string(),
                    message: e.to_string(),
                };
                presenter.warn(&err.to_string());
            }
        }
    }

    if submitted.is_empty() {
        presenter.stop_spinner();
        presenter.error("No readable audio files");
        return ExitCode::from(EXIT_ERROR);
    }

    coordinator.wait_idle().await;

    if options.retry_failed {
        let failed_ids: Vec<JobId> = lock_store(&store)
            .list()
            .iter()
            .filter(|job| job.status() == JobStatus::Failed)
            .map(|job| job.id)
            .collect();

        if !failed_ids.is_empty() {
            presenter.update_spinner("Retrying failed jobs...");
            for (id, file) in &submitted {
                if failed_ids.contains(id) {
                    coordinator.retry(*id, file.clone());
                }
            }
            coordinator.wait_idle().await;
        }
    }
    presenter.stop_spinner();

    // Derive and render the visible window
    let snapshot: Vec<Job> = lock_store(&store).snapshot();

    let mut view = TableView::new(options.page_size);
    for column in &options.sort_toggles {
        view.toggle_sort(*column);
    }
    if let Some(query) = &options.query {
        view.set_query(query.clone());
    }
    if let Some(page) = options.page {
        view.go_to_page(page, &snapshot);
    }

    let window = view.derive(&snapshot);
    presenter.table(&window);

    // Transcript detail panel for the selected job
    let mut selection = SelectionController::new();
    if let Some(name) = &options.show {
        match snapshot.iter().find(|job| &job.name == name) {
            Some(job) => selection.select(job.id),
            None => presenter.warn(&format!("No job named \"{}\"", name)),
        }
    }
    {
        let guard = lock_store(&store);
        if let Some(job) = selection.current(&guard) {
            presenter.transcript_panel(job);
        }
    }

    // Export ready transcripts; pending and failed jobs are reported, kept
    if options.export {
        let sink = FsTranscriptSink::new(&options.export_dir);
        for job in &snapshot {
            match job.export_transcript() {
                Ok(artifact) => match sink.deliver(&artifact).await {
                    Ok(path) => presenter.success(&format!("Exported {}", path.display())),
                    Err(e) => presenter.error(&e.to_string()),
                },
                Err(e) => presenter.warn(&e.to_string()),
            }
        }
    }

    let failures = snapshot
        .iter()
        .filter(|job| job.status() == JobStatus::Failed)
        .count();
    if failures > 0 {
        presenter.warn(&format!(
            "{} job{} failed",
            failures,
            if failures == 1 { "" } else { "s" }
        ));
    }

    if failures == snapshot.len() {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}

/// Get API key from environment or merged config
pub fn get_api_key(config: &AppConfig) -> Result<String, String> {
    // Check environment first
    if let Ok(key) = env::var("DEEPGRAM_API_KEY") {
        if !key.is_empty() {
            return Ok(key);
        }
    }

    if let Some(key) = config.api_key.as_deref() {
        if !key.is_empty() {
            return Ok(key.to_string());
        }
    }

    Err("Missing API key. Set DEEPGRAM_API_KEY or configure via 'waveboard config set api_key <key>'"
        .to_string())
}

/// Load file config and overlay CLI-provided values
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());
    file_config.merge(cli_config)
}

fn lock_store(store: &SharedJobStore) -> MutexGuard<'_, JobStore> {
    store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_from_config_when_env_unset() {
        // Serial-safe: only reads the env var when it's present
        let config = AppConfig {
            api_key: Some("from-config".to_string()),
            ..Default::default()
        };
        if env::var("DEEPGRAM_API_KEY").is_err() {
            assert_eq!(get_api_key(&config).unwrap(), "from-config");
        }
    }

    #[test]
    fn missing_api_key_is_an_error() {
        if env::var("DEEPGRAM_API_KEY").is_err() {
            let err = get_api_key(&AppConfig::empty()).unwrap_err();
            assert!(err.contains("DEEPGRAM_API_KEY"));
        }
    }
}
