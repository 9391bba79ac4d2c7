//! Waveboard CLI entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use waveboard::cli::{
    app::{load_merged_config, run_table, EXIT_ERROR},
    args::{Cli, Commands, TableOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use waveboard::domain::config::AppConfig;
use waveboard::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        api_key: None, // API key comes from env/file only
        host: cli.host.clone(),
        language: None,
        model: None,
        smart_format: None,
        page_size: cli.page_size,
        export_dir: cli
            .export_dir
            .as_ref()
            .map(|dir| dir.display().to_string()),
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    let options = TableOptions {
        files: cli.files,
        query: cli.query,
        sort_toggles: cli.sort_by.into_iter().map(Into::into).collect(),
        page: cli.page,
        page_size: config.page_size_or_default(),
        show: cli.show,
        export: cli.export,
        export_dir: PathBuf::from(config.export_dir_or_default()),
        retry_failed: cli.retry_failed,
    };

    run_table(options, &config).await
}
