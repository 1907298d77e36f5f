//! Strictly Tic-Tac-Toe - terminal front end.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::path::Path;
use strictly_tictactoe::{AppConfig, Controller, FileThemeStore, LoggingObserver, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(settings) = cli.settings {
        config = config.with_settings_path(settings);
    }
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }

    init_tracing(config.log_file())?;
    info!(?config, "Starting Strictly Tic-Tac-Toe");

    let store = FileThemeStore::new(config.settings_path());
    let mut controller = Controller::new(Box::new(store), *config.input());
    controller.subscribe(Box::new(LoggingObserver));

    tui::run(&mut controller)
}

/// Logs to a file so output does not interfere with the TUI.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}
