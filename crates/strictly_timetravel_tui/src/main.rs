//! Strictly Time Travel - terminal tic-tac-toe with move history.

#![warn(missing_docs)]

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use strictly_timetravel_tui::{Cli, Command, Settings, replay, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(log_file) = cli.log_file {
        settings = settings.with_log_file(log_file);
    }

    init_logging(settings.log_file(), settings.log_filter())?;
    info!(?settings, "Settings resolved");

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(&settings),
        Command::Replay { cells, json } => {
            let report = replay(&cells);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.to_text());
            }
            Ok(())
        }
    }
}

/// Sends logs to a file so they do not interfere with the TUI.
fn init_logging(log_file: &Path, default_filter: &str) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
