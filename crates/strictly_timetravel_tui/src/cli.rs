//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Time Travel - tic-tac-toe with a replayable move history
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Two-player tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs here instead of the configured log file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Play a sequence of cells (0-8) and print the result
    Replay {
        /// Cells to play in order; X moves first
        cells: Vec<usize>,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
}
