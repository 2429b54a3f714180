//! Terminal front end for Strictly Time Travel.
//!
//! - **App**: keyboard-driven state around a
//!   [`GameController`](strictly_timetravel::GameController)
//! - **UI**: stateless ratatui rendering of the board, status and move list
//! - **Replay**: non-interactive playback for scripts
//! - **Config**: TOML settings and CLI flags

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod replay;
mod terminal;
mod ui;

pub use app::{App, AppAction, Focus};
pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, Settings};
pub use input::{cell_for_digit, move_cursor};
pub use replay::{RejectedMove, ReplayReport, replay};
pub use terminal::run_tui;
pub use ui::draw;
