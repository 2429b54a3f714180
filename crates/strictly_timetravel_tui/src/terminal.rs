//! Terminal setup and the interactive event loop.

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info, instrument, warn};

use crate::app::{App, AppAction};
use crate::config::Settings;
use crate::ui;

/// Restores the terminal on drop, including on early return or panic unwind.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(self.terminal.backend_mut(), LeaveAlternateScreen) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
        if let Err(e) = self.terminal.show_cursor() {
            warn!(error = %e, "Failed to show cursor");
        }
    }
}

/// Runs the interactive game until the user quits.
#[instrument(skip(settings))]
pub fn run_tui(settings: &Settings) -> Result<()> {
    info!("Starting Strictly Time Travel TUI");
    let mut guard = TerminalGuard::enter()?;
    let mut app = App::new(settings);

    loop {
        if app.take_redraw() {
            guard.terminal.draw(|f| ui::draw(f, &app))?;
        }

        match event::read()? {
            // crossterm reports both press and release on some platforms.
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key) == AppAction::Quit {
                    break;
                }
            }
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                app.request_redraw();
            }
            _ => {}
        }
    }

    info!(steps = app.game().history_len(), "TUI finished");
    Ok(())
}
