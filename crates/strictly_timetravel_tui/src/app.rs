//! Application state and key handling.

use std::cell::Cell as Flag;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_getters::Getters;
use strictly_timetravel::{GameController, GameEvent, Position};
use tracing::{debug, info, instrument};

use crate::config::Settings;
use crate::input::{cell_for_digit, move_cursor};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    History,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    game: GameController,
    cursor: Position,
    focus: Focus,
    /// Highlighted row in the move list.
    selected: usize,
    show_hints: bool,
    #[getter(skip)]
    needs_redraw: Rc<Flag<bool>>,
}

impl App {
    /// Creates the app with a fresh game.
    #[instrument(skip(settings))]
    pub fn new(settings: &Settings) -> Self {
        let needs_redraw = Rc::new(Flag::new(true));
        Self {
            game: Self::watched_game(&needs_redraw),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            show_hints: *settings.show_hints(),
            needs_redraw,
        }
    }

    /// Builds a controller whose changes schedule a redraw.
    fn watched_game(needs_redraw: &Rc<Flag<bool>>) -> GameController {
        let mut game = GameController::new();
        let flag = Rc::clone(needs_redraw);
        game.subscribe(move |event: &GameEvent| {
            debug!(?event, "Game changed");
            flag.set(true);
        });
        game
    }

    /// Returns whether a redraw is pending and clears the request.
    pub fn take_redraw(&self) -> bool {
        self.needs_redraw.replace(false)
    }

    /// Schedules a redraw, e.g. after a terminal resize.
    pub fn request_redraw(&self) {
        self.needs_redraw.set(true);
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus, step = self.game.current_index()))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return AppAction::Quit;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                info!("User interrupted");
                return AppAction::Quit;
            }
            KeyCode::Char('n') => self.restart(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                self.selected = self.game.current_index();
                self.request_redraw();
            }
            KeyCode::Char('[') => {
                if let Some(step) = self.game.current_index().checked_sub(1) {
                    self.jump(step);
                }
            }
            KeyCode::Char(']') => {
                let step = self.game.current_index() + 1;
                if step < self.game.history_len() {
                    self.jump(step);
                }
            }
            KeyCode::Char(c) if self.focus == Focus::Board && c.is_ascii_digit() => {
                if let Some(pos) = cell_for_digit(c).and_then(Position::from_index) {
                    if pos != self.cursor {
                        self.cursor = pos;
                        self.request_redraw();
                    }
                    self.play(pos.index());
                }
            }
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key.code),
                Focus::History => self.handle_history_key(key.code),
            },
        }
        AppAction::Continue
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.index()),
            code => {
                let cursor = move_cursor(self.cursor, code);
                if cursor != self.cursor {
                    self.cursor = cursor;
                    self.request_redraw();
                }
            }
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                self.request_redraw();
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(self.game.history_len() - 1);
                self.request_redraw();
            }
            KeyCode::Home => {
                self.selected = 0;
                self.request_redraw();
            }
            KeyCode::End => {
                self.selected = self.game.history_len() - 1;
                self.request_redraw();
            }
            KeyCode::Enter => self.jump(self.selected),
            _ => {}
        }
    }

    /// Plays `cell`; illegal moves are ignored.
    fn play(&mut self, cell: usize) {
        match self.game.play(cell) {
            Ok(step) => self.selected = step,
            Err(e) => debug!(error = %e, cell, "Move ignored"),
        }
    }

    /// Jumps to a recorded step. Only existing steps are offered, so a
    /// failure here is logged and otherwise ignored.
    fn jump(&mut self, step: usize) {
        match self.game.jump_to(step) {
            Ok(()) => self.selected = step,
            Err(e) => debug!(error = %e, "Jump ignored"),
        }
    }

    /// Starts a new game.
    pub fn restart(&mut self) {
        info!("Starting new game");
        self.game = Self::watched_game(&self.needs_redraw);
        self.cursor = Position::Center;
        self.focus = Focus::Board;
        self.selected = 0;
        self.request_redraw();
    }
}
