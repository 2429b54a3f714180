//! Game controller: history, the current step, and change notification.

use super::action::{Move, MoveError, apply_move};
use super::events::{GameEvent, Observers, Subscription};
use super::history::History;
use super::rules::{Win, evaluate, is_draw};
use super::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A jump target outside the recorded history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// The requested step does not exist.
    #[display("Step {} is outside history of length {}", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

impl std::error::Error for HistoryError {}

/// One row of the move list shown next to the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveListEntry {
    /// History step this entry points at.
    pub step: usize,
    /// Text to show.
    pub label: String,
    /// Whether this is the step on display. The current entry is plain text,
    /// every other entry is something the player can jump to.
    pub is_current: bool,
}

/// Owns one game session.
///
/// The controller holds every board reached so far and a pointer to the one
/// being shown. Whose turn it is follows from the pointer: X on even steps,
/// O on odd steps.
#[derive(Debug, Default)]
pub struct GameController {
    history: History,
    current: usize,
    observers: Observers,
}

impl GameController {
    /// Starts a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        info!("Starting new game");
        Self::default()
    }

    /// Plays the next mark at `index` on the board currently shown.
    ///
    /// Any snapshots after the current step are discarded before the new
    /// board is appended. Returns the new current step.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] when the move is illegal; the controller is left
    /// exactly as it was and no observer is notified.
    #[instrument(skip(self), fields(step = self.current, len = self.history.len()))]
    pub fn play(&mut self, index: usize) -> Result<usize, MoveError> {
        let mv = Move::new(self.next_mark(), index);
        let board = apply_move(self.current_board(), mv).inspect_err(|e| {
            debug!(error = %e, "Ignoring illegal move");
        })?;

        let discarded = self.history.len() - self.current - 1;
        self.current = self.history.branch_from(self.current, board);
        debug!(%mv, step = self.current, discarded, "Move played");

        self.observers.notify(&GameEvent::Played {
            mv,
            step: self.current,
            discarded,
        });
        Ok(self.current)
    }

    /// Shows the board at `step` without changing history.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::StepOutOfRange`] if `step` was never reached.
    #[instrument(skip(self), fields(from = self.current, len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        let len = self.history.len();
        if step >= len {
            warn!("Jump target outside history");
            return Err(HistoryError::StepOutOfRange { step, len });
        }

        let from = self.current;
        self.current = step;
        debug!("Jumped");

        self.observers.notify(&GameEvent::Jumped { from, to: step });
        Ok(())
    }

    /// Registers a callback run after every accepted move and every jump.
    pub fn subscribe(&mut self, callback: impl FnMut(&GameEvent) + 'static) -> Subscription {
        self.observers.subscribe(Box::new(callback))
    }

    /// Removes a callback. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.observers.unsubscribe(subscription)
    }

    /// Board at the current step.
    pub fn current_board(&self) -> &Board {
        // `current` only ever comes from `branch_from` or a bounds-checked jump.
        &self.history.boards()[self.current]
    }

    /// The current step.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Every snapshot recorded so far.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Number of recorded snapshots.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// True when X moves next, which is on even steps.
    pub fn is_x_next(&self) -> bool {
        self.current % 2 == 0
    }

    /// Mark that moves next from the current step.
    pub fn next_mark(&self) -> Mark {
        Mark::for_step(self.current)
    }

    /// Completed line on the current board, if any.
    pub fn winner(&self) -> Option<Win> {
        evaluate(self.current_board())
    }

    /// True when the current board is full without a winner.
    pub fn is_draw(&self) -> bool {
        is_draw(self.current_board())
    }

    /// Status text: the winner if there is one, otherwise who moves next.
    pub fn status_line(&self) -> String {
        match self.winner() {
            Some(win) => format!("Winner: {}", win.winner()),
            None => format!("Next player: {}", self.next_mark()),
        }
    }

    /// One entry per history step, oldest first.
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        (0..self.history.len())
            .map(|step| {
                let is_current = step == self.current;
                let label = if is_current {
                    format!("You are at move #{}", step)
                } else if step == 0 {
                    "Game start".to_string()
                } else {
                    format!("Move to step #{}", step)
                };
                MoveListEntry {
                    step,
                    label,
                    is_current,
                }
            })
            .collect()
    }
}
