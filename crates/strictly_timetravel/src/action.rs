//! Move validation and application.
//!
//! A [`Move`] is a player's intent. [`apply_move`] checks it against a board
//! snapshot and, when legal, returns the next snapshot.

use super::rules::evaluate;
use super::types::{BOARD_SIZE, Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A mark placed at a cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// The target cell (0-8).
    pub index: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.index)
    }
}

/// Why a move was rejected.
///
/// Every variant is an illegal move; the UI ignores them silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is not on the board.
    #[display("Cell {} is off the board", _0)]
    OutOfRange(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),

    /// The board already has a completed line.
    #[display("Game is already won by {}", _0)]
    GameOver(Mark),
}

impl std::error::Error for MoveError {}

/// Applies `mv` to `board`, returning the resulting board.
///
/// The input board is never modified.
///
/// # Errors
///
/// Returns [`MoveError`] if the index is out of range, the cell is occupied,
/// or `board` already has a winner.
#[instrument(skip(board), fields(mark = %mv.mark, index = mv.index))]
pub fn apply_move(board: &Board, mv: Move) -> Result<Board, MoveError> {
    if mv.index >= BOARD_SIZE {
        return Err(MoveError::OutOfRange(mv.index));
    }

    if let Some(win) = evaluate(board) {
        return Err(MoveError::GameOver(win.winner()));
    }

    if board.get(mv.index) != Some(Cell::Empty) {
        return Err(MoveError::Occupied(mv.index));
    }

    debug!("Move accepted");
    Ok(board.with_mark(mv.index, mv.mark))
}
