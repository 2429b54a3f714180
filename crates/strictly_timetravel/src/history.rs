//! Ordered board snapshots with branch discard.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Every board reached in a session, oldest first.
///
/// Step 0 is always the empty board, so a history is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    boards: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
        }
    }

    /// Number of snapshots.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Always false; step 0 is never removed.
    pub fn is_empty(&self) -> bool {
        debug_assert!(!self.boards.is_empty(), "history lost its initial board");
        false
    }

    /// Snapshot at `step`.
    pub fn get(&self, step: usize) -> Option<&Board> {
        self.boards.get(step)
    }

    /// All snapshots, oldest first.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Drops every snapshot after `step`, appends `board`, and returns the
    /// step of the appended board.
    #[instrument(level = "debug", skip(self, board), fields(len = self.boards.len()))]
    pub(crate) fn branch_from(&mut self, step: usize, board: Board) -> usize {
        let discarded = self.boards.len().saturating_sub(step + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future snapshots");
        }
        self.boards.truncate(step + 1);
        self.boards.push(board);
        self.boards.len() - 1
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
