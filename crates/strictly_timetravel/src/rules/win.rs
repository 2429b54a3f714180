//! Win detection.

use crate::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three cell indices forming a row, column or diagonal, ascending.
pub type WinLine = [usize; 3];

/// Every winning line, checked in this order.
pub const LINES: [WinLine; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Win {
    winner: Mark,
    line: WinLine,
}

impl Win {
    /// Mark that completed the line.
    pub fn winner(&self) -> Mark {
        self.winner
    }

    /// Indices of the completed line.
    pub fn line(&self) -> WinLine {
        self.line
    }

    /// Checks whether `index` is part of the winning line.
    pub fn contains(&self, index: usize) -> bool {
        self.line.contains(&index)
    }
}

/// Returns the first completed line on `board`, if any.
///
/// Only boards reached through legal play are guaranteed to hold at most one
/// line; on a hand-built board with several, the earliest in [`LINES`] wins.
#[instrument(level = "debug", skip(board), ret)]
pub fn evaluate(board: &Board) -> Option<Win> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        match board.get(a)? {
            Cell::Marked(mark)
                if board.get(b) == Some(Cell::Marked(mark))
                    && board.get(c) == Some(Cell::Marked(mark)) =>
            {
                Some(Win::new(mark, line))
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Mark)]) -> Board {
        let mut cells = [Cell::Empty; 9];
        for &(index, mark) in marks {
            cells[index] = Cell::Marked(mark);
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[(0, Mark::X), (1, Mark::X), (2, Mark::X)]);
        assert_eq!(evaluate(&board), Some(Win::new(Mark::X, [0, 1, 2])));
    }

    #[test]
    fn test_winner_middle_column() {
        let board = board_with(&[(1, Mark::O), (4, Mark::O), (7, Mark::O)]);
        assert_eq!(evaluate(&board), Some(Win::new(Mark::O, [1, 4, 7])));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[(2, Mark::O), (4, Mark::O), (6, Mark::O)]);
        assert_eq!(evaluate(&board), Some(Win::new(Mark::O, [2, 4, 6])));
    }

    #[test]
    fn test_every_line_detected() {
        for line in LINES {
            let board = board_with(&line.map(|i| (i, Mark::X)));
            assert_eq!(evaluate(&board), Some(Win::new(Mark::X, line)));
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(0, Mark::X), (1, Mark::O), (2, Mark::X)]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(0, Mark::X), (1, Mark::X)]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_first_line_reported_on_malformed_board() {
        // Top row and left column both complete; rows are checked first.
        let board = board_with(&[
            (0, Mark::X),
            (1, Mark::X),
            (2, Mark::X),
            (3, Mark::X),
            (6, Mark::X),
        ]);
        assert_eq!(evaluate(&board).map(|w| w.line()), Some([0, 1, 2]));
    }

    #[test]
    fn test_win_contains_line_cells() {
        let win = Win::new(Mark::X, [0, 4, 8]);
        assert!(win.contains(4));
        assert!(!win.contains(3));
    }
}
