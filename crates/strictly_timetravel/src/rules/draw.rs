//! Draw detection.

use super::win::evaluate;
use crate::types::Board;
use tracing::instrument;

/// Checks if every cell is occupied.
#[instrument(level = "debug", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

/// Checks if the board is full with no completed line.
#[instrument(level = "debug", skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && evaluate(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Mark};

    const X: Cell = Cell::Marked(Mark::X);
    const O: Cell = Cell::Marked(Mark::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::from_cells([X, O, X, E, E, E, E, E, E]);
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = Board::from_cells([X, O, X, O, X, X, O, X, O]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // X X X / O O X / O X O
        let board = Board::from_cells([X, X, X, O, O, X, O, X, O]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
