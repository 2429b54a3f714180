//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// Mark a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// Player X (moves on even steps).
    #[display("X")]
    X,
    /// Player O (moves on odd steps).
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the mark that moves from the given history step.
    ///
    /// X moves on even steps, O on odd steps.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Checks whether the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Immutable 3x3 board snapshot.
///
/// Cells are stored in row-major order, so index `i` sits at row `i / 3`,
/// column `i % 3`. Applying a move yields a new board; an existing board
/// never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from explicit cells.
    ///
    /// Intended for inspecting arbitrary positions; boards reached through
    /// play are built with [`apply_move`](crate::apply_move).
    pub fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the cell at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks whether the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Returns a copy of this board with `mark` placed at `index`.
    ///
    /// Callers guarantee `index` is in range and empty.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut cells = self.cells;
        cells[index] = Cell::Marked(mark);
        Self { cells }
    }
}

impl std::fmt::Display for Board {
    /// Empty cells show their 1-based number so a player can type it.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Marked(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
