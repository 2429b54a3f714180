//! Named board positions.

use serde::{Deserialize, Serialize};

/// A position on the tic-tac-toe board.
///
/// The discriminant is the row-major cell index (0-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(strum::Display, strum::IntoStaticStr)]
pub enum Position {
    /// Top-left (index 0)
    #[strum(serialize = "Top-left")]
    TopLeft,
    /// Top-center (index 1)
    #[strum(serialize = "Top-center")]
    TopCenter,
    /// Top-right (index 2)
    #[strum(serialize = "Top-right")]
    TopRight,
    /// Middle-left (index 3)
    #[strum(serialize = "Middle-left")]
    MiddleLeft,
    /// Center (index 4)
    #[strum(serialize = "Center")]
    Center,
    /// Middle-right (index 5)
    #[strum(serialize = "Middle-right")]
    MiddleRight,
    /// Bottom-left (index 6)
    #[strum(serialize = "Bottom-left")]
    BottomLeft,
    /// Bottom-center (index 7)
    #[strum(serialize = "Bottom-center")]
    BottomCenter,
    /// Bottom-right (index 8)
    #[strum(serialize = "Bottom-right")]
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Human-readable label, shown next to the board cursor.
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Converts to the board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Creates a position from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.index() % 3
    }

    /// Moves by the given row and column offsets, stopping at the edges.
    pub fn shifted(self, rows: isize, cols: isize) -> Self {
        let row = (self.row() as isize + rows).clamp(0, 2) as usize;
        let col = (self.col() as isize + cols).clamp(0, 2) as usize;
        Self::ALL[row * 3 + col]
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.index()
    }
}
