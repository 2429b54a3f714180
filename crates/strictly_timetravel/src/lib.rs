//! Strictly Time Travel - tic-tac-toe with a replayable move history.
//!
//! The crate is split the same way the game is reasoned about:
//!
//! - **Types**: [`Mark`], [`Cell`] and the immutable [`Board`] snapshot
//! - **Rules**: pure win and draw detection over a board
//! - **Action**: [`apply_move`] validates a [`Move`] and produces a new board
//! - **Controller**: [`GameController`] owns the [`History`] and the pointer
//!   into it, and notifies subscribers whenever either changes
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{GameController, Mark};
//!
//! let mut game = GameController::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     game.play(cell).expect("legal move");
//! }
//!
//! let win = game.winner().expect("X completed the top row");
//! assert_eq!(win.winner(), Mark::X);
//! assert_eq!(win.line(), [0, 1, 2]);
//!
//! // Travel back and branch off.
//! game.jump_to(2).expect("step exists");
//! game.play(3).expect("legal move");
//! assert_eq!(game.history_len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod events;
mod history;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError, apply_move};
pub use controller::{GameController, HistoryError, MoveListEntry};
pub use events::{GameEvent, Subscription};
pub use history::History;
pub use position::Position;
pub use rules::{Win, WinLine, evaluate, is_draw, is_full};
pub use types::{BOARD_SIZE, Board, Cell, Mark};
