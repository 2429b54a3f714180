//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board) snapshot. Nothing here keeps
//! state; the controller asks again whenever it needs an answer.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Win, WinLine, evaluate};
