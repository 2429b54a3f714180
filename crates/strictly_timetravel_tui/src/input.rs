//! Key mapping helpers for board navigation.

use crossterm::event::KeyCode;
use strictly_timetravel::Position;

/// Moves the board cursor for an arrow key; other keys leave it alone.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    match key {
        KeyCode::Up => cursor.shifted(-1, 0),
        KeyCode::Down => cursor.shifted(1, 0),
        KeyCode::Left => cursor.shifted(0, -1),
        KeyCode::Right => cursor.shifted(0, 1),
        _ => cursor,
    }
}

/// Maps the digits 1-9 to cell indices 0-8.
pub fn cell_for_digit(c: char) -> Option<usize> {
    match c.to_digit(10)? {
        0 => None,
        digit => Some(digit as usize - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_move_cursor() {
        assert_eq!(
            move_cursor(Position::Center, KeyCode::Up),
            Position::TopCenter
        );
        assert_eq!(
            move_cursor(Position::Center, KeyCode::Down),
            Position::BottomCenter
        );
        assert_eq!(
            move_cursor(Position::Center, KeyCode::Left),
            Position::MiddleLeft
        );
        assert_eq!(
            move_cursor(Position::Center, KeyCode::Right),
            Position::MiddleRight
        );
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(
            move_cursor(Position::TopLeft, KeyCode::Up),
            Position::TopLeft
        );
        assert_eq!(
            move_cursor(Position::TopLeft, KeyCode::Left),
            Position::TopLeft
        );
        assert_eq!(
            move_cursor(Position::BottomRight, KeyCode::Down),
            Position::BottomRight
        );
        assert_eq!(
            move_cursor(Position::BottomRight, KeyCode::Right),
            Position::BottomRight
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(
            move_cursor(Position::Center, KeyCode::Enter),
            Position::Center
        );
    }

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(cell_for_digit('1'), Some(0));
        assert_eq!(cell_for_digit('9'), Some(8));
        assert_eq!(cell_for_digit('0'), None);
        assert_eq!(cell_for_digit('x'), None);
    }
}
