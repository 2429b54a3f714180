//! Tests for move application and board types.

use strictly_timetravel::{Board, Cell, Mark, Move, MoveError, Position, apply_move};

#[test]
fn test_apply_move_returns_new_board() {
    let board = Board::new();
    let next = apply_move(&board, Move::new(Mark::X, 4)).expect("Valid move");

    assert_eq!(board, Board::new());
    assert_eq!(next.get(4), Some(Cell::Marked(Mark::X)));
    assert_eq!(next.occupied(), 1);
}

#[test]
fn test_apply_move_rejects_occupied() {
    let board = apply_move(&Board::new(), Move::new(Mark::X, 0)).expect("Valid move");
    let result = apply_move(&board, Move::new(Mark::O, 0));
    assert_eq!(result, Err(MoveError::Occupied(0)));
    assert!(result.unwrap_err().to_string().contains("occupied"));
}

#[test]
fn test_apply_move_rejects_out_of_range() {
    assert_eq!(
        apply_move(&Board::new(), Move::new(Mark::X, 9)),
        Err(MoveError::OutOfRange(9))
    );
}

#[test]
fn test_apply_move_rejects_after_win() {
    let x = Cell::Marked(Mark::X);
    let e = Cell::Empty;
    let board = Board::from_cells([x, x, x, e, e, e, e, e, e]);
    assert_eq!(
        apply_move(&board, Move::new(Mark::O, 5)),
        Err(MoveError::GameOver(Mark::X))
    );
}

#[test]
fn test_board_display_numbers_empty_cells() {
    let board = apply_move(&Board::new(), Move::new(Mark::X, 0)).expect("Valid move");
    let board = apply_move(&board, Move::new(Mark::O, 4)).expect("Valid move");
    assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
}

#[test]
fn test_board_serializes() {
    let board = apply_move(&Board::new(), Move::new(Mark::O, 2)).expect("Valid move");
    let json = serde_json::to_string(&board).expect("Serializable");
    let back: Board = serde_json::from_str(&json).expect("Deserializable");
    assert_eq!(board, back);
}

#[test]
fn test_position_index_mapping() {
    assert_eq!(Position::TopLeft.index(), 0);
    assert_eq!(Position::Center.index(), 4);
    assert_eq!(Position::BottomRight.index(), 8);
    assert_eq!(Position::from_index(5), Some(Position::MiddleRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_position_shift_stops_at_edges() {
    assert_eq!(Position::Center.shifted(-1, 0), Position::TopCenter);
    assert_eq!(Position::TopCenter.shifted(-1, 0), Position::TopCenter);
    assert_eq!(Position::MiddleRight.shifted(0, 1), Position::MiddleRight);
    assert_eq!(Position::TopLeft.shifted(1, 1), Position::Center);
}

#[test]
fn test_position_labels() {
    assert_eq!(Position::TopLeft.label(), "Top-left");
    assert_eq!(Position::Center.to_string(), "Center");
    assert_eq!(Position::BottomRight.label(), "Bottom-right");
}
