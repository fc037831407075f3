//! Board tests

use blockfall::core::{clear_lines, Board, BoardParseError, Position};
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.rows().len(), BOARD_HEIGHT as usize);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {})", x, y);
        }
    }
    assert!(board.is_empty());
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_with_cell_leaves_original() {
    let board = Board::new();
    let next = board.with_cell(5, 10, Some(PieceKind::T));

    assert_eq!(next.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_empty());

    // Out of range writes produce an unchanged copy.
    assert_eq!(board.with_cell(10, 0, Some(PieceKind::T)), board);
    assert_eq!(board.with_cell(0, -1, Some(PieceKind::T)), board);
}

#[test]
fn test_with_piece_skips_cells_above_board() {
    let board = Board::new();
    let cells = [(0, 0), (1, 0), (0, 1), (1, 1)];
    let next = board.with_piece(cells, Position::new(4, -1), PieceKind::O);

    assert_eq!(next.filled_count(), 2);
    assert!(next.is_occupied(4, 0));
    assert!(next.is_occupied(5, 0));
    assert!(board.is_empty());
}

#[test]
fn test_from_rows_errors() {
    assert_eq!(
        Board::from_rows(&["IIII"]),
        Err(BoardParseError::WrongWidth { row: 0, found: 4 })
    );
    assert_eq!(
        Board::from_rows(&["IIII.....X"]),
        Err(BoardParseError::UnknownCell { row: 0, ch: 'X' })
    );
    let tall = [".........."; 21];
    assert_eq!(
        Board::from_rows(&tall),
        Err(BoardParseError::TooManyRows(21))
    );
}

#[test]
fn test_from_rows_accepts_lowercase() {
    let board = Board::from_rows(&["t........l"]).unwrap();
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.get(9, 19), Some(Some(PieceKind::L)));
}

#[test]
fn test_is_row_full() {
    let board = Board::from_rows(&["IIIIIIIIII", "IIIII.IIII"]).unwrap();
    assert!(board.is_row_full(18));
    assert!(!board.is_row_full(19));
    assert!(!board.is_row_full(0));
    assert!(!board.is_row_full(20));
}

#[test]
fn test_clear_single_line() {
    let board = Board::from_rows(&["..T.......", "IIIIIIIIII"]).unwrap();
    let (cleared, count) = clear_lines(&board);

    assert_eq!(count, 1);
    assert_eq!(cleared.get(2, 19), Some(Some(PieceKind::T)));
    assert_eq!(cleared.filled_count(), 1);
    // Input board is untouched.
    assert_eq!(board.filled_count(), 11);
}

#[test]
fn test_clear_consecutive_and_split_lines() {
    let board = Board::from_rows(&[
        "J.........",
        "IIIIIIIIII",
        "LLLLLLLLLL",
        "S........S",
        "ZZZZZZZZZZ",
    ])
    .unwrap();
    let (cleared, count) = clear_lines(&board);

    assert_eq!(count, 3);
    assert_eq!(cleared.to_rows()[18], "J.........");
    assert_eq!(cleared.to_rows()[19], "S........S");
    assert_eq!(cleared.filled_count(), 3);
    for y in 0..BOARD_HEIGHT as usize {
        assert!(!cleared.is_row_full(y));
    }
}

#[test]
fn test_clear_nothing() {
    let board = Board::from_rows(&["IIII.IIIII"]).unwrap();
    let (cleared, count) = clear_lines(&board);
    assert_eq!(count, 0);
    assert_eq!(cleared, board);
}

#[test]
fn test_board_serializes_as_rows() {
    let board = Board::from_rows(&["O........."]).unwrap();
    let json = serde_json::to_value(&board).unwrap();

    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 20);
    assert_eq!(rows[19][0], "o");
    assert!(rows[19][1].is_null());
}
