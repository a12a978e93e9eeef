//! Board tests

use blockfall::core::{canonical_shape, Board};
use blockfall::types::{ConfigError, PieceKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i16, kind: PieceKind) {
    for x in 0..board.width() as i16 {
        board.set(x, y, Some(kind));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::default();
    assert_eq!(board.width(), DEFAULT_BOARD_WIDTH);
    assert_eq!(board.height(), DEFAULT_BOARD_HEIGHT);

    for y in 0..DEFAULT_BOARD_HEIGHT as i16 {
        for x in 0..DEFAULT_BOARD_WIDTH as i16 {
            assert!(board.is_valid(x, y), "Cell ({}, {}) should be valid", x, y);
        }
    }
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_board_rejects_zero_dimensions() {
    assert_eq!(Board::new(0, 20), Err(ConfigError::ZeroWidth));
    assert_eq!(Board::new(10, 0), Err(ConfigError::ZeroHeight));
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(6, 8).unwrap();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(6, 0), None);
    assert_eq!(board.get(0, 8), None);
    assert_eq!(board.get(5, 7), Some(None));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::default();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));
    assert!(!board.is_valid(5, 10));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, DEFAULT_BOARD_HEIGHT as i16, Some(PieceKind::T)));
}

#[test]
fn test_collides_walls_floor_and_ceiling() {
    let board = Board::default();
    let o = canonical_shape(PieceKind::O);

    assert!(!board.collides(&o, 0, 0));
    assert!(!board.collides(&o, 8, 18));
    assert!(board.collides(&o, -1, 0));
    assert!(board.collides(&o, 9, 0));
    assert!(board.collides(&o, 0, 19));
    // Rows above the board count as blocked.
    assert!(board.collides(&o, 4, -1));
}

#[test]
fn test_collides_ignores_empty_shape_cells() {
    let mut board = Board::default();
    let t = canonical_shape(PieceKind::T);
    // T's top row is [0, 6, 0]; only the middle cell is solid.
    board.set(0, 0, Some(PieceKind::Z));
    board.set(2, 0, Some(PieceKind::Z));
    assert!(!board.collides(&t, 0, 0));

    board.set(1, 0, Some(PieceKind::Z));
    assert!(board.collides(&t, 0, 0));
}

#[test]
fn test_merge_writes_kind_per_cell() {
    let mut board = Board::default();
    let s = canonical_shape(PieceKind::S);
    board.merge(&s, 3, 18);

    assert_eq!(board.get(4, 18), Some(Some(PieceKind::S)));
    assert_eq!(board.get(5, 18), Some(Some(PieceKind::S)));
    assert_eq!(board.get(3, 19), Some(Some(PieceKind::S)));
    assert_eq!(board.get(4, 19), Some(Some(PieceKind::S)));
    assert_eq!(board.get(3, 18), Some(None));
    assert_eq!(board.occupied_count(), 4);
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut board = Board::new(4, 10).unwrap();
    board.set(0, 0, Some(PieceKind::T));
    board.set(1, 3, Some(PieceKind::S));
    board.set(2, 4, Some(PieceKind::Z));
    board.set(3, 6, Some(PieceKind::L));
    fill_row(&mut board, 2, PieceKind::I);
    fill_row(&mut board, 5, PieceKind::I);

    assert_eq!(board.clear_full_rows(), 2);

    // Rows above each cleared row move down by the number of cleared rows below them.
    assert_eq!(board.get(0, 2), Some(Some(PieceKind::T)));
    assert_eq!(board.get(1, 4), Some(Some(PieceKind::S)));
    assert_eq!(board.get(2, 5), Some(Some(PieceKind::Z)));
    assert_eq!(board.get(3, 6), Some(Some(PieceKind::L)));
    assert!(board.row(0).unwrap().iter().all(Option::is_none));
    assert!(board.row(1).unwrap().iter().all(Option::is_none));
    assert_eq!(board.occupied_count(), 4);
}

#[test]
fn test_clear_four_bottom_rows() {
    let mut board = Board::default();
    for y in 16..20 {
        fill_row(&mut board, y, PieceKind::I);
    }
    board.set(0, 15, Some(PieceKind::J));

    assert_eq!(board.clear_full_rows(), 4);
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::J)));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_clear_without_full_rows_is_noop() {
    let mut board = Board::default();
    board.set(3, 19, Some(PieceKind::O));
    let before = board.clone();

    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_color_grid_uses_color_ids() {
    let mut board = Board::new(3, 2).unwrap();
    board.set(0, 1, Some(PieceKind::I));
    board.set(2, 1, Some(PieceKind::Z));

    assert_eq!(board.color_grid(), vec![vec![0, 0, 0], vec![1, 0, 7]]);
}
