//! Board tests: cell access, placement, locking and line clears.

use termino::core::board::FULL_ROW;
use termino::core::Board;
use termino::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, except: &[i8]) {
    for x in 0..BOARD_WIDTH as i8 {
        if !except.contains(&x) {
            board.set(x, y, Some(PieceKind::Z));
        }
    }
}

#[test]
fn new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert!(board.rows().iter().all(|&r| r == 0));
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn out_of_bounds_access() {
    let mut board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
    assert!(!board.set(BOARD_WIDTH as i8, 0, Some(PieceKind::T)));
    assert!(!board.is_occupied(-1, 5));
}

#[test]
fn set_keeps_bits_and_kinds_in_step() {
    let mut board = Board::new();
    assert!(board.set(4, 30, Some(PieceKind::L)));
    assert_eq!(board.row_bits(30), 1 << 4);
    assert_eq!(board.get(4, 30), Some(Some(PieceKind::L)));

    assert!(board.set(4, 30, None));
    assert_eq!(board.row_bits(30), 0);
    assert_eq!(board.get(4, 30), Some(None));
}

#[test]
fn can_place_respects_walls_floor_and_stack() {
    let mut board = Board::new();
    assert!(board.can_place(PieceKind::T, 3, 20, Rotation::North));
    // I North lives in mask row 1; empty row 0 may hang above the top.
    assert!(board.can_place(PieceKind::I, 0, -1, Rotation::North));

    assert!(!board.can_place(PieceKind::O, 8, 10, Rotation::North));
    assert!(!board.can_place(PieceKind::T, -1, 10, Rotation::North));
    assert!(!board.can_place(PieceKind::I, 0, 37, Rotation::East));

    board.set(4, 21, Some(PieceKind::J));
    assert!(!board.can_place(PieceKind::T, 3, 20, Rotation::North));
}

#[test]
fn east_mask_may_overhang_left_wall_with_empty_column() {
    let board = Board::new();
    // I East occupies mask column 2 only.
    assert!(board.can_place(PieceKind::I, -2, 10, Rotation::East));
    assert!(!board.can_place(PieceKind::I, -3, 10, Rotation::East));
}

#[test]
fn lock_piece_writes_row_bits_and_kinds() {
    let mut board = Board::new();
    board.lock_piece(PieceKind::T, 3, 38, Rotation::North);
    assert_eq!(board.row_bits(38), 1 << 4);
    assert_eq!(board.row_bits(39), 0b111 << 3);
    assert_eq!(board.get(5, 39), Some(Some(PieceKind::T)));
    assert_eq!(board.get(6, 39), Some(None));
}

#[test]
fn lock_piece_with_negative_x_does_not_wrap() {
    let mut board = Board::new();
    board.lock_piece(PieceKind::I, -2, 36, Rotation::East);
    for y in 36..40 {
        assert_eq!(board.row_bits(y), 1, "row {}", y);
    }
    assert_eq!(board.get(0, 39), Some(Some(PieceKind::I)));
}

#[test]
fn clear_single_row_shifts_stack_down() {
    let mut board = Board::new();
    fill_row(&mut board, 39, &[]);
    board.set(2, 38, Some(PieceKind::S));

    let cleared = board.clear_lines();
    assert_eq!(cleared.as_slice(), &[39]);
    assert_eq!(board.row_bits(39), 1 << 2);
    assert_eq!(board.get(2, 39), Some(Some(PieceKind::S)));
    assert_eq!(board.row_bits(38), 0);
}

#[test]
fn clear_non_adjacent_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 39, &[]);
    fill_row(&mut board, 38, &[0]);
    fill_row(&mut board, 37, &[]);
    board.set(9, 36, Some(PieceKind::O));

    let cleared = board.clear_lines();
    assert_eq!(cleared.len(), 2);
    assert_eq!(board.row_bits(39), FULL_ROW & !1);
    assert_eq!(board.row_bits(38), 1 << 9);
    assert_eq!(board.row_bits(37), 0);
}

#[test]
fn clear_four_rows_empties_board() {
    let mut board = Board::new();
    for y in 36..40 {
        fill_row(&mut board, y, &[]);
    }
    assert_eq!(board.clear_lines().len(), 4);
    assert!(board.rows().iter().all(|&r| r == 0));
    assert_eq!(board.get(0, 39), Some(None));
}

#[test]
fn nothing_to_clear() {
    let mut board = Board::new();
    fill_row(&mut board, 39, &[5]);
    let before = board.clone();
    assert!(board.clear_lines().is_empty());
    assert_eq!(board, before);
}

#[test]
fn clear_resets_board() {
    let mut board = Board::new();
    fill_row(&mut board, 10, &[]);
    board.clear();
    assert_eq!(board, Board::new());
}

#[test]
fn clear_two_adjacent_rows_shifts_by_two() {
    let mut board = Board::new();
    fill_row(&mut board, 39, &[]);
    fill_row(&mut board, 38, &[]);
    board.set(1, 37, Some(PieceKind::T));
    board.set(8, 36, Some(PieceKind::L));
    board.set(0, 0, Some(PieceKind::S));

    let cleared = board.clear_lines();
    assert_eq!(cleared.as_slice(), &[39, 38]);

    assert_eq!(board.row_bits(39), 1 << 1);
    assert_eq!(board.get(1, 39), Some(Some(PieceKind::T)));
    assert_eq!(board.row_bits(38), 1 << 8);
    assert_eq!(board.get(8, 38), Some(Some(PieceKind::L)));
    assert_eq!(board.row_bits(2), 1);
    assert_eq!(board.get(0, 2), Some(Some(PieceKind::S)));

    for y in 0..2 {
        assert_eq!(board.row_bits(y), 0);
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y as i8), Some(None));
        }
    }
    let filled: u32 = board.rows().iter().map(|r| r.count_ones()).sum();
    assert_eq!(filled, 3);
}

#[test]
fn every_full_row_is_reported() {
    let mut board = Board::new();
    for y in 33..39 {
        fill_row(&mut board, y, &[]);
    }
    board.set(4, 39, Some(PieceKind::O));
    let before: u32 = board.rows().iter().map(|r| r.count_ones()).sum();

    let cleared = board.clear_lines();
    let after: u32 = board.rows().iter().map(|r| r.count_ones()).sum();

    assert_eq!(cleared.len(), 6);
    assert_eq!(cleared.len() as u32, (before - after) / BOARD_WIDTH as u32);
    assert_eq!(cleared.as_slice(), &[38, 37, 36, 35, 34, 33]);
    assert_eq!(board.row_bits(39), 1 << 4);
}
