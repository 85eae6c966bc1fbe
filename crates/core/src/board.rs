//! Board module - bitboard playfield
//!
//! The board is 10 columns by 40 rows. Each row is a `u16` whose low 10 bits
//! are the occupied columns (bit `x` = column `x`), so full-row and per-cell
//! tests are single mask operations. A parallel cell grid remembers which kind
//! placed each block; a cell's kind is only meaningful while its bit is set.
//!
//! Coordinates: x grows to the right, y grows downward (row 0 is the top).

use arrayvec::ArrayVec;

use crate::pieces::masks;
use crate::types::{Cell, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Bits of a completely filled row.
pub const FULL_ROW: u16 = (1 << BOARD_WIDTH) - 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [u16; HEIGHT],
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            rows: [0; HEIGHT],
            cells: [[None; WIDTH]; HEIGHT],
        }
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    #[inline(always)]
    fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && (x as usize) < WIDTH && y >= 0 && (y as usize) < HEIGHT
    }

    /// Cell at (x, y), `None` when out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        if !Self::in_bounds(x, y) {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if self.rows[y] & (1 << x) == 0 {
            Some(None)
        } else {
            Some(self.cells[y][x])
        }
    }

    /// Set or clear a single cell. Returns false when out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        if !Self::in_bounds(x, y) {
            return false;
        }
        let (xu, yu) = (x as usize, y as usize);
        match cell {
            Some(_) => self.rows[yu] |= 1 << xu,
            None => self.rows[yu] &= !(1 << xu),
        }
        self.cells[yu][xu] = cell;
        true
    }

    /// Within bounds and filled.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Occupancy bits of a row (0 when out of range).
    pub fn row_bits(&self, y: usize) -> u16 {
        self.rows.get(y).copied().unwrap_or(0)
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.row_bits(y) & FULL_ROW == FULL_ROW
    }

    /// Whether `kind` at `rotation` fits with its mask origin at (x, y).
    ///
    /// Empty mask rows are ignored, so they may hang outside the board. Any
    /// occupied mino must be inside the board and on an empty cell.
    pub fn can_place(&self, kind: PieceKind, x: i8, y: i8, rotation: Rotation) -> bool {
        let rows = masks(kind, rotation);
        for (dy, &bits) in rows.iter().enumerate() {
            if bits == 0 {
                continue;
            }
            let board_y = y as i16 + dy as i16;
            if board_y < 0 || board_y >= HEIGHT as i16 {
                return false;
            }
            let row = self.rows[board_y as usize];
            for dx in 0..4 {
                if bits & (1 << dx) == 0 {
                    continue;
                }
                let board_x = x as i16 + dx as i16;
                if board_x < 0 || board_x >= WIDTH as i16 {
                    return false;
                }
                if row & (1 << board_x) != 0 {
                    return false;
                }
            }
        }
        true
    }

    /// Merge a piece into the board.
    ///
    /// Mask rows are shifted into place (a negative x shifts right so columns
    /// left of the wall are dropped rather than wrapped). Rows outside the
    /// board are skipped.
    pub fn lock_piece(&mut self, kind: PieceKind, x: i8, y: i8, rotation: Rotation) {
        let rows = masks(kind, rotation);
        for (dy, &bits) in rows.iter().enumerate() {
            let board_y = y as i16 + dy as i16;
            if board_y < 0 || board_y >= HEIGHT as i16 {
                continue;
            }
            let board_y = board_y as usize;

            let shifted = if x >= 0 {
                (bits as u16).checked_shl(x as u32).unwrap_or(0)
            } else {
                (bits as u16).checked_shr(x.unsigned_abs() as u32).unwrap_or(0)
            };
            self.rows[board_y] |= shifted & FULL_ROW;

            for dx in 0..4 {
                if bits & (1 << dx) == 0 {
                    continue;
                }
                let board_x = x as i16 + dx as i16;
                if board_x >= 0 && board_x < WIDTH as i16 {
                    self.cells[board_y][board_x as usize] = Some(kind);
                }
            }
        }
    }

    /// Remove full rows and compact everything above them downward.
    ///
    /// Returns the removed row indices, bottom first. One piece completes at
    /// most 4 rows, but a board built cell by cell may hold more and every one
    /// of them is reported.
    pub fn clear_lines(&mut self) -> ArrayVec<usize, HEIGHT> {
        let mut cleared = ArrayVec::new();
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                self.rows[write_y] = self.rows[read_y];
                self.cells[write_y] = self.cells[read_y];
            }
        }

        for y in 0..write_y {
            self.rows[y] = 0;
            self.cells[y] = [None; WIDTH];
        }

        cleared
    }

    /// Copy the cell grid, reporting empty wherever the bit is clear.
    pub fn write_cells(&self, out: &mut [[Cell; WIDTH]; HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = if self.rows[y] & (1 << x) != 0 {
                    self.cells[y][x]
                } else {
                    None
                };
            }
        }
    }

    pub fn rows(&self) -> &[u16; HEIGHT] {
        &self.rows
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Build a board from ASCII rows aligned to the bottom, `#` filled and `.` empty.
    #[cfg(test)]
    pub fn from_ascii(lines: &[&str]) -> Self {
        let mut board = Self::new();
        let base = HEIGHT - lines.len();
        for (i, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                if ch == '#' {
                    board.set(x as i8, (base + i) as i8, Some(PieceKind::I));
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_row_mask_is_ten_bits() {
        assert_eq!(FULL_ROW, 0x03FF);
    }

    #[test]
    fn set_updates_bits_and_kind() {
        let mut board = Board::new();
        assert!(board.set(3, 39, Some(PieceKind::T)));
        assert_eq!(board.row_bits(39), 1 << 3);
        assert_eq!(board.get(3, 39), Some(Some(PieceKind::T)));

        assert!(board.set(3, 39, None));
        assert_eq!(board.row_bits(39), 0);
        assert!(!board.set(10, 0, Some(PieceKind::T)));
    }

    #[test]
    fn can_place_ignores_empty_rows_outside_board() {
        let board = Board::new();
        // I North only occupies mask row 1, so row 0 may sit above the board.
        assert!(board.can_place(PieceKind::I, 0, -1, Rotation::North));
        assert!(!board.can_place(PieceKind::I, 0, -2, Rotation::North));
        // I East occupies column 2 only; x = -2 puts it on column 0.
        assert!(board.can_place(PieceKind::I, -2, 0, Rotation::East));
        assert!(!board.can_place(PieceKind::I, -3, 0, Rotation::East));
    }

    #[test]
    fn lock_with_negative_x_keeps_in_range_bits() {
        let mut board = Board::new();
        // I West occupies column 1 of the mask, board column 0 at x = -1.
        board.lock_piece(PieceKind::I, -1, 36, Rotation::West);
        for y in 36..40 {
            assert_eq!(board.row_bits(y), 1);
            assert_eq!(board.get(0, y as i8), Some(Some(PieceKind::I)));
        }
    }

    #[test]
    fn clear_lines_compacts_and_keeps_kinds() {
        let mut board = Board::from_ascii(&["#.........", "##########"]);
        board.set(0, 38, Some(PieceKind::Z));
        let cleared = board.clear_lines();
        assert_eq!(cleared.as_slice(), &[39]);
        assert_eq!(board.row_bits(39), 1);
        assert_eq!(board.get(0, 39), Some(Some(PieceKind::Z)));
        assert_eq!(board.row_bits(38), 0);
    }

    #[test]
    fn write_cells_hides_stale_kinds() {
        let mut board = Board::new();
        board.set(4, 20, Some(PieceKind::L));
        board.set(4, 20, None);
        let mut out = [[None; WIDTH]; HEIGHT];
        board.write_cells(&mut out);
        assert_eq!(out[20][4], None);
    }
}
