//! Piece catalog - occupancy masks and SRS kick tables
//!
//! Every kind has four 4x4 masks, one per rotation state. A mask is four row
//! bytes (top to bottom); bit `c` of a row is set when column `c` of the 4x4
//! box is occupied.
//!
//! Kick tables are authored y-up, as on https://tetris.wiki/SRS. The board's
//! rows grow downward, so a candidate `(dx, dy)` is tested at `(x + dx, y - dy)`.

use crate::types::{PieceKind, Rotation};

/// Four row masks for one rotation state.
pub type RowMasks = [u8; 4];

/// Offset of a single mino relative to the mask origin.
pub type MinoOffset = (i8, i8);

/// Five ordered (dx, dy) candidates for one rotation transition.
pub type KickCandidates = [(i8, i8); 5];

/// Kick candidates for the 8 single-step transitions.
/// Index is `from * 2` for clockwise and `from * 2 + 1` for counter-clockwise.
pub type KickTable = [KickCandidates; 8];

const I_MASKS: [RowMasks; 4] = [
    [0b0000, 0b1111, 0b0000, 0b0000],
    [0b0100, 0b0100, 0b0100, 0b0100],
    [0b0000, 0b0000, 0b1111, 0b0000],
    [0b0010, 0b0010, 0b0010, 0b0010],
];

const J_MASKS: [RowMasks; 4] = [
    [0b0001, 0b0111, 0b0000, 0b0000],
    [0b0110, 0b0010, 0b0010, 0b0000],
    [0b0000, 0b0111, 0b0100, 0b0000],
    [0b0010, 0b0010, 0b0011, 0b0000],
];

const L_MASKS: [RowMasks; 4] = [
    [0b0100, 0b0111, 0b0000, 0b0000],
    [0b0010, 0b0010, 0b0110, 0b0000],
    [0b0000, 0b0111, 0b0001, 0b0000],
    [0b0011, 0b0010, 0b0010, 0b0000],
];

const O_MASKS: [RowMasks; 4] = [[0b0110, 0b0110, 0b0000, 0b0000]; 4];

const S_MASKS: [RowMasks; 4] = [
    [0b0110, 0b0011, 0b0000, 0b0000],
    [0b0010, 0b0110, 0b0100, 0b0000],
    [0b0000, 0b0110, 0b0011, 0b0000],
    [0b0001, 0b0011, 0b0010, 0b0000],
];

const T_MASKS: [RowMasks; 4] = [
    [0b0010, 0b0111, 0b0000, 0b0000],
    [0b0010, 0b0110, 0b0010, 0b0000],
    [0b0000, 0b0111, 0b0010, 0b0000],
    [0b0010, 0b0011, 0b0010, 0b0000],
];

const Z_MASKS: [RowMasks; 4] = [
    [0b0011, 0b0110, 0b0000, 0b0000],
    [0b0100, 0b0110, 0b0010, 0b0000],
    [0b0000, 0b0011, 0b0110, 0b0000],
    [0b0010, 0b0011, 0b0001, 0b0000],
];

/// Row masks for a kind at a rotation.
pub fn masks(kind: PieceKind, rotation: Rotation) -> RowMasks {
    let table = match kind {
        PieceKind::I => &I_MASKS,
        PieceKind::J => &J_MASKS,
        PieceKind::L => &L_MASKS,
        PieceKind::O => &O_MASKS,
        PieceKind::S => &S_MASKS,
        PieceKind::T => &T_MASKS,
        PieceKind::Z => &Z_MASKS,
    };
    table[rotation.index()]
}

/// Occupied cells as (col, row) offsets from the mask origin, row-major order.
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> [MinoOffset; 4] {
    let rows = masks(kind, rotation);
    let mut out = [(0i8, 0i8); 4];
    let mut n = 0usize;
    for (row, bits) in rows.iter().enumerate() {
        for col in 0..4 {
            if bits & (1 << col) != 0 && n < 4 {
                out[n] = (col as i8, row as i8);
                n += 1;
            }
        }
    }
    out
}

/// J, L, S, T, Z.
const JLSTZ_KICKS: KickTable = [
    // 0->1
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 0->3
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 1->2
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 1->0
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 2->3
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 2->1
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 3->0
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 3->2
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
];

const I_KICKS: KickTable = [
    // 0->1
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // 0->3
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // 1->2
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // 1->0
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // 2->3
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // 2->1
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // 3->0
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // 3->2
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
];

/// The SRS kick table owned by a kind. O owns none.
pub fn kick_table(kind: PieceKind) -> Option<&'static KickTable> {
    match kind {
        PieceKind::O => None,
        PieceKind::I => Some(&I_KICKS),
        PieceKind::J | PieceKind::L | PieceKind::S | PieceKind::T | PieceKind::Z => {
            Some(&JLSTZ_KICKS)
        }
    }
}

/// Candidates for one step from `from`. O only ever tries the zero offset.
pub fn kick_candidates(kind: PieceKind, from: Rotation, clockwise: bool) -> KickCandidates {
    match kick_table(kind) {
        Some(table) => table[from.index() * 2 + usize::from(!clockwise)],
        None => [(0, 0); 5],
    }
}

/// A successful SRS rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationResult {
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    /// Which of the five candidates passed.
    pub kick_index: usize,
}

/// Resolve a single CW/CCW step with wall kicks.
///
/// `can_place(x, y, rotation)` tests a placement against the board. Returns the
/// first candidate that fits, or `None` when all five are blocked.
pub fn try_rotate(
    kind: PieceKind,
    rotation: Rotation,
    x: i8,
    y: i8,
    clockwise: bool,
    can_place: impl Fn(i8, i8, Rotation) -> bool,
) -> Option<RotationResult> {
    let target = if clockwise {
        rotation.rotate_cw()
    } else {
        rotation.rotate_ccw()
    };

    kick_candidates(kind, rotation, clockwise)
        .iter()
        .enumerate()
        .find_map(|(i, &(dx, dy))| {
            let test_x = x + dx;
            let test_y = y - dy;
            can_place(test_x, test_y, target).then_some(RotationResult {
                rotation: target,
                x: test_x,
                y: test_y,
                kick_index: i,
            })
        })
}
