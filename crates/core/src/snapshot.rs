use std::time::Duration;

use crate::game_state::Tetromino;
use crate::types::{
    Cell, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, NEXT_QUEUE_LEN, VISIBLE_START,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimersSnapshot {
    pub lock_timer: Duration,
    pub gravity_accumulator: f64,
    pub lock_resets: u32,
}

/// Read-only copy of everything a renderer or observer needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    /// Whole board, row 0 at the top. Renderers usually show `visible_rows()`.
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub hold: Option<PieceKind>,
    pub hold_used: bool,
    pub next_queue: [PieceKind; NEXT_QUEUE_LEN],
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub back_to_back: bool,
    pub paused: bool,
    pub game_over: bool,
    pub episode_id: u32,
    pub seed: u32,
    pub timers: TimersSnapshot,
}

impl GameSnapshot {
    /// The displayed bottom rows, top first.
    pub fn visible_rows(&self) -> &[[Cell; BOARD_WIDTH as usize]] {
        &self.board[VISIBLE_START as usize..]
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            hold: None,
            hold_used: false,
            next_queue: [PieceKind::I; NEXT_QUEUE_LEN],
            score: 0,
            level: 1,
            lines: 0,
            back_to_back: false,
            paused: false,
            game_over: false,
            episode_id: 0,
            seed: 0,
            timers: TimersSnapshot {
                lock_timer: Duration::ZERO,
                gravity_accumulator: 0.0,
                lock_resets: 0,
            },
        }
    }
}
