//! Shared data types and rule constants.
//!
//! Everything in this crate is plain data with no dependencies, so it can be
//! used by the engine, the terminal front-end and tests alike.
//!
//! # Board Dimensions
//!
//! The playfield is 10 columns by 40 rows. Row 0 is the top, row 39 the
//! bottom. Only the bottom 20 rows are displayed; the upper 20 rows are still
//! valid play space for spawning and rotation overhang.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_RATE_HZ` | 60 | Fixed step rate of the front-end loop |
//! | `LOCK_DELAY_MS` | 500 | Grounded time before a piece locks |
//! | `GRAVITY_MAX_ROWS_PER_SEC` | 20.0 | Gravity cap from level 20 on |
//!
//! # Examples
//!
//! ```
//! use termino_types::{GameAction, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(GameAction::from_str("rotate180"), Some(GameAction::Rotate180));
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 40));
//! ```

/// Board width in cells.
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells, including the hidden spawn area.
pub const BOARD_HEIGHT: u8 = 40;

/// Number of rows shown by a renderer (the bottom of the board).
pub const VISIBLE_HEIGHT: u8 = 20;

/// First board row that is visible.
pub const VISIBLE_START: u8 = BOARD_HEIGHT - VISIBLE_HEIGHT;

/// Spawn anchor column for the 4x4 mask origin.
pub const SPAWN_X: i8 = BOARD_WIDTH as i8 / 2 - 2;

/// Spawn anchor row for the 4x4 mask origin.
pub const SPAWN_Y: i8 = 20;

/// Number of upcoming pieces kept in the preview queue.
pub const NEXT_QUEUE_LEN: usize = 5;

/// Front-end tick rate.
pub const TICK_RATE_HZ: u32 = 60;

/// Lock delay in milliseconds.
pub const LOCK_DELAY_MS: u64 = 500;

/// Gravity at level 1, in rows per second.
pub const GRAVITY_BASE_ROWS_PER_SEC: f64 = 1.0;

/// Gravity increment per level for levels 1-9.
pub const GRAVITY_LOW_STEP: f64 = 0.5;

/// Gravity at level 10.
pub const GRAVITY_MID_BASE: f64 = 5.0;

/// Gravity increment per level for levels 10-19.
pub const GRAVITY_MID_STEP: f64 = 2.0;

/// Flat gravity from level 20 on.
pub const GRAVITY_MAX_ROWS_PER_SEC: f64 = 20.0;

/// Base points indexed by lines cleared in one lock.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Base points for a 4-line clear directly following another one.
pub const BACK_TO_BACK_TETRIS_SCORE: u32 = 1200;

/// Lines needed per level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per row for a soft drop.
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per row for a hard drop.
pub const HARD_DROP_POINTS: u32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guideline_defaults() {
        assert_eq!(VISIBLE_START, 20);
        assert_eq!(SPAWN_X, 3);
        assert_eq!(LOCK_DELAY_MS, 500);
        assert_eq!(LINE_SCORES, [0, 100, 300, 500, 800]);
        assert_eq!(BACK_TO_BACK_TETRIS_SCORE, 1200);
    }

    #[test]
    fn rotation_index_roundtrips() {
        for i in 0..4 {
            assert_eq!(Rotation::from_index(i).index(), i);
        }
        assert_eq!(Rotation::from_index(5), Rotation::East);
    }

    #[test]
    fn rotation_names_parse_back() {
        for r in [Rotation::North, Rotation::East, Rotation::South, Rotation::West] {
            assert_eq!(Rotation::from_str(r.as_str()), Some(r));
            assert_eq!(Rotation::from_str(&r.index().to_string()), Some(r));
        }
        assert_eq!(Rotation::from_str("W"), Some(Rotation::West));
        assert_eq!(Rotation::from_str("up"), None);
    }

    #[test]
    fn rotate_180_is_two_cw_steps() {
        for r in [Rotation::North, Rotation::East, Rotation::South, Rotation::West] {
            assert_eq!(r.rotate_180(), r.rotate_cw().rotate_cw());
        }
    }

    #[test]
    fn action_names_parse_back() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::HardDrop,
            GameAction::RotateCw,
            GameAction::RotateCcw,
            GameAction::Rotate180,
            GameAction::Hold,
            GameAction::Pause,
            GameAction::Restart,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }
}

/// The seven tetromino kinds.
///
/// Colors follow the guideline palette:
/// I cyan, J blue, L orange, O yellow, S green, T purple, Z red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use termino_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("Z"), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }

    /// Display color as RGB.
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (0x00, 0xFF, 0xFF),
            PieceKind::J => (0x00, 0x00, 0xFF),
            PieceKind::L => (0xFF, 0x80, 0x00),
            PieceKind::O => (0xFF, 0xFF, 0x00),
            PieceKind::S => (0x00, 0xFF, 0x00),
            PieceKind::T => (0x80, 0x00, 0x80),
            PieceKind::Z => (0xFF, 0x00, 0x00),
        }
    }
}

/// Rotation states of the Super Rotation System.
///
/// North is the spawn orientation; the cycle runs North → East → South → West.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise, `(r + 1) mod 4`.
    pub fn rotate_cw(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Rotate counter-clockwise, `(r + 3) mod 4`.
    pub fn rotate_ccw(&self) -> Self {
        Self::from_index(self.index() + 3)
    }

    pub fn rotate_180(&self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Numeric state 0..=3.
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Build from a numeric state, wrapping modulo 4.
    pub fn from_index(i: usize) -> Self {
        match i % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Parse rotation from string
    ///
    /// Accepts full names, single letters or the digits 0-3.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "north" | "n" | "0" => Some(Rotation::North),
            "east" | "e" | "1" => Some(Rotation::East),
            "south" | "s" | "2" => Some(Rotation::South),
            "west" | "w" | "3" => Some(Rotation::West),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// Intents accepted by the engine.
///
/// While paused or after game over only `Pause` and `Restart` are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move one column left
    MoveLeft,
    /// Move one column right
    MoveRight,
    /// Move one row down, 1 point per row
    SoftDrop,
    /// Drop to the floor and lock immediately, 2 points per row
    HardDrop,
    RotateCw,
    RotateCcw,
    /// Two clockwise steps, each kick-tested on its own
    Rotate180,
    /// Store or swap the active piece, once per piece
    Hold,
    /// Toggle pause
    Pause,
    /// Start a fresh session
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use termino_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "rotate180" => Some(GameAction::Rotate180),
            "hold" => Some(GameAction::Hold),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Rotate180 => "rotate180",
            GameAction::Hold => "hold",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }

    /// Whether the intent is still accepted while paused or game over.
    pub fn is_meta(&self) -> bool {
        matches!(self, GameAction::Pause | GameAction::Restart)
    }
}

/// Outcome of a single lock, kept until an observer takes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// Line-clear points awarded (drop points excluded).
    pub score_delta: u32,
    /// Back-to-back flag after this lock.
    pub back_to_back: bool,
    pub level_up: bool,
}

/// A board cell: `None` when empty, otherwise the kind that placed it.
pub type Cell = Option<PieceKind>;
