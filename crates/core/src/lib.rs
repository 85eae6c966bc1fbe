//! Core game logic - deterministic guideline rules engine
//!
//! This crate holds every game rule and no I/O. Same seed and same inputs give
//! the same game, which keeps it easy to test and to drive from any front-end.
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven kinds, their 4x4 rotation masks and SRS kick tables
//! - [`board`]: 10x40 bitboard with collision tests and line clearing
//! - [`rng`]: two-bag 7-bag randomizer on a seeded LCG
//! - [`scoring`]: line-clear points, back-to-back, leveling and gravity curve
//! - [`timing`]: gravity accumulator and lock-delay timer
//! - [`game_state`]: the session tying it all together
//! - [`snapshot`]: read-only view for renderers
//!
//! # Rules
//!
//! - **7-bag**: every aligned run of 7 pieces is a permutation of all kinds
//! - **SRS**: five kick candidates per rotation step, first fit wins
//! - **Lock delay**: 500ms grounded; moves and rotations restart it without limit
//! - **Hold**: once per piece, swapped pieces restart at the spawn position
//! - **Scoring**: 100/300/500/800 times level, 1200 for back-to-back 4-line clears
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use termino_core::GameState;
//! use termino_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//! game.advance(Duration::from_millis(16));
//!
//! assert!(game.score() > 0); // hard drop awards points
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod timing;

pub use termino_types as types;

pub use board::Board;
pub use game_state::{GameState, Tetromino};
pub use pieces::{get_shape, masks, try_rotate};
pub use rng::{BagRandomizer, SimpleRng};
pub use scoring::{calculate_drop_score, calculate_score, gravity_speed, ScoreResult};
pub use snapshot::{ActiveSnapshot, GameSnapshot, TimersSnapshot};
pub use timing::{Timing, LOCK_DELAY};
