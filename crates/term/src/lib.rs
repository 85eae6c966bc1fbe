//! Terminal front-end rendering.
//!
//! Game state is drawn into a [`FrameBuffer`] by [`GameView`] (pure, testable)
//! and the [`TerminalRenderer`] writes only the cells that changed since the
//! previous frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use termino_core as core;
pub use termino_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport, PREVIEW_COUNT};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
