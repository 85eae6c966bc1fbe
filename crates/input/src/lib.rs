//! Terminal input: key mapping and the hard-drop latch.
//!
//! Keys are turned into [`crate::types::GameAction`] intents; no game rules
//! live here.

pub mod handler;
pub mod map;

pub use termino_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit};
