//! Termino (workspace facade crate).
//!
//! Re-exports the workspace crates as `termino::{core,input,term,types}` and
//! holds the pieces the binary needs around them: argument parsing and the
//! file logger.

pub mod cli;
pub mod logging;

pub use termino_core as core;
pub use termino_input as input;
pub use termino_term as term;
pub use termino_types as types;
