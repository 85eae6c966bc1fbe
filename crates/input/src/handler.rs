//! Per-tick input gate.
//!
//! Terminals deliver auto-repeat as fresh presses, and a held space bar would
//! otherwise hard-drop several pieces in a row. The handler accepts at most one
//! hard drop per tick; every other intent passes through.

use crate::types::GameAction;

#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    hard_drop_latched: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter a mapped intent. Returns `None` for a repeated hard drop within the same tick.
    pub fn handle_action(&mut self, action: GameAction) -> Option<GameAction> {
        if action == GameAction::HardDrop {
            if self.hard_drop_latched {
                return None;
            }
            self.hard_drop_latched = true;
        }
        Some(action)
    }

    /// Called once per tick; re-arms the hard drop.
    pub fn on_tick(&mut self) {
        self.hard_drop_latched = false;
    }
}
