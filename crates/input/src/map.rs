//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key to an intent.
///
/// ←/→ move, ↓ soft drop, ↑/x rotate CW, c rotate CCW, v rotate 180,
/// space hard drop, z hold, p/Esc pause, r restart.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),

        KeyCode::Up | KeyCode::Char('x') | KeyCode::Char('X') => Some(GameAction::RotateCw),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(GameAction::RotateCcw),
        KeyCode::Char('v') | KeyCode::Char('V') => Some(GameAction::Rotate180),

        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(GameAction::Hold),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => Some(GameAction::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// q or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
