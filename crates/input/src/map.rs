//! Key mapping from browser key names and terminal events to game actions.

use crate::types::{GameAction, GameStatus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a browser `KeyboardEvent.key` identifier to a game action.
pub fn map_key_name(key: &str) -> Option<GameAction> {
    match key {
        // Movement
        "a" | "A" => Some(GameAction::MoveLeft),
        "d" | "D" => Some(GameAction::MoveRight),
        "s" | "S" => Some(GameAction::SoftDrop),
        "w" | "W" => Some(GameAction::HardDrop),

        // Rotation
        "ArrowLeft" => Some(GameAction::RotateLeft),
        "ArrowRight" => Some(GameAction::RotateRight),

        // Actions
        "Shift" => Some(GameAction::Hold),
        "p" | "P" => Some(GameAction::TogglePause),
        "Enter" => Some(GameAction::Start),

        _ => None,
    }
}

/// Map keyboard input to game actions.
///
/// Same layout as [`map_key_name`]; `c` also holds because most terminals
/// never report a bare Shift press.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::SoftDrop),
        KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::HardDrop),

        KeyCode::Left => Some(GameAction::RotateLeft),
        KeyCode::Right => Some(GameAction::RotateRight),

        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => None,
        KeyCode::Char('c') | KeyCode::Char('C') => Some(GameAction::Hold),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::TogglePause),
        KeyCode::Enter => Some(GameAction::Start),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Drop actions the game would ignore in `status`.
pub fn gate(action: GameAction, status: GameStatus) -> Option<GameAction> {
    action.allowed_in(status).then_some(action)
}
