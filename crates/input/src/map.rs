//! Key mapping from terminal events to game commands.

use crate::types::{GameAction, InputCommand, PromptKey};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(GameAction::SoftDrop),

        // Rotation
        KeyCode::Up
        | KeyCode::Char('z')
        | KeyCode::Char('Z')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(GameAction::RotateCw),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Full mapping used during play: quit first, then actions. Unknown keys are `None`.
pub fn map_play_key(key: KeyEvent) -> Option<InputCommand> {
    if should_quit(key) {
        return Some(InputCommand::Quit);
    }
    handle_key_event(key).map(InputCommand::Action)
}

/// Mapping used at the play-again prompt.
///
/// `q` is an ordinary character here so the prompt logic decides what it means;
/// only Esc and Ctrl-C quit outright.
pub fn map_prompt_key(key: KeyEvent) -> PromptKey {
    if key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    {
        return PromptKey::Quit;
    }
    match key.code {
        KeyCode::Char(c) => PromptKey::Char(c),
        _ => PromptKey::Other,
    }
}
