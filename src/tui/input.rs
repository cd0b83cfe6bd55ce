//! Key bindings for the quiz screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use strictly_quiz::GameState;

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a round from the home or game-over screen.
    Start,
    /// Abandon the current round and start a new one.
    Restart,
    /// Append a character to the answer field.
    Type(char),
    /// Delete the last character of the answer field.
    Backspace,
    /// Leave the application.
    Quit,
}

/// Maps a key press to a command for the current screen.
pub fn command_for(game_state: GameState, key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match (game_state, key.code) {
        (_, KeyCode::Esc) | (_, KeyCode::Char('q')) => Some(Command::Quit),
        (GameState::Home | GameState::Ended, KeyCode::Enter) => Some(Command::Start),
        (_, KeyCode::Char('r')) => Some(Command::Restart),
        (GameState::Playing, KeyCode::Char(c)) if c.is_ascii_digit() || c == '-' => {
            Some(Command::Type(c))
        }
        (GameState::Playing, KeyCode::Backspace) => Some(Command::Backspace),
        _ => None,
    }
}
