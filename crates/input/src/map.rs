//! Key mapping from terminal events to input events.
//!
//! | Key | Event |
//! |-----|-------|
//! | ← or H or A | Move left |
//! | → or L or D | Move right |
//! | P | Pause / resume |
//! | Q or Esc or Ctrl+C or 5 | Quit |
//! | 1 / 2 / 3 | Easy / Medium / Hard |
//! | 4 | Instructions |
//! | R | Restart |

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{Difficulty, InputEvent};

/// Map a key press to an input event. Unbound keys become `Other`.
pub fn map_key(key: KeyEvent) -> InputEvent {
    if is_interrupt(key) {
        return InputEvent::Quit;
    }
    match key.code {
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => InputEvent::MoveLeft,
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => InputEvent::MoveRight,
        KeyCode::Char('p') | KeyCode::Char('P') => InputEvent::Pause,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('5') | KeyCode::Esc => {
            InputEvent::Quit
        }
        KeyCode::Char('1') => InputEvent::SelectDifficulty(Difficulty::Easy),
        KeyCode::Char('2') => InputEvent::SelectDifficulty(Difficulty::Medium),
        KeyCode::Char('3') => InputEvent::SelectDifficulty(Difficulty::Hard),
        KeyCode::Char('4') => InputEvent::Instructions,
        KeyCode::Char('r') | KeyCode::Char('R') => InputEvent::Restart,
        _ => InputEvent::Other,
    }
}

fn is_interrupt(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
