//! Keyboard input source backed by crossterm's event queue.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::engine::InputSource;
use crate::map::map_key;
use crate::types::InputEvent;

/// Reads key presses from the terminal. Requires raw mode.
#[derive(Debug, Default)]
pub struct KeyboardSource;

impl KeyboardSource {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for KeyboardSource {
    fn poll_event(&mut self) -> Result<Option<InputEvent>> {
        while event::poll(Duration::ZERO)? {
            if let Some(ev) = translate(event::read()?) {
                return Ok(Some(ev));
            }
        }
        Ok(None)
    }

    fn wait_event(&mut self) -> Result<InputEvent> {
        loop {
            if let Some(ev) = translate(event::read()?) {
                return Ok(ev);
            }
        }
    }
}

/// Key presses only; releases, repeats, mouse and resize events are dropped.
fn translate(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(map_key(key)),
        _ => None,
    }
}
