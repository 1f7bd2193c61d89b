//! Boundaries between the engine and the outside world.
//!
//! The engine never touches the terminal, the keyboard, the clock, or the
//! filesystem directly; the runner plugs implementations of these traits in.

use std::time::Duration;

use anyhow::Result;

use crate::core::Screen;
use crate::highscore::StoreError;
use crate::types::InputEvent;

/// Discrete input events.
pub trait InputSource {
    /// Next pending event, without blocking.
    fn poll_event(&mut self) -> Result<Option<InputEvent>>;

    /// Block until an event arrives.
    fn wait_event(&mut self) -> Result<InputEvent>;
}

/// Fixed-grid text output.
pub trait Canvas {
    /// Clear and paint a whole screen.
    fn present(&mut self, screen: &Screen<'_>) -> Result<()>;

    /// Audible or visual alert on collision.
    fn alert(&mut self) -> Result<()>;
}

/// The tick loop's only scheduling primitive.
pub trait Pacer {
    fn sleep(&mut self, interval: Duration);
}

/// Sleeps the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn sleep(&mut self, interval: Duration) {
        std::thread::sleep(interval);
    }
}

/// Persistent single-value highscore.
pub trait HighscoreStore {
    fn load(&mut self) -> Result<u32, StoreError>;
    fn save(&mut self, score: u32) -> Result<(), StoreError>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn poll_event(&mut self) -> Result<Option<InputEvent>> {
        (**self).poll_event()
    }

    fn wait_event(&mut self) -> Result<InputEvent> {
        (**self).wait_event()
    }
}

impl<T: Canvas + ?Sized> Canvas for &mut T {
    fn present(&mut self, screen: &Screen<'_>) -> Result<()> {
        (**self).present(screen)
    }

    fn alert(&mut self) -> Result<()> {
        (**self).alert()
    }
}

impl<T: Pacer + ?Sized> Pacer for &mut T {
    fn sleep(&mut self, interval: Duration) {
        (**self).sleep(interval)
    }
}

impl<T: HighscoreStore + ?Sized> HighscoreStore for &mut T {
    fn load(&mut self) -> Result<u32, StoreError> {
        (**self).load()
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        (**self).save(score)
    }
}
