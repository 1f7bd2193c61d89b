//! Game engine: the per-tick update and the session state machine.
//!
//! Everything outside the rules (terminal, keyboard, clock, highscore file) is
//! reached through the traits in [`ports`], so the whole game can be driven by
//! scripted input in tests.

pub mod controller;
pub mod highscore;
pub mod ports;
pub mod tick;

pub use lane_dodger_core as core;
pub use lane_dodger_types as types;

pub use controller::{Phase, SessionController};
pub use highscore::{FileHighscoreStore, StoreError, DEFAULT_HIGHSCORE_FILE};
pub use ports::{Canvas, HighscoreStore, InputSource, Pacer, ThreadPacer};
pub use tick::{PauseExit, TickEngine, TickOutcome};
