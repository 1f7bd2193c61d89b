//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Playfield Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LANE_COUNT` | 5 | Number of lanes |
//! | `SCREEN_ROWS` | 14 | Rows above the player band |
//! | `PLAYER_HEIGHT` | 3 | Rows occupied by the player sprite |
//! | `MAX_OBSTACLES` | 12 | Obstacle pool capacity |
//!
//! Lane `i` is centered on column `LANE_START_X + i * LANE_SPACING`.
//!
//! # Progression
//!
//! Every `LEVEL_UP_EVERY` dodges the tick interval shrinks by `SPEED_STEP_MS`
//! (floor `SPEED_FLOOR_MS`) and the spawn chance grows by `SPAWN_STEP`
//! (ceiling `SPAWN_CEILING`).
//!
//! # Examples
//!
//! ```
//! use lane_dodger_types::{Difficulty, InputEvent, LANE_COUNT, SCREEN_ROWS};
//!
//! assert_eq!(Difficulty::Medium.as_str(), "medium");
//!
//! let event = InputEvent::SelectDifficulty(Difficulty::Hard);
//! assert_ne!(event, InputEvent::Quit);
//!
//! assert_eq!(LANE_COUNT, 5);
//! assert_eq!(SCREEN_ROWS, 14);
//! ```

/// Number of lanes the player and obstacles move in.
pub const LANE_COUNT: u8 = 5;

/// Drawing rows above the player band. Row 0 is the top of the playfield.
pub const SCREEN_ROWS: u16 = 14;

/// Obstacle pool capacity.
pub const MAX_OBSTACLES: usize = 12;

/// Height of the player sprite in rows.
pub const PLAYER_HEIGHT: u16 = 3;

/// Width of the player sprite in columns.
pub const PLAYER_WIDTH: u16 = 7;

/// Column of lane 0's center.
pub const LANE_START_X: u16 = 6;

/// Columns between adjacent lane centers.
pub const LANE_SPACING: u16 = 8;

/// Lives at the start of every run.
pub const INITIAL_LIVES: u32 = 3;

/// Dodges per level.
pub const LEVEL_UP_EVERY: u32 = 7;

/// Tick interval reduction applied on level up.
pub const SPEED_STEP_MS: u32 = 10;

/// Shortest tick interval.
pub const SPEED_FLOOR_MS: u32 = 40;

/// Spawn chance increase (percent) applied on level up.
pub const SPAWN_STEP: u32 = 6;

/// Highest spawn chance (percent).
pub const SPAWN_CEILING: u32 = 70;

/// Poll interval while the game is paused.
pub const PAUSE_POLL_MS: u64 = 100;

/// Past this row an active obstacle is dropped regardless of lane.
pub const OBSTACLE_ROW_LIMIT: u16 = SCREEN_ROWS + PLAYER_HEIGHT + 2;

/// Obstacle glyph, centered on its lane column.
pub const OBSTACLE_GLYPH: &str = "[#]";

/// Player sprite, one string per row, each `PLAYER_WIDTH` columns wide.
pub const PLAYER_SPRITE: [&str; PLAYER_HEIGHT as usize] = ["  /-\\  ", " [o=o] ", "  \\_/  "];

/// Named difficulty presets selectable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Discrete input events produced by the keyboard source.
///
/// The meaning of an event depends on the current screen: `Quit` leaves a run
/// for the menu, and leaves the program from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Shift one lane left
    MoveLeft,
    /// Shift one lane right
    MoveRight,
    /// Toggle pause
    Pause,
    /// Quit to menu (in game) or exit (from the menu)
    Quit,
    /// Start a run with the given preset
    SelectDifficulty(Difficulty),
    /// Show the instructions screen
    Instructions,
    /// Restart after game over
    Restart,
    /// Any other key
    Other,
}

impl InputEvent {
    /// Stable camelCase name, logged for every input event the tick applies.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputEvent::MoveLeft => "moveLeft",
            InputEvent::MoveRight => "moveRight",
            InputEvent::Pause => "pause",
            InputEvent::Quit => "quit",
            InputEvent::SelectDifficulty(_) => "selectDifficulty",
            InputEvent::Instructions => "instructions",
            InputEvent::Restart => "restart",
            InputEvent::Other => "other",
        }
    }
}
