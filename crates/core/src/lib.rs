//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the lane dodger rules and per-run state. It has no
//! dependencies on the terminal, input devices, or the filesystem, making it:
//!
//! - **Deterministic**: Same seed produces identical spawn sequences
//! - **Testable**: Every rule is exercised without a terminal
//! - **Bounded**: The obstacle pool is a fixed arena, snapshots never allocate
//!
//! # Module Structure
//!
//! - [`obstacles`]: Fixed-capacity obstacle pool with spawn and advance logic
//! - [`session`]: Player lane, lives, score, level, and pacing for one run
//! - [`progression`]: Difficulty presets and the level-up rule
//! - [`rng`]: Seeded LCG used for spawn rolls and lane picks
//! - [`snapshot`]: Render-ready copy of the run state
//! - [`screen`]: Screen descriptions consumed by the canvas
//!
//! # Rules
//!
//! - Obstacles descend one row per tick and are resolved when they reach the
//!   player band: same lane is a hit, any other lane scores one point.
//! - Every seventh point raises the level, shortens the tick, and raises the
//!   spawn chance.
//!
//! # Example
//!
//! ```
//! use lane_dodger_core::{GameSession, ObstaclePool};
//! use lane_dodger_types::{Difficulty, SCREEN_ROWS};
//!
//! let mut session = GameSession::new(Difficulty::Easy);
//! let mut pool = ObstaclePool::new();
//!
//! // An obstacle two lanes away from the player.
//! pool.spawn_in_lane(0);
//! for _ in 0..SCREEN_ROWS {
//!     assert!(!pool.advance_all(&mut session));
//! }
//! assert_eq!(session.score(), 1);
//! ```

pub mod obstacles;
pub mod progression;
pub mod rng;
pub mod screen;
pub mod session;
pub mod snapshot;

pub use lane_dodger_types as types;

// Re-export commonly used types for convenience
pub use obstacles::{Obstacle, ObstacleKind, ObstaclePool};
pub use progression::{escalate, preset, qualifies_for_level_up, Pacing};
pub use rng::SimpleRng;
pub use screen::{GameOverSummary, Screen};
pub use session::GameSession;
pub use snapshot::{GameSnapshot, ObstacleSnapshot};
