//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::InputEvent`] and provides
//! [`KeyboardSource`], the engine's keyboard [`InputSource`](crate::engine::InputSource).

pub mod map;
pub mod source;

pub use lane_dodger_engine as engine;
pub use lane_dodger_types as types;

pub use map::map_key;
pub use source::KeyboardSource;
