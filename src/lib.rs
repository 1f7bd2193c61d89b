//! Lane Dodger (workspace facade crate).
//!
//! Exposes `lane_dodger::{core,engine,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use lane_dodger_core as core;
pub use lane_dodger_engine as engine;
pub use lane_dodger_input as input;
pub use lane_dodger_term as term;
pub use lane_dodger_types as types;
