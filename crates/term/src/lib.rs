//! Terminal front end for Lane Dodger.
//!
//! Screens are drawn into a plain framebuffer by [`ScreenView`] (pure, testable)
//! and flushed to the terminal by [`TerminalRenderer`], which only rewrites the
//! cells that changed since the previous frame.

pub mod canvas;
pub mod fb;
pub mod renderer;
pub mod screen_view;

pub use lane_dodger_core as core;
pub use lane_dodger_engine as engine;
pub use lane_dodger_types as types;

pub use canvas::TerminalCanvas;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen_view::{
    AnchorY, ScreenView, Viewport, FIELD_ROWS, PLAY_BLOCK_HEIGHT, PLAY_BLOCK_WIDTH,
};
