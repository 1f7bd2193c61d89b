//! TerminalCanvas: the engine's [`Canvas`] backed by a real terminal.

use anyhow::Result;

use crate::core::Screen;
use crate::engine::Canvas;
use crate::fb::FrameBuffer;
use crate::renderer::TerminalRenderer;
use crate::screen_view::{ScreenView, Viewport};

/// Fallback size when the terminal cannot be queried.
const FALLBACK_SIZE: (u16, u16) = (80, 24);

pub struct TerminalCanvas {
    renderer: TerminalRenderer,
    view: ScreenView,
    fb: FrameBuffer,
}

impl Default for TerminalCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalCanvas {
    pub fn new() -> Self {
        let (w, h) = FALLBACK_SIZE;
        Self {
            renderer: TerminalRenderer::new(),
            view: ScreenView::default(),
            fb: FrameBuffer::new(w, h),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()?;
        self.renderer.invalidate();
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Canvas for TerminalCanvas {
    fn present(&mut self, screen: &Screen<'_>) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or(FALLBACK_SIZE);
        self.view.render_into(screen, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }

    fn alert(&mut self) -> Result<()> {
        self.renderer.bell()
    }
}
