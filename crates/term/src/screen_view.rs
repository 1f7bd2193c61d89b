//! ScreenView: maps a [`Screen`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Play screen layout, relative to the block origin:
//!
//! ```text
//! row 0       header: score, lives, level, highscore
//! row 1       control hints
//! row 2       +-------...-------+
//! rows 3..20  |  obstacles, player  |   (SCREEN_ROWS + PLAYER_HEIGHT rows)
//! row 20      +-------...-------+
//! row 21      pause banner (paused only)
//! ```

use crate::core::{GameOverSummary, GameSnapshot, Screen};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    LANE_COUNT, LANE_SPACING, LANE_START_X, OBSTACLE_GLYPH, PLAYER_HEIGHT, PLAYER_SPRITE,
    SCREEN_ROWS,
};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Rows inside the playfield border.
pub const FIELD_ROWS: u16 = SCREEN_ROWS + PLAYER_HEIGHT;

/// Height of the play screen block, pause banner included.
pub const PLAY_BLOCK_HEIGHT: u16 = FIELD_ROWS + 5;

/// Width reserved for the play screen block when centering.
pub const PLAY_BLOCK_WIDTH: u16 = 56;

const CONTROLS_HINT: &str = "Controls: LEFT/RIGHT arrows  P=Pause  Q=Quit to menu";
const PAUSE_BANNER: &str = "-- PAUSED (press P again to resume) --";

const MENU_LINES: [&str; 10] = [
    "====================================",
    "         LANE DODGER",
    "====================================",
    "",
    "1) Easy   - relaxed spawn, slow",
    "2) Medium - normal",
    "3) Hard   - faster spawn and speed",
    "4) Instructions",
    "5) Quit",
    "",
];

const INSTRUCTIONS_LINES: [&str; 9] = [
    "Instructions:",
    "- Move with LEFT and RIGHT arrow keys.",
    "- Avoid obstacles marked by [#].",
    "- You have 3 lives. Each collision loses 1 life.",
    "- Score increases when you dodge obstacles.",
    "- Levels increase every 7 points; game speeds up.",
    "- Press Q to quit to menu anytime.",
    "",
    "Press any key to return...",
];

const GAME_OVER_PROMPT: &str = "Press 'R' to restart game, or any other key to go to main menu.";

const TEXT: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));
const LABEL: CellStyle = CellStyle::fg(Rgb::new(235, 235, 235)).bold();
const HINT: CellStyle = CellStyle::fg(Rgb::new(150, 150, 160)).dim();
const BORDER: CellStyle = CellStyle::fg(Rgb::new(180, 180, 190));
const OBSTACLE: CellStyle = CellStyle::fg(Rgb::new(230, 80, 80)).bold();
const PLAYER: CellStyle = CellStyle::fg(Rgb::new(80, 220, 220)).bold();
const ACCENT: CellStyle = CellStyle::fg(Rgb::new(240, 220, 80)).bold();

/// Renders every screen of the game.
#[derive(Debug, Clone)]
pub struct ScreenView {
    /// Center column of each lane, relative to the left border.
    lane_x: [u16; LANE_COUNT as usize],
    /// Column of the right border, relative to the left border.
    field_w: u16,
    anchor_y: AnchorY,
}

impl Default for ScreenView {
    fn default() -> Self {
        let mut lane_x = [0u16; LANE_COUNT as usize];
        for (i, x) in lane_x.iter_mut().enumerate() {
            *x = LANE_START_X + i as u16 * LANE_SPACING;
        }
        let field_w = lane_x[LANE_COUNT as usize - 1] + 5;
        Self {
            lane_x,
            field_w,
            anchor_y: AnchorY::Center,
        }
    }
}

impl ScreenView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn lane_x(&self) -> &[u16; LANE_COUNT as usize] {
        &self.lane_x
    }

    /// Column of the right border, relative to the left border.
    pub fn field_width(&self) -> u16 {
        self.field_w
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, screen: &Screen<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        match screen {
            Screen::Playing(snap) => {
                self.draw_play(fb, viewport, snap);
            }
            Screen::Paused(snap) => {
                let (x, y) = self.draw_play(fb, viewport, snap);
                fb.put_str(x, y + FIELD_ROWS + 4, PAUSE_BANNER, ACCENT);
            }
            Screen::Menu { highscore } => {
                let (x, y) = self.origin(viewport, 36, MENU_LINES.len() as u16 + 2);
                draw_lines(fb, x, y, &MENU_LINES);
                let y = y + MENU_LINES.len() as u16;
                fb.put_str(x, y, "Highscore: ", LABEL);
                fb.put_u32(x + 11, y, *highscore, ACCENT);
                fb.put_str(x, y + 1, "Choose (1-5): ", TEXT);
            }
            Screen::Instructions => {
                let (x, y) = self.origin(viewport, 50, INSTRUCTIONS_LINES.len() as u16);
                draw_lines(fb, x, y, &INSTRUCTIONS_LINES);
            }
            Screen::GameOver(summary) => self.draw_game_over(fb, viewport, summary),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, screen: &Screen<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(screen, viewport, &mut fb);
        fb
    }

    /// Top-left corner of a `w` x `h` block.
    fn origin(&self, viewport: Viewport, w: u16, h: u16) -> (u16, u16) {
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        (x, y)
    }

    /// Draw header, border, obstacles, and player. Returns the block origin.
    fn draw_play(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        snap: &GameSnapshot,
    ) -> (u16, u16) {
        let (bx, by) = self.origin(viewport, PLAY_BLOCK_WIDTH, PLAY_BLOCK_HEIGHT);

        self.draw_header(fb, bx, by, snap);
        fb.put_str(bx, by + 1, CONTROLS_HINT, HINT);

        let top = by + 2;
        let bottom = top + FIELD_ROWS + 1;
        self.draw_border_line(fb, bx, top);
        self.draw_border_line(fb, bx, bottom);
        for r in 0..FIELD_ROWS {
            fb.put_char(bx, top + 1 + r, '|', BORDER);
            fb.put_char(bx + self.field_w, top + 1 + r, '|', BORDER);
        }

        for o in snap.obstacles.iter() {
            if o.row < FIELD_ROWS {
                self.draw_centered(fb, bx, top + 1 + o.row, o.lane, OBSTACLE_GLYPH, OBSTACLE);
            }
        }

        for (i, line) in PLAYER_SPRITE.iter().enumerate() {
            let y = top + 1 + SCREEN_ROWS + i as u16;
            self.draw_centered(fb, bx, y, snap.player_lane, line, PLAYER);
        }

        (bx, by)
    }

    fn draw_header(&self, fb: &mut FrameBuffer, x: u16, y: u16, snap: &GameSnapshot) {
        let mut cx = x;
        fb.put_str(cx, y, "Lane Dodger", ACCENT);
        cx += 11;
        for (label, value) in [
            ("  Score: ", snap.score),
            ("  Lives: ", snap.lives),
            ("  Level: ", snap.level),
            ("  Highscore: ", snap.highscore),
        ] {
            fb.put_str(cx, y, label, LABEL);
            cx += label.len() as u16;
            cx += fb.put_u32(cx, y, value, TEXT);
        }
    }

    fn draw_border_line(&self, fb: &mut FrameBuffer, x: u16, y: u16) {
        fb.put_char(x, y, '+', BORDER);
        for dx in 1..self.field_w {
            fb.put_char(x + dx, y, '-', BORDER);
        }
        fb.put_char(x + self.field_w, y, '+', BORDER);
    }

    /// Draw `glyph` centered on `lane`, clipped to the inside of the border.
    fn draw_centered(
        &self,
        fb: &mut FrameBuffer,
        bx: u16,
        y: u16,
        lane: u8,
        glyph: &str,
        style: CellStyle,
    ) {
        let Some(&center) = self.lane_x.get(lane as usize) else {
            return;
        };
        let half = glyph.chars().count() as i32 / 2;
        let start = center as i32 - half;
        for (p, ch) in glyph.chars().enumerate() {
            let col = start + p as i32;
            if col > 0 && col < self.field_w as i32 && ch != ' ' {
                fb.put_char(bx + col as u16, y, ch, style);
            }
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, viewport: Viewport, summary: &GameOverSummary) {
        let (x, y) = self.origin(viewport, GAME_OVER_PROMPT.len() as u16, 6);
        fb.put_str(x, y, "===== GAME OVER =====", ACCENT);

        fb.put_str(x, y + 2, "Final Score: ", LABEL);
        fb.put_u32(x + 13, y + 2, summary.final_score, TEXT);

        if summary.new_record {
            fb.put_str(x, y + 3, "New Highscore! ", ACCENT);
            let w = fb.put_u32(x + 15, y + 3, summary.final_score, ACCENT);
            if summary.saved {
                fb.put_str(x + 15 + w, y + 3, " (saved)", TEXT);
            }
        } else {
            fb.put_str(x, y + 3, "Highscore: ", LABEL);
            fb.put_u32(x + 11, y + 3, summary.highscore, TEXT);
        }

        fb.put_str(x, y + 5, GAME_OVER_PROMPT, TEXT);
    }
}

fn draw_lines(fb: &mut FrameBuffer, x: u16, y: u16, lines: &[&str]) {
    for (i, line) in lines.iter().enumerate() {
        fb.put_str(x, y + i as u16, line, TEXT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameSession, ObstaclePool};
    use crate::types::Difficulty;

    #[test]
    fn lane_columns_follow_start_and_spacing() {
        let view = ScreenView::default();
        assert_eq!(view.lane_x(), &[6, 14, 22, 30, 38]);
        assert_eq!(view.field_width(), 43);
    }

    #[test]
    fn glyph_is_clipped_inside_border() {
        let view = ScreenView::default();
        let mut fb = FrameBuffer::new(60, 1);
        // Lane 0 center is 6; a 21-wide glyph would start at column -4.
        view.draw_centered(&mut fb, 0, 0, 0, "abcdefghijklmnopqrstu", OBSTACLE);
        assert_eq!(fb.get(0, 0).unwrap().ch, ' ');
        assert_eq!(fb.get(1, 0).unwrap().ch, 'f');
    }

    #[test]
    fn out_of_range_lane_draws_nothing() {
        let view = ScreenView::default();
        let mut fb = FrameBuffer::new(60, 1);
        view.draw_centered(&mut fb, 0, 0, LANE_COUNT, OBSTACLE_GLYPH, OBSTACLE);
        assert_eq!(fb.row_text(0), "");
    }

    #[test]
    fn playing_screen_draws_field_border() {
        let session = GameSession::new(Difficulty::Medium);
        let snap = GameSnapshot::capture(&session, &ObstaclePool::new());
        let view = ScreenView::default().with_anchor_y(AnchorY::Top);
        let vp = Viewport::new(PLAY_BLOCK_WIDTH, PLAY_BLOCK_HEIGHT);
        let fb = view.render(&Screen::Playing(&snap), vp);
        assert_eq!(fb.get(0, 2).unwrap().ch, '+');
        assert_eq!(fb.get(view.field_width(), FIELD_ROWS + 3).unwrap().ch, '+');
        assert_eq!(fb.row_text(FIELD_ROWS + 4), "");
    }

    #[test]
    fn unsaved_record_omits_saved_marker() {
        let summary = GameOverSummary::new(Difficulty::Easy, 12, 4);
        let view = ScreenView::default().with_anchor_y(AnchorY::Top);
        let text = view.render(&Screen::GameOver(summary), Viewport::new(80, 8)).to_text();
        assert!(text.contains("New Highscore! 12\n"));
        assert!(!text.contains("(saved)"));
    }

    #[test]
    fn pause_banner_sits_below_the_field() {
        let session = GameSession::new(Difficulty::Easy);
        let snap = GameSnapshot::capture(&session, &ObstaclePool::new());
        let view = ScreenView::default().with_anchor_y(AnchorY::Top);
        let vp = Viewport::new(PLAY_BLOCK_WIDTH, PLAY_BLOCK_HEIGHT);
        let fb = view.render(&Screen::Paused(&snap), vp);
        assert!(fb.row_text(FIELD_ROWS + 4).starts_with("-- PAUSED"));
    }
}
