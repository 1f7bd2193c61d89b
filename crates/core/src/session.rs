//! Game session - per-run player and scoring state
//!
//! A session is created fresh for every run (restarts included) from the
//! chosen difficulty preset. Only the tick engine and the progression rule
//! mutate it.

use crate::progression::{self, Pacing};
use crate::types::{Difficulty, InputEvent, INITIAL_LIVES, LANE_COUNT};

/// Complete per-run state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSession {
    difficulty: Difficulty,
    lives: u32,
    score: u32,
    level: u32,
    pacing: Pacing,
    player_lane: u8,
    quit_requested: bool,
}

impl GameSession {
    /// Start a run: center lane, full lives, level 1, preset pacing.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            lives: INITIAL_LIVES,
            score: 0,
            level: 1,
            pacing: progression::preset(difficulty),
            player_lane: LANE_COUNT / 2,
            quit_requested: false,
        }
    }

    /// Start a run with pacing other than the preset's.
    pub fn with_pacing(difficulty: Difficulty, pacing: Pacing) -> Self {
        Self {
            pacing,
            ..Self::new(difficulty)
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    pub fn speed_ms(&self) -> u32 {
        self.pacing.speed_ms
    }

    pub fn spawn_chance(&self) -> u32 {
        self.pacing.spawn_chance
    }

    pub fn player_lane(&self) -> u8 {
        self.player_lane
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn is_over(&self) -> bool {
        self.lives == 0
    }

    /// Shift one lane left; no-op at lane 0.
    pub fn move_left(&mut self) {
        self.player_lane = self.player_lane.saturating_sub(1);
    }

    /// Shift one lane right; no-op at the last lane.
    pub fn move_right(&mut self) {
        if self.player_lane + 1 < LANE_COUNT {
            self.player_lane += 1;
        }
    }

    /// Apply a movement event. Returns whether the event was a movement.
    pub fn apply_movement(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::MoveLeft => {
                self.move_left();
                true
            }
            InputEvent::MoveRight => {
                self.move_right();
                true
            }
            _ => false,
        }
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    /// Score a safe pass and apply the level-up rule.
    ///
    /// Returns true when this dodge raised the level.
    pub fn record_dodge(&mut self) -> bool {
        self.score += 1;
        if progression::qualifies_for_level_up(self.score) {
            self.level += 1;
            self.pacing = progression::escalate(self.pacing);
            return true;
        }
        false
    }

    /// Lose one life. Returns the lives left.
    pub fn lose_life(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }

    #[cfg(test)]
    pub(crate) fn set_lane(&mut self, lane: u8) {
        self.player_lane = lane.min(LANE_COUNT - 1);
    }
}
