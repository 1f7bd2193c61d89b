//! Screen descriptions handed to the canvas.

use crate::snapshot::GameSnapshot;
use crate::types::Difficulty;

/// Result of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOverSummary {
    pub difficulty: Difficulty,
    pub final_score: u32,
    /// Highscore after this run was recorded.
    pub highscore: u32,
    pub new_record: bool,
    /// Whether the new record reached the highscore store.
    pub saved: bool,
}

impl GameOverSummary {
    pub fn new(difficulty: Difficulty, final_score: u32, previous_highscore: u32) -> Self {
        let new_record = final_score > previous_highscore;
        Self {
            difficulty,
            final_score,
            highscore: final_score.max(previous_highscore),
            new_record,
            saved: false,
        }
    }
}

/// What the canvas should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen<'a> {
    Menu { highscore: u32 },
    Instructions,
    Playing(&'a GameSnapshot),
    /// Last frame with the pause banner.
    Paused(&'a GameSnapshot),
    GameOver(GameOverSummary),
}
