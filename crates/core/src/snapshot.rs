use arrayvec::ArrayVec;

use crate::obstacles::ObstaclePool;
use crate::session::GameSession;
use crate::types::{Difficulty, MAX_OBSTACLES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObstacleSnapshot {
    pub lane: u8,
    pub row: u16,
}

/// Everything a frame needs, detached from the live state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub obstacles: ArrayVec<ObstacleSnapshot, MAX_OBSTACLES>,
    pub player_lane: u8,
    pub lives: u32,
    pub score: u32,
    pub level: u32,
    pub highscore: u32,
    pub speed_ms: u32,
    pub spawn_chance: u32,
    pub difficulty: Difficulty,
    pub tick: u64,
    pub paused: bool,
}

impl GameSnapshot {
    /// Capture session and pool state. Fields owned by the tick loop
    /// (`highscore`, `tick`, `paused`) start zeroed.
    pub fn capture(session: &GameSession, pool: &ObstaclePool) -> Self {
        let mut snap = Self {
            obstacles: ArrayVec::new(),
            player_lane: 0,
            lives: 0,
            score: 0,
            level: 0,
            highscore: 0,
            speed_ms: 0,
            spawn_chance: 0,
            difficulty: session.difficulty(),
            tick: 0,
            paused: false,
        };
        snap.capture_into(session, pool);
        snap
    }

    /// Refresh an existing snapshot without reallocating.
    pub fn capture_into(&mut self, session: &GameSession, pool: &ObstaclePool) {
        self.obstacles.clear();
        for o in pool.iter_active() {
            self.obstacles.push(ObstacleSnapshot {
                lane: o.lane,
                row: o.row,
            });
        }
        self.player_lane = session.player_lane();
        self.lives = session.lives();
        self.score = session.score();
        self.level = session.level();
        self.speed_ms = session.speed_ms();
        self.spawn_chance = session.spawn_chance();
        self.difficulty = session.difficulty();
    }
}
