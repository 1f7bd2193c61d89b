//! Obstacle pool - fixed-capacity slots with reuse
//!
//! Slots are scanned from index 0 upward; an inactive slot is free for the
//! next spawn. The pool never grows past `MAX_OBSTACLES`.

use crate::rng::SimpleRng;
use crate::session::GameSession;
use crate::types::{LANE_COUNT, MAX_OBSTACLES, OBSTACLE_ROW_LIMIT, SCREEN_ROWS};

/// Obstacle variety. Only one glyph exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ObstacleKind {
    #[default]
    Block,
}

/// A single pool slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Obstacle {
    pub lane: u8,
    pub row: u16,
    pub kind: ObstacleKind,
    pub active: bool,
}

/// Fixed-capacity obstacle arena.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObstaclePool {
    slots: [Obstacle; MAX_OBSTACLES],
}

impl ObstaclePool {
    pub fn new() -> Self {
        Self {
            slots: [Obstacle::default(); MAX_OBSTACLES],
        }
    }

    pub fn slots(&self) -> &[Obstacle; MAX_OBSTACLES] {
        &self.slots
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Obstacle> {
        self.slots.iter().filter(|o| o.active)
    }

    pub fn active_count(&self) -> usize {
        self.iter_active().count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|o| o.active)
    }

    /// Deactivate every slot.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.active = false;
        }
    }

    /// Activate the first free slot at row 0 in `lane`.
    ///
    /// Returns false (and does nothing) when the pool is full.
    pub fn spawn_in_lane(&mut self, lane: u8) -> bool {
        match self.slots.iter().position(|o| !o.active) {
            Some(i) => {
                Self::activate(&mut self.slots[i], lane);
                true
            }
            None => false,
        }
    }

    /// Activate the first free slot in a uniformly random lane.
    pub fn spawn_one(&mut self, rng: &mut SimpleRng) -> bool {
        if self.is_full() {
            return false;
        }
        let lane = rng.next_range(LANE_COUNT as u32) as u8;
        self.spawn_in_lane(lane)
    }

    /// Roll an independent spawn for every free slot.
    ///
    /// Each free slot spawns with probability `spawn_chance`/100. Returns the
    /// number of obstacles spawned.
    pub fn maybe_spawn_all(&mut self, spawn_chance: u32, rng: &mut SimpleRng) -> usize {
        let mut spawned = 0;
        for slot in self.slots.iter_mut() {
            if slot.active {
                continue;
            }
            if rng.roll_percent(spawn_chance) {
                let lane = rng.next_range(LANE_COUNT as u32) as u8;
                Self::activate(slot, lane);
                spawned += 1;
            }
        }
        spawned
    }

    /// Move every active obstacle down one row and resolve arrivals.
    ///
    /// An obstacle reaching the player band is removed: a hit if it shares the
    /// player's lane, otherwise a dodge scored on `session`. Returns whether
    /// any obstacle hit the player this tick.
    pub fn advance_all(&mut self, session: &mut GameSession) -> bool {
        let mut collided = false;
        for slot in self.slots.iter_mut() {
            if !slot.active {
                continue;
            }
            slot.row += 1;

            if slot.row >= SCREEN_ROWS {
                slot.active = false;
                if slot.lane == session.player_lane() {
                    collided = true;
                } else {
                    session.record_dodge();
                }
            }

            // Unreachable while the arrival rule above holds.
            if slot.row > OBSTACLE_ROW_LIMIT {
                slot.active = false;
            }
        }
        collided
    }

    fn activate(slot: &mut Obstacle, lane: u8) {
        *slot = Obstacle {
            lane: lane.min(LANE_COUNT - 1),
            row: 0,
            kind: ObstacleKind::Block,
            active: true,
        };
    }
}

impl Default for ObstaclePool {
    fn default() -> Self {
        Self::new()
    }
}
