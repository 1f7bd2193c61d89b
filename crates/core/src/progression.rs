//! Difficulty presets and the level-up rule.
//!
//! | Preset | Tick interval | Spawn chance |
//! |--------|---------------|--------------|
//! | Easy   | 150ms         | 18%          |
//! | Medium | 120ms         | 26%          |
//! | Hard   | 90ms          | 34%          |
//!
//! Each level up shortens the tick by `SPEED_STEP_MS` (never below
//! `SPEED_FLOOR_MS`) and raises the spawn chance by `SPAWN_STEP` (never above
//! `SPAWN_CEILING`).

use std::time::Duration;

use crate::types::{
    Difficulty, LEVEL_UP_EVERY, SPAWN_CEILING, SPAWN_STEP, SPEED_FLOOR_MS, SPEED_STEP_MS,
};

/// Tick pacing and spawn pressure for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pacing {
    /// Sleep between ticks, in milliseconds.
    pub speed_ms: u32,
    /// Per-free-slot spawn chance each tick, in percent.
    pub spawn_chance: u32,
}

impl Pacing {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.speed_ms as u64)
    }
}

/// Initial pacing for a preset.
pub fn preset(difficulty: Difficulty) -> Pacing {
    match difficulty {
        Difficulty::Easy => Pacing {
            speed_ms: 150,
            spawn_chance: 18,
        },
        Difficulty::Medium => Pacing {
            speed_ms: 120,
            spawn_chance: 26,
        },
        Difficulty::Hard => Pacing {
            speed_ms: 90,
            spawn_chance: 34,
        },
    }
}

/// Whether reaching `score` on a dodge earns a level.
pub fn qualifies_for_level_up(score: u32) -> bool {
    score > 0 && score % LEVEL_UP_EVERY == 0
}

/// Pacing after one level up, clamped to the floor and ceiling.
pub fn escalate(pacing: Pacing) -> Pacing {
    Pacing {
        speed_ms: pacing
            .speed_ms
            .saturating_sub(SPEED_STEP_MS)
            .max(SPEED_FLOOR_MS),
        spawn_chance: (pacing.spawn_chance + SPAWN_STEP).min(SPAWN_CEILING),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_table() {
        assert_eq!(
            preset(Difficulty::Easy),
            Pacing {
                speed_ms: 150,
                spawn_chance: 18
            }
        );
        assert_eq!(
            preset(Difficulty::Medium),
            Pacing {
                speed_ms: 120,
                spawn_chance: 26
            }
        );
        assert_eq!(
            preset(Difficulty::Hard),
            Pacing {
                speed_ms: 90,
                spawn_chance: 34
            }
        );
    }

    #[test]
    fn level_up_only_on_positive_multiples_of_seven() {
        assert!(!qualifies_for_level_up(0));
        assert!(!qualifies_for_level_up(6));
        assert!(qualifies_for_level_up(7));
        assert!(!qualifies_for_level_up(8));
        assert!(qualifies_for_level_up(14));
        assert!(qualifies_for_level_up(70));
    }

    #[test]
    fn escalate_steps_once() {
        let next = escalate(preset(Difficulty::Easy));
        assert_eq!(next.speed_ms, 140);
        assert_eq!(next.spawn_chance, 24);
    }

    #[test]
    fn escalate_clamps_at_floor_and_ceiling() {
        let mut pacing = preset(Difficulty::Hard);
        for _ in 0..50 {
            pacing = escalate(pacing);
            assert!(pacing.speed_ms >= SPEED_FLOOR_MS);
            assert!(pacing.spawn_chance <= SPAWN_CEILING);
        }
        assert_eq!(pacing.speed_ms, SPEED_FLOOR_MS);
        assert_eq!(pacing.spawn_chance, SPAWN_CEILING);
    }

    #[test]
    fn escalate_does_not_overshoot_ceiling_from_odd_start() {
        // 66 + 6 would be 72.
        let pacing = escalate(Pacing {
            speed_ms: 45,
            spawn_chance: 66,
        });
        assert_eq!(pacing.spawn_chance, SPAWN_CEILING);
        assert_eq!(pacing.speed_ms, SPEED_FLOOR_MS);
    }

    #[test]
    fn interval_converts_to_duration() {
        assert_eq!(
            preset(Difficulty::Medium).interval(),
            Duration::from_millis(120)
        );
    }
}
