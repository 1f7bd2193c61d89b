//! Property checks for movement, obstacle progression, and pacing.

use proptest::prelude::*;

use lane_dodger::core::{escalate, preset, GameSession, ObstaclePool, SimpleRng};
use lane_dodger::types::{
    Difficulty, InputEvent, LANE_COUNT, LEVEL_UP_EVERY, MAX_OBSTACLES, SCREEN_ROWS,
    SPAWN_CEILING, SPEED_FLOOR_MS,
};

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

fn movement() -> impl Strategy<Value = InputEvent> {
    prop_oneof![Just(InputEvent::MoveLeft), Just(InputEvent::MoveRight)]
}

proptest! {
    #[test]
    fn player_lane_stays_on_the_road(moves in prop::collection::vec(movement(), 0..64)) {
        let mut session = GameSession::new(Difficulty::Medium);
        let mut expected: i32 = (LANE_COUNT / 2) as i32;
        for ev in moves {
            session.apply_movement(ev);
            expected = match ev {
                InputEvent::MoveLeft => (expected - 1).max(0),
                _ => (expected + 1).min(LANE_COUNT as i32 - 1),
            };
            prop_assert!(session.player_lane() < LANE_COUNT);
            prop_assert_eq!(session.player_lane() as i32, expected);
        }
    }

    #[test]
    fn obstacles_fall_one_row_per_advance(
        seed in any::<u32>(),
        chance in 0u32..=100,
        rounds in 1usize..40,
    ) {
        let mut session = GameSession::new(Difficulty::Easy);
        let mut pool = ObstaclePool::new();
        let mut rng = SimpleRng::new(seed);

        for _ in 0..rounds {
            pool.maybe_spawn_all(chance, &mut rng);
            let before = *pool.slots();
            let score_before = session.score();
            let collided = pool.advance_all(&mut session);

            let mut exits_in_lane = 0;
            let mut exits_elsewhere = 0;
            for (old, new) in before.iter().zip(pool.slots().iter()) {
                if !old.active {
                    prop_assert!(!new.active);
                    continue;
                }
                if old.row + 1 >= SCREEN_ROWS {
                    prop_assert!(!new.active);
                    if old.lane == session.player_lane() {
                        exits_in_lane += 1;
                    } else {
                        exits_elsewhere += 1;
                    }
                } else {
                    prop_assert!(new.active);
                    prop_assert_eq!(new.row, old.row + 1);
                    prop_assert_eq!(new.lane, old.lane);
                }
            }
            prop_assert_eq!(collided, exits_in_lane > 0);
            prop_assert_eq!(session.score() - score_before, exits_elsewhere);
            prop_assert!(pool.active_count() <= MAX_OBSTACLES);
            prop_assert!(pool.iter_active().all(|o| o.lane < LANE_COUNT && o.row < SCREEN_ROWS));
        }
    }

    #[test]
    fn level_tracks_every_seventh_dodge(d in difficulty(), dodges in 0u32..200) {
        let mut session = GameSession::new(d);
        let mut level_ups = 0;
        for _ in 0..dodges {
            if session.record_dodge() {
                level_ups += 1;
            }
        }
        prop_assert_eq!(session.score(), dodges);
        prop_assert_eq!(session.level(), 1 + dodges / LEVEL_UP_EVERY);
        prop_assert_eq!(level_ups, dodges / LEVEL_UP_EVERY);
    }

    #[test]
    fn escalation_is_monotone_and_bounded(d in difficulty(), levels in 0usize..64) {
        let mut pacing = preset(d);
        for _ in 0..levels {
            let next = escalate(pacing);
            prop_assert!(next.speed_ms <= pacing.speed_ms);
            prop_assert!(next.spawn_chance >= pacing.spawn_chance);
            prop_assert!(next.speed_ms >= SPEED_FLOOR_MS);
            prop_assert!(next.spawn_chance <= SPAWN_CEILING);
            pacing = next;
        }
    }

    #[test]
    fn next_range_stays_below_bound(seed in any::<u32>(), max in 1u32..1_000) {
        let mut rng = SimpleRng::new(seed);
        for _ in 0..32 {
            prop_assert!(rng.next_range(max) < max);
        }
    }
}
