//! Tick engine behavior over whole obstacle lifetimes.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;

use lane_dodger::core::{preset, GameSession, Pacing, Screen};
use lane_dodger::engine::{Canvas, InputSource, Pacer, TickEngine, TickOutcome};
use lane_dodger::types::{Difficulty, InputEvent, INITIAL_LIVES, SCREEN_ROWS};

#[derive(Default)]
struct Keys(VecDeque<InputEvent>);

impl InputSource for Keys {
    fn poll_event(&mut self) -> Result<Option<InputEvent>> {
        Ok(self.0.pop_front())
    }

    fn wait_event(&mut self) -> Result<InputEvent> {
        Ok(self.0.pop_front().unwrap_or(InputEvent::Quit))
    }
}

#[derive(Default)]
struct Counter {
    frames: usize,
    alerts: usize,
}

impl Canvas for Counter {
    fn present(&mut self, _screen: &Screen<'_>) -> Result<()> {
        self.frames += 1;
        Ok(())
    }

    fn alert(&mut self) -> Result<()> {
        self.alerts += 1;
        Ok(())
    }
}

#[derive(Default)]
struct Clock(Vec<Duration>);

impl Pacer for Clock {
    fn sleep(&mut self, interval: Duration) {
        self.0.push(interval);
    }
}

/// Engine whose pool only holds what the test places.
fn no_spawns(difficulty: Difficulty) -> TickEngine {
    let pacing = Pacing {
        spawn_chance: 0,
        ..preset(difficulty)
    };
    TickEngine::from_session(GameSession::with_pacing(difficulty, pacing), 7, 0)
}

fn run_ticks(engine: &mut TickEngine, n: usize, canvas: &mut Counter, clock: &mut Clock) {
    let mut keys = Keys::default();
    for _ in 0..n {
        let outcome = engine.tick(&mut keys, canvas, clock).unwrap();
        assert_eq!(outcome, TickOutcome::Continue);
    }
}

#[test]
fn seventh_dodge_levels_up_and_speeds_the_game() {
    let mut engine = no_spawns(Difficulty::Easy);
    for _ in 0..7 {
        assert!(engine.pool_mut().spawn_in_lane(0));
    }
    let mut canvas = Counter::default();
    let mut clock = Clock::default();

    run_ticks(&mut engine, SCREEN_ROWS as usize, &mut canvas, &mut clock);

    let session = engine.session();
    assert_eq!(session.score(), 7);
    assert_eq!(session.level(), 2);
    assert_eq!(session.speed_ms(), 140);
    assert_eq!(session.spawn_chance(), 6);
    assert_eq!(engine.pool().active_count(), 0);

    // The sleep after the level-up tick already uses the faster pace.
    let (last, earlier) = clock.0.split_last().unwrap();
    assert!(earlier.iter().all(|d| *d == Duration::from_millis(150)));
    assert_eq!(*last, Duration::from_millis(140));
    assert_eq!(canvas.alerts, 0);
}

#[test]
fn two_hits_in_one_tick_cost_a_single_life() {
    let mut engine = no_spawns(Difficulty::Medium);
    engine.pool_mut().spawn_in_lane(2);
    engine.pool_mut().spawn_in_lane(2);
    let mut canvas = Counter::default();
    let mut clock = Clock::default();

    run_ticks(&mut engine, SCREEN_ROWS as usize, &mut canvas, &mut clock);

    assert_eq!(engine.session().lives(), INITIAL_LIVES - 1);
    assert_eq!(engine.session().score(), 0);
    assert_eq!(canvas.alerts, 1);
}

#[test]
fn stepping_aside_turns_a_hit_into_a_dodge() {
    let mut engine = no_spawns(Difficulty::Hard);
    engine.pool_mut().spawn_in_lane(2);
    let mut canvas = Counter::default();
    let mut clock = Clock::default();

    run_ticks(&mut engine, SCREEN_ROWS as usize - 1, &mut canvas, &mut clock);
    let mut keys = Keys(VecDeque::from([InputEvent::MoveRight]));
    let outcome = engine.tick(&mut keys, &mut canvas, &mut clock).unwrap();

    assert_eq!(outcome, TickOutcome::Continue);
    assert_eq!(engine.session().player_lane(), 3);
    assert_eq!(engine.session().lives(), INITIAL_LIVES);
    assert_eq!(engine.session().score(), 1);
}

#[test]
fn three_separate_hits_end_the_run() {
    let mut engine = no_spawns(Difficulty::Easy);
    let mut canvas = Counter::default();
    let mut clock = Clock::default();
    let mut keys = Keys::default();

    let mut outcome = TickOutcome::Continue;
    for hit in 0..INITIAL_LIVES {
        engine.pool_mut().spawn_in_lane(2);
        for _ in 0..SCREEN_ROWS {
            outcome = engine.tick(&mut keys, &mut canvas, &mut clock).unwrap();
        }
        if hit + 1 < INITIAL_LIVES {
            assert_eq!(outcome, TickOutcome::Continue);
        }
    }

    assert_eq!(outcome, TickOutcome::GameOver);
    assert!(engine.session().is_over());
    assert_eq!(canvas.alerts, INITIAL_LIVES as usize);
    assert_eq!(engine.tick_count(), (INITIAL_LIVES * SCREEN_ROWS as u32) as u64);
}

#[test]
fn empty_road_is_survived_indefinitely() {
    let mut engine = no_spawns(Difficulty::Easy);
    let mut canvas = Counter::default();
    let mut clock = Clock::default();

    run_ticks(&mut engine, 500, &mut canvas, &mut clock);

    assert_eq!(engine.session().score(), 0);
    assert_eq!(engine.session().lives(), INITIAL_LIVES);
    assert_eq!(engine.session().level(), 1);
    assert_eq!(canvas.frames, 500);
    assert_eq!(engine.pool().active_count(), 0);
}
