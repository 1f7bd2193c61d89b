//! Tick engine: one run's per-frame update.
//!
//! Every tick runs, in order: drain input, roll spawns, render, advance and
//! resolve collisions, sleep for the current interval, check for quit. A
//! fresh obstacle is therefore drawn once at row 0 before it first moves.

use std::time::Duration;

use anyhow::Result;

use crate::core::{GameSession, GameSnapshot, ObstaclePool, Screen, SimpleRng};
use crate::ports::{Canvas, InputSource, Pacer};
use crate::types::{Difficulty, InputEvent, PAUSE_POLL_MS};

/// What the run loop should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// Lives reached zero this tick.
    GameOver,
    /// The player asked to return to the menu.
    Quit,
}

/// How a pause ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseExit {
    Resumed,
    Quit,
}

/// Owns all mutable state of a single run.
#[derive(Debug, Clone)]
pub struct TickEngine {
    session: GameSession,
    pool: ObstaclePool,
    rng: SimpleRng,
    highscore: u32,
    tick: u64,
    /// Reused between frames.
    snapshot: GameSnapshot,
}

impl TickEngine {
    pub fn new(difficulty: Difficulty, seed: u32, highscore: u32) -> Self {
        Self::from_session(GameSession::new(difficulty), seed, highscore)
    }

    /// Start from a prepared session, e.g. one with custom pacing.
    pub fn from_session(session: GameSession, seed: u32, highscore: u32) -> Self {
        let pool = ObstaclePool::new();
        let snapshot = GameSnapshot::capture(&session, &pool);
        Self {
            session,
            pool,
            rng: SimpleRng::new(seed),
            highscore,
            tick: 0,
            snapshot,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Scenario setup for tests. Play only mutates state through [`tick`](Self::tick).
    #[doc(hidden)]
    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn pool(&self) -> &ObstaclePool {
        &self.pool
    }

    /// Scenario setup for tests, e.g. placing obstacles in chosen lanes.
    #[doc(hidden)]
    pub fn pool_mut(&mut self) -> &mut ObstaclePool {
        &mut self.pool
    }

    pub fn highscore(&self) -> u32 {
        self.highscore
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Ask the loop to stop at the end of the current tick.
    pub fn request_quit(&mut self) {
        self.session.request_quit();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::capture(&self.session, &self.pool);
        snap.highscore = self.highscore;
        snap.tick = self.tick;
        snap
    }

    /// Run one tick.
    pub fn tick<I, C, P>(
        &mut self,
        input: &mut I,
        canvas: &mut C,
        pacer: &mut P,
    ) -> Result<TickOutcome>
    where
        I: InputSource + ?Sized,
        C: Canvas + ?Sized,
        P: Pacer + ?Sized,
    {
        self.drain_input(input, canvas, pacer)?;
        if self.session.quit_requested() {
            return Ok(TickOutcome::Quit);
        }

        self.pool
            .maybe_spawn_all(self.session.spawn_chance(), &mut self.rng);

        self.refresh_snapshot(false);
        canvas.present(&Screen::Playing(&self.snapshot))?;

        let level_before = self.session.level();
        let collided = self.pool.advance_all(&mut self.session);
        if self.session.level() != level_before {
            tracing::info!(
                level = self.session.level(),
                speed_ms = self.session.speed_ms(),
                spawn_chance = self.session.spawn_chance(),
                "level up"
            );
        }

        if collided {
            canvas.alert()?;
            let lives = self.session.lose_life();
            tracing::debug!(lives, score = self.session.score(), tick = self.tick, "collision");
            if lives == 0 {
                self.tick += 1;
                return Ok(TickOutcome::GameOver);
            }
        }

        pacer.sleep(self.session.pacing().interval());
        self.tick += 1;

        if self.session.quit_requested() {
            return Ok(TickOutcome::Quit);
        }
        Ok(TickOutcome::Continue)
    }

    /// Apply every pending event. Stops early once quit is requested.
    fn drain_input<I, C, P>(&mut self, input: &mut I, canvas: &mut C, pacer: &mut P) -> Result<()>
    where
        I: InputSource + ?Sized,
        C: Canvas + ?Sized,
        P: Pacer + ?Sized,
    {
        while let Some(event) = input.poll_event()? {
            tracing::trace!(event = event.as_str(), tick = self.tick, "input");
            match event {
                InputEvent::MoveLeft | InputEvent::MoveRight => {
                    self.session.apply_movement(event);
                }
                InputEvent::Pause => {
                    if self.wait_while_paused(input, canvas, pacer)? == PauseExit::Quit {
                        self.session.request_quit();
                        return Ok(());
                    }
                }
                InputEvent::Quit => {
                    self.session.request_quit();
                    return Ok(());
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Block until the player resumes or quits.
    ///
    /// Shows the pause screen once, then polls every `PAUSE_POLL_MS`. Nothing
    /// moves and nothing else is drawn while paused.
    pub fn wait_while_paused<I, C, P>(
        &mut self,
        input: &mut I,
        canvas: &mut C,
        pacer: &mut P,
    ) -> Result<PauseExit>
    where
        I: InputSource + ?Sized,
        C: Canvas + ?Sized,
        P: Pacer + ?Sized,
    {
        self.refresh_snapshot(true);
        canvas.present(&Screen::Paused(&self.snapshot))?;
        tracing::debug!(tick = self.tick, "paused");

        loop {
            match input.poll_event()? {
                Some(InputEvent::Pause) => {
                    tracing::debug!(tick = self.tick, "resumed");
                    return Ok(PauseExit::Resumed);
                }
                Some(InputEvent::Quit) => return Ok(PauseExit::Quit),
                Some(_) => {}
                None => pacer.sleep(Duration::from_millis(PAUSE_POLL_MS)),
            }
        }
    }

    fn refresh_snapshot(&mut self, paused: bool) {
        self.snapshot.capture_into(&self.session, &self.pool);
        self.snapshot.highscore = self.highscore;
        self.snapshot.tick = self.tick;
        self.snapshot.paused = paused;
    }
}
