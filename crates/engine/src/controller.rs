//! Session controller: menu, runs, game over, and restarts.
//!
//! ```text
//! Menu ──select──▶ Running ──lives 0──▶ GameOver ──restart──▶ Running
//!  │  ▲              │ ▲ pause/resume              │
//!  │  └─────quit─────┘ └──── Paused               └──other key──▶ Menu
//!  └─quit──▶ Exit
//! ```
//!
//! Pausing happens inside a tick (see [`TickEngine::wait_while_paused`]).
//! Restarting is a plain transition back to `Running`; the run loop never
//! recurses.

use anyhow::Result;

use crate::core::{GameOverSummary, Screen, SimpleRng};
use crate::ports::{Canvas, HighscoreStore, InputSource, Pacer};
use crate::tick::{TickEngine, TickOutcome};
use crate::types::{Difficulty, InputEvent};

/// Controller state between transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Instructions,
    Running(Difficulty),
    GameOver(GameOverSummary),
    Exit,
}

pub struct SessionController<I, C, P, S> {
    input: I,
    canvas: C,
    pacer: P,
    store: S,
    seeds: SimpleRng,
    highscore: u32,
    phase: Phase,
}

impl<I, C, P, S> SessionController<I, C, P, S>
where
    I: InputSource,
    C: Canvas,
    P: Pacer,
    S: HighscoreStore,
{
    /// Create a controller at the menu. Loads the highscore once.
    pub fn new(input: I, canvas: C, pacer: P, store: S, seed: u32) -> Self {
        let mut controller = Self {
            input,
            canvas,
            pacer,
            store,
            seeds: SimpleRng::new(seed),
            highscore: 0,
            phase: Phase::Menu,
        };
        controller.highscore = controller.load_highscore();
        controller
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn highscore(&self) -> u32 {
        self.highscore
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run until the player exits from the menu.
    pub fn run(&mut self) -> Result<()> {
        while self.phase != Phase::Exit {
            self.step()?;
        }
        Ok(())
    }

    /// Perform one transition and return the new phase.
    pub fn step(&mut self) -> Result<Phase> {
        self.phase = match self.phase {
            Phase::Menu => self.menu()?,
            Phase::Instructions => self.instructions()?,
            Phase::Running(difficulty) => self.play(difficulty)?,
            Phase::GameOver(summary) => self.game_over(summary)?,
            Phase::Exit => Phase::Exit,
        };
        Ok(self.phase)
    }

    fn menu(&mut self) -> Result<Phase> {
        self.canvas.present(&Screen::Menu {
            highscore: self.highscore,
        })?;
        loop {
            match self.input.wait_event()? {
                InputEvent::SelectDifficulty(difficulty) => return Ok(Phase::Running(difficulty)),
                InputEvent::Instructions => return Ok(Phase::Instructions),
                InputEvent::Quit => return Ok(Phase::Exit),
                _ => {}
            }
        }
    }

    fn instructions(&mut self) -> Result<Phase> {
        self.canvas.present(&Screen::Instructions)?;
        self.input.wait_event()?;
        Ok(Phase::Menu)
    }

    /// Play one run to game over or quit.
    fn play(&mut self, difficulty: Difficulty) -> Result<Phase> {
        self.highscore = self.load_highscore();
        let seed = self.seeds.next_seed();
        tracing::info!(
            difficulty = difficulty.as_str(),
            seed,
            highscore = self.highscore,
            "run start"
        );

        let mut engine = TickEngine::new(difficulty, seed, self.highscore);
        loop {
            match engine.tick(&mut self.input, &mut self.canvas, &mut self.pacer)? {
                TickOutcome::Continue => {}
                TickOutcome::Quit => {
                    tracing::info!(score = engine.session().score(), "run abandoned");
                    return Ok(Phase::Menu);
                }
                TickOutcome::GameOver => break,
            }
        }

        let mut summary = GameOverSummary::new(difficulty, engine.session().score(), self.highscore);
        tracing::info!(
            score = summary.final_score,
            level = engine.session().level(),
            ticks = engine.tick_count(),
            new_record = summary.new_record,
            "game over"
        );
        if summary.new_record {
            match self.store.save(summary.final_score) {
                Ok(()) => summary.saved = true,
                Err(e) => tracing::warn!("highscore not saved: {e}"),
            }
        }
        self.highscore = summary.highscore;
        Ok(Phase::GameOver(summary))
    }

    fn game_over(&mut self, summary: GameOverSummary) -> Result<Phase> {
        // Keys pressed during play must not answer the prompt.
        while self.input.poll_event()?.is_some() {}

        self.canvas.present(&Screen::GameOver(summary))?;
        match self.input.wait_event()? {
            InputEvent::Restart => Ok(Phase::Running(summary.difficulty)),
            _ => Ok(Phase::Menu),
        }
    }

    fn load_highscore(&mut self) -> u32 {
        match self.store.load() {
            Ok(score) => score,
            Err(e) => {
                tracing::warn!("highscore unavailable, starting from 0: {e}");
                0
            }
        }
    }
}
