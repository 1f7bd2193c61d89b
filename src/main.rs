//! Lane Dodger runner (default binary).
//!
//! Wires the crossterm keyboard source and framebuffer canvas into the
//! session controller, then restores the terminal however the session ends.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::filter::EnvFilter;

use lane_dodger::engine::{
    FileHighscoreStore, SessionController, ThreadPacer, DEFAULT_HIGHSCORE_FILE,
};
use lane_dodger::input::KeyboardSource;
use lane_dodger::term::TerminalCanvas;

#[derive(Parser, Debug)]
#[command(name = "lane-dodger", about = "Dodge falling obstacles across five lanes")]
struct Args {
    /// File the best score is read from and written to.
    #[arg(long, default_value = DEFAULT_HIGHSCORE_FILE)]
    highscore_file: PathBuf,

    /// Seed for obstacle placement (defaults to wall-clock time).
    #[arg(long)]
    seed: Option<u32>,

    /// Write diagnostics to this file. Filter with RUST_LOG (default `info`).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let seed = args.seed.unwrap_or_else(clock_seed);
    tracing::info!(seed, highscore_file = %args.highscore_file.display(), "starting");

    let mut canvas = TerminalCanvas::new();
    canvas.enter()?;

    let result = SessionController::new(
        KeyboardSource::new(),
        &mut canvas,
        ThreadPacer,
        FileHighscoreStore::new(args.highscore_file),
        seed,
    )
    .run();

    // Always try to restore terminal state.
    let _ = canvas.exit();
    result?;

    println!("Goodbye!");
    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file: {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
