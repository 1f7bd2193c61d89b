//! Highscore persistence: one decimal integer in a text file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ports::HighscoreStore;

/// Default file name, relative to the working directory.
pub const DEFAULT_HIGHSCORE_FILE: &str = "highscore.txt";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("highscore file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("highscore file {} does not start with a score: {content:?}", .path.display())]
    Parse { path: PathBuf, content: String },
}

/// Highscore kept in a text file.
#[derive(Debug, Clone)]
pub struct FileHighscoreStore {
    path: PathBuf,
}

impl FileHighscoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileHighscoreStore {
    fn default() -> Self {
        Self::new(DEFAULT_HIGHSCORE_FILE)
    }
}

impl HighscoreStore for FileHighscoreStore {
    /// A missing file means no highscore yet.
    fn load(&mut self) -> Result<u32, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        parse_score(&content).ok_or_else(|| StoreError::Parse {
            path: self.path.clone(),
            content: content.chars().take(32).collect(),
        })
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        fs::write(&self.path, format!("{score}\n")).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// First whitespace-separated token as a decimal score.
fn parse_score(content: &str) -> Option<u32> {
    content.split_whitespace().next()?.parse().ok()
}
