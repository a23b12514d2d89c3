//! High score persistence
//!
//! A single integer in a plain text file, overwritten on every save. A missing
//! or malformed file reads as 0.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default file name, relative to the working directory
pub const HIGH_SCORE_FILE: &str = "highscore.txt";

/// Where the best score lives between sessions
pub trait HighScoreStore {
    /// Stored score, or 0 if none
    fn load(&mut self) -> u32;
    /// Overwrite the stored score
    fn save(&mut self, score: u32);
}

/// Parse stored text; anything but a plain non-negative integer is 0
pub fn parse_high_score(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}

/// Plain text file store
#[derive(Debug, Clone)]
pub struct FileHighScore {
    path: PathBuf,
}

impl FileHighScore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileHighScore {
    fn default() -> Self {
        Self::new(HIGH_SCORE_FILE)
    }
}

impl HighScoreStore for FileHighScore {
    fn load(&mut self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(text) => {
                let score = parse_high_score(&text);
                log::info!("Loaded high score {}", score);
                score
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No high score found, starting fresh");
                0
            }
            Err(e) => {
                log::warn!("Could not read {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn save(&mut self, score: u32) {
        match fs::write(&self.path, score.to_string()) {
            Ok(()) => log::debug!("High score {} saved", score),
            Err(e) => log::warn!("Could not write {}: {}", self.path.display(), e),
        }
    }
}

/// In-memory store (tests, demos)
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScore {
    pub value: Option<u32>,
    /// Every value passed to `save`, in order
    pub writes: Vec<u32>,
}

impl MemoryHighScore {
    pub fn with_score(score: u32) -> Self {
        Self {
            value: Some(score),
            writes: Vec::new(),
        }
    }
}

impl HighScoreStore for MemoryHighScore {
    fn load(&mut self) -> u32 {
        self.value.unwrap_or(0)
    }

    fn save(&mut self, score: u32) {
        self.value = Some(score);
        self.writes.push(score);
    }
}
