//! High score persistence
//!
//! The only cross-session state. Read once at startup, written only on
//! new-high-score events; last write wins. Storage failure never touches
//! gameplay: reads default to 0 and writes are best-effort.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub trait ScoreStore {
    /// Best score on record; 0 when nothing is stored or the read fails.
    fn read_high_score(&self) -> u32;
    /// Best-effort write; failures are logged and swallowed.
    fn write_high_score(&mut self, score: u32);
}

/// Volatile store for tests and demo runs.
#[derive(Debug, Default)]
pub struct MemoryScores {
    best: u32,
}

impl ScoreStore for MemoryScores {
    fn read_high_score(&self) -> u32 {
        self.best
    }

    fn write_high_score(&mut self, score: u32) {
        self.best = score;
    }
}

/// Versioned JSON envelope on disk.
#[derive(Debug, Serialize, Deserialize)]
struct ScoreFile {
    version: u32,
    best: u32,
}

const SCORE_FILE_VERSION: u32 = 1;

#[derive(Debug, Clone)]
pub struct FileScores {
    path: PathBuf,
}

impl FileScores {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for FileScores {
    fn read_high_score(&self) -> u32 {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => {
                log::info!("no high score at {}, starting fresh", self.path.display());
                return 0;
            }
        };
        match serde_json::from_str::<ScoreFile>(&raw) {
            Ok(file) if file.version == SCORE_FILE_VERSION => file.best,
            Ok(file) => {
                log::warn!("high score file version {} unsupported", file.version);
                0
            }
            Err(err) => {
                log::warn!("high score file corrupt: {}", err);
                0
            }
        }
    }

    fn write_high_score(&mut self, score: u32) {
        let file = ScoreFile {
            version: SCORE_FILE_VERSION,
            best: score,
        };
        match serde_json::to_string(&file) {
            Ok(json) => {
                if let Err(err) = fs::write(&self.path, json) {
                    log::warn!("failed to write high score: {}", err);
                }
            }
            Err(err) => log::warn!("failed to encode high score: {}", err),
        }
    }
}
