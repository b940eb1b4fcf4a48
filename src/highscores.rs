//! High score persistence
//!
//! The store is a narrow external collaborator: one integer, loaded once at
//! session start and saved once at session end. A missing or corrupt store
//! degrades to 0 and never halts the game.

use std::cell::Cell;
use std::fs;
use std::path::PathBuf;

/// Persistence seam; the simulation core only ever sees the integer
pub trait HighScoreStore {
    /// Best score from previous sessions, 0 when absent
    fn load(&self) -> u64;
    /// Persist the best score; failures are logged, never raised
    fn save(&self, score: u64);
}

/// File-backed store holding a single JSON-serialized integer
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&self) -> u64 {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(score) => {
                    log::info!("loaded high score {}", score);
                    score
                }
                Err(err) => {
                    log::warn!("corrupt high score store {:?}: {}", self.path, err);
                    0
                }
            },
            Err(_) => {
                log::info!("no high score store, starting fresh");
                0
            }
        }
    }

    fn save(&self, score: u64) {
        if let Ok(json) = serde_json::to_string(&score) {
            match fs::write(&self.path, json) {
                Ok(_) => log::info!("high score {} saved", score),
                Err(err) => log::warn!("failed to save high score: {}", err),
            }
        }
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    score: Cell<u64>,
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> u64 {
        self.score.get()
    }

    fn save(&self, score: u64) {
        self.score.set(score);
    }
}
