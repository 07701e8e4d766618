use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::StoreError;

/// Durable home of the high score.
pub trait HighScoreStore {
    /// Stored high score, 0 when nothing was saved yet.
    fn load(&self) -> Result<u32, StoreError>;

    fn save(&mut self, score: u32) -> Result<(), StoreError>;
}

/// Keeps the high score for the lifetime of the value only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    high_score: Option<u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: u32) -> Self {
        Self {
            high_score: Some(score),
        }
    }

    /// Last saved value, `None` if never written.
    pub fn high_score(&self) -> Option<u32> {
        self.high_score
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u32, StoreError> {
        Ok(self.high_score.unwrap_or(0))
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        self.high_score = Some(score);
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: u32,
}

/// Stores the high score as a small JSON document on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&self) -> Result<u32, StoreError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(0),
            Err(err) => return Err(err.into()),
        };
        let record: HighScoreRecord = serde_json::from_str(&text)?;
        Ok(record.high_score)
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        let text = serde_json::to_string(&HighScoreRecord { high_score: score })?;
        std::fs::write(&self.path, text)?;
        log::debug!("Saved high score {} to {}", score, self.path.display());
        Ok(())
    }
}
