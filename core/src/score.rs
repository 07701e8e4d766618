use chrono::{DateTime, Utc};

use crate::*;

/// Awarded for every win.
pub const BASE_SCORE: u32 = 1000;

/// Bonus for an instant win, shrinking by one point per elapsed second.
pub const MAX_TIME_BONUS: u32 = 500;

/// Whole seconds between `start` and `end`, 0 if `end` comes first.
pub fn elapsed_secs(start: DateTime<Utc>, end: DateTime<Utc>) -> u32 {
    let secs = (end - start).num_seconds().max(0);
    u32::try_from(secs).unwrap_or(u32::MAX)
}

/// Score for a win that started at `start` and ended at `end`.
pub fn calculate_score(start: DateTime<Utc>, end: DateTime<Utc>) -> u32 {
    BASE_SCORE + MAX_TIME_BONUS.saturating_sub(elapsed_secs(start, end))
}

/// High score bookkeeping on top of a [`HighScoreStore`].
///
/// Store failures never reach the game: the first failed read or write is logged and the
/// rest of the session keeps the high score in memory only.
#[derive(Debug)]
pub struct HighScores<S> {
    store: S,
    cached: u32,
    degraded: bool,
}

impl<S: HighScoreStore> HighScores<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            cached: 0,
            degraded: false,
        }
    }

    pub fn load(&mut self) -> u32 {
        if self.degraded {
            return self.cached;
        }

        match self.store.load() {
            Ok(score) => {
                self.cached = score;
                score
            }
            Err(err) => {
                log::warn!("Could not load high score, keeping it in memory: {}", err);
                self.degraded = true;
                self.cached
            }
        }
    }

    pub fn save(&mut self, score: u32) {
        self.cached = score;
        if self.degraded {
            return;
        }

        if let Err(err) = self.store.save(score) {
            log::warn!("Could not save high score, keeping it in memory: {}", err);
            self.degraded = true;
        }
    }

    /// Last known high score, without touching the store.
    pub fn cached(&self) -> u32 {
        self.cached
    }

    /// Whether storage failed earlier and the score now lives in memory only.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
