use std::sync::{Mutex, PoisonError};

use crate::*;

/// Engine plus its current snapshot behind one lock, for callers on several threads.
///
/// Each command runs to completion under the lock, so transitions stay atomic.
#[derive(Debug)]
pub struct SharedEngine<S, C = SystemClock, R = RandomSampler> {
    inner: Mutex<(GameEngine<S, C, R>, GameState)>,
}

impl<S: HighScoreStore, C: Clock, R: MineSampler> SharedEngine<S, C, R> {
    pub fn new(mut engine: GameEngine<S, C, R>) -> Self {
        let state = engine.new_game();
        Self {
            inner: Mutex::new((engine, state)),
        }
    }

    /// Applies `command` to the current snapshot and returns the new one.
    pub fn dispatch(&self, command: Command) -> GameState {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let (engine, state) = &mut *guard;
        let next = engine.apply(state, command);
        *state = next.clone();
        next
    }

    pub fn snapshot(&self) -> GameState {
        let guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        guard.1.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn concurrent_flags_never_exceed_mine_count() {
        let config = GameConfig::new(9, 9, 10).unwrap();
        let engine = GameEngine::new(
            config,
            MemoryStore::new(),
            SystemClock,
            RandomSampler::from_seed_u64(5),
        );
        let shared = Arc::new(SharedEngine::new(engine));

        let handles: Vec<_> = (0..4u8)
            .map(|t| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || {
                    for col in 0..9 {
                        shared.dispatch(Command::ToggleFlag((t, col)));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let state = shared.snapshot();
        assert_eq!(state.flag_count(), 10);
        assert_eq!(state.board().flag_count(), 10);
    }

    #[test]
    fn dispatch_updates_snapshot() {
        let engine = GameEngine::new(
            GameConfig::default(),
            MemoryStore::new(),
            ManualClock::at_timestamp(0),
            RandomSampler::from_seed_u64(1),
        );
        let shared = SharedEngine::new(engine);

        let state = shared.dispatch(Command::Reveal((4, 4)));

        assert_eq!(shared.snapshot(), state);
        assert!(!state.is_first_click());
        assert_ne!(state.status(), GameStatus::Lost);
    }
}
