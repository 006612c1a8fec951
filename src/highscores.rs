//! Best score tracking
//!
//! A single integer persisted under one storage key. Read once at startup,
//! written only when a finished run beats it.

use crate::consts::BEST_SCORE_KEY;
use crate::platform::KeyValueStore;

/// The best score plus the store it persists to
#[derive(Debug, Clone)]
pub struct BestScore<S> {
    store: S,
    best: u32,
}

impl<S: KeyValueStore> BestScore<S> {
    /// Load the stored best score. Missing or unreadable values count as 0.
    pub fn load(store: S) -> Self {
        let best = match store.get(BEST_SCORE_KEY) {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(best) => {
                    log::info!("Loaded best score {}", best);
                    best
                }
                Err(e) => {
                    log::warn!("Ignoring malformed best score {:?}: {}", raw, e);
                    0
                }
            },
            None => {
                log::info!("No best score found, starting fresh");
                0
            }
        };
        Self { store, best }
    }

    pub fn get(&self) -> u32 {
        self.best
    }

    /// Check if a finished run beats the current best
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.best
    }

    /// Record a finished run. Returns true (and persists) if it is a new best.
    ///
    /// A failed write is logged; the in-memory best still updates.
    pub fn submit(&mut self, score: u32) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        match self.store.set(BEST_SCORE_KEY, &score.to_string()) {
            Ok(()) => log::info!("New best score {} saved", score),
            Err(e) => log::warn!("New best score {} not saved: {}", score, e),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{MemoryStore, StorageError};

    #[test]
    fn test_missing_key_is_zero() {
        let best = BestScore::load(MemoryStore::new());
        assert_eq!(best.get(), 0);
    }

    #[test]
    fn test_loads_stored_value() {
        let best = BestScore::load(MemoryStore::with_entry(BEST_SCORE_KEY, "731"));
        assert_eq!(best.get(), 731);
    }

    #[test]
    fn test_malformed_value_is_zero() {
        let best = BestScore::load(MemoryStore::with_entry(BEST_SCORE_KEY, "lots"));
        assert_eq!(best.get(), 0);
    }

    #[test]
    fn test_best_only_goes_up() {
        let mut best = BestScore::load(MemoryStore::new());
        assert!(best.submit(150));
        assert_eq!(best.store.get(BEST_SCORE_KEY).as_deref(), Some("150"));
        assert!(!best.submit(90));
        assert!(!best.submit(150));
        assert_eq!(best.get(), 150);
        assert_eq!(best.store.get(BEST_SCORE_KEY).as_deref(), Some("150"));
    }

    #[test]
    fn test_zero_never_qualifies_initially() {
        let mut best = BestScore::load(MemoryStore::new());
        assert!(!best.submit(0));
        assert_eq!(best.store.get(BEST_SCORE_KEY), None);
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn test_failed_write_keeps_in_memory_best() {
        let mut best = BestScore::load(BrokenStore);
        assert!(best.submit(42));
        assert_eq!(best.get(), 42);
    }
}
