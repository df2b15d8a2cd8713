//! Best score module - persistence through an injected key-value store
//!
//! The core never knows where the best score lives. Front ends hand in anything
//! implementing [`KeyValueStore`]; the value is kept under [`BEST_SCORE_KEY`] as a
//! decimal string.

use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;

use crate::types::BEST_SCORE_KEY;

/// String key-value persistence capability
pub trait KeyValueStore {
    type Error: fmt::Display;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// In-process store backed by a `HashMap`
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    type Error = Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Best score across games, written through to a store
#[derive(Debug, Clone)]
pub struct BestScore<S> {
    store: S,
    value: u32,
}

impl<S: KeyValueStore> BestScore<S> {
    /// Read the stored best score
    ///
    /// A missing, unreadable or unparsable entry starts from 0.
    pub fn load(store: S) -> Self {
        let value = match store.get(BEST_SCORE_KEY) {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("ignoring unparsable best score {:?}", raw);
                0
            }),
            Ok(None) => 0,
            Err(e) => {
                log::warn!("failed to read best score: {}", e);
                0
            }
        };
        log::debug!("loaded best score {}", value);
        Self { store, value }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Record a score; persists and returns true when it beats the best
    ///
    /// The in-memory value is updated even if the write fails.
    pub fn record(&mut self, score: u32) -> Result<bool, S::Error> {
        if score <= self.value {
            return Ok(false);
        }
        self.value = score;
        self.store.set(BEST_SCORE_KEY, &score.to_string())?;
        Ok(true)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
