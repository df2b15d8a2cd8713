//! Runtime configuration from environment variables.
//!
//! - `TUI_2048_SEED`: RNG seed for tile spawns (default: derived from the clock)
//! - `TUI_2048_STORE_PATH`: best-score file (default: `$HOME/.tui-2048.json`)
//! - `TUI_2048_STORE_DISABLED`: set to "1" or "true" to keep the best score in memory only
//! - `TUI_2048_SWIPE_MIN`: minimum mouse drag, in cells, that counts as a swipe (default: 3)
//! - `TUI_2048_LOG_PATH`: write logs to this file (otherwise off unless `RUST_LOG` is set)

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::input::DEFAULT_MIN_SWIPE_CELLS;

/// Default store file name, placed in `$HOME` when it is known.
pub const DEFAULT_STORE_FILE: &str = ".tui-2048.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u64,
    pub store_path: Option<PathBuf>,
    pub swipe_min_cells: u16,
    pub log_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable lookup (tests pass a map instead of the process env).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("TUI_2048_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let disabled = lookup("TUI_2048_STORE_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let store_path = if disabled {
            None
        } else {
            Some(
                non_empty(lookup("TUI_2048_STORE_PATH"))
                    .map(PathBuf::from)
                    .unwrap_or_else(|| default_store_path(lookup("HOME"))),
            )
        };

        let swipe_min_cells = lookup("TUI_2048_SWIPE_MIN")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_MIN_SWIPE_CELLS);

        let log_path = non_empty(lookup("TUI_2048_LOG_PATH")).map(PathBuf::from);

        Self {
            seed,
            store_path,
            swipe_min_cells,
            log_path,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn default_store_path(home: Option<String>) -> PathBuf {
    match non_empty(home) {
        Some(home) => PathBuf::from(home).join(DEFAULT_STORE_FILE),
        None => PathBuf::from(DEFAULT_STORE_FILE),
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
