//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any game rules. It maps
//! `crossterm` key events and mouse drags into [`crate::types::GameAction`]s, so
//! the core only ever sees a [`crate::types::Direction`] and never learns whether
//! it came from a key press or a swipe.

pub mod map;
pub mod swipe;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
pub use swipe::{direction_from_delta, SwipeTracker, DEFAULT_MIN_SWIPE_CELLS};
