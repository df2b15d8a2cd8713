//! TUI 2048 (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_2048::{core,input,term,types}` and adds
//! the pieces only the terminal binary needs: environment configuration and the
//! JSON best-score store.

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;

pub mod config;
pub mod store;

pub use config::AppConfig;
pub use store::{AppStore, JsonFileStore, StoreError};
