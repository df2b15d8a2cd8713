//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal play.
//! It renders into a simple framebuffer that is flushed to the terminal with
//! crossterm, redrawing only the cells that changed.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw from a [`core::GameSnapshot`] only, never from live game state
//! - Allow precise control over tile size and aspect ratio

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use board_view::{tile_style, AnchorY, BoardView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, for_each_changed_run, TerminalRenderer};
