//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the 2048 rules and state management.
//! It has **no dependencies** on terminals, files, or input devices, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Slide/merge and terminal detection need no randomness at all
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation moves (fixed arrays and `ArrayVec`)
//!
//! # Module Structure
//!
//! - [`line`]: slide and merge of a single row or column
//! - [`board`]: 4x4 grid, whole-board moves, win/loss queries
//! - [`spawn`]: random 2/4 tile placement from an injected RNG
//! - [`game_state`]: one game as a value (board, score, won/lost)
//! - [`best_score`]: best score over an injected key-value store
//! - [`session`]: game + RNG + best score, driven by [`types::GameAction`]
//! - [`snapshot`]: render-ready copy of a session
//!
//! # Game Rules
//!
//! - **Slide**: tiles move as far as possible toward the chosen edge
//! - **Merge**: two equal neighbours combine once per move (`[2,2,2,2]` → `[4,4,0,0]`)
//! - **Score**: every merge adds the merged value
//! - **Spawn**: after a move that changed the board, a 2 (90%) or 4 (10%) appears
//! - **Win**: the first 2048 tile; play may continue afterwards
//! - **Loss**: full board with no equal horizontal or vertical neighbours
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Board, GameState};
//! use tui_2048_core::types::Direction;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(12345);
//! let state = GameState::start(&mut rng);
//! assert_eq!(state.board().count_tiles(), 2);
//!
//! // Moves never mutate: they return the next state.
//! let (next, outcome) = state.apply_move(Direction::Left, &mut rng);
//! if !outcome.moved {
//!     assert_eq!(next, state);
//! }
//!
//! // Slide/merge alone is pure.
//! let board = Board::from_rows([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
//! let shift = board.shift(Direction::Left);
//! assert_eq!(shift.board.rows()[0], [4, 4, 0, 0]);
//! assert_eq!(shift.score_delta, 8);
//! ```

pub mod best_score;
pub mod board;
pub mod game_state;
pub mod line;
pub mod session;
pub mod snapshot;
pub mod spawn;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use best_score::{BestScore, KeyValueStore, MemoryStore};
pub use board::{apply_move, Board, MoveResult, Shift};
pub use game_state::{GameState, MoveOutcome};
pub use line::{slide_merge, slide_merge_reversed, LineShift};
pub use session::Session;
pub use snapshot::GameSnapshot;
