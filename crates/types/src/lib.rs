//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The 2048 grid is a fixed 4x4 matrix:
//!
//! - **Rows**: indexed 0-3, top to bottom
//! - **Columns**: indexed 0-3, left to right
//! - **Cells**: `0` means empty, otherwise a power of two (2, 4, 8, ...)
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_SIZE` | 4 | Cells per row and per column |
//! | `WIN_TILE` | 2048 | First appearance of this tile wins the game |
//! | `INITIAL_TILES` | 2 | Tiles placed by a new game |
//! | `SPAWN_FOUR_PERCENT` | 10 | Chance (in percent) that a spawned tile is a 4 |
//! | `BEST_SCORE_KEY` | `"2048-best-score"` | Key-value store key for the best score |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, GRID_SIZE, WIN_TILE};
//!
//! // Right and Down process each line back to front.
//! assert!(Direction::Right.is_horizontal());
//! assert!(Direction::Right.is_reversed());
//! assert_eq!(Direction::Down.as_str(), "down");
//!
//! let action = GameAction::Move(Direction::Up);
//! assert_ne!(action, GameAction::NewGame);
//!
//! assert_eq!(GRID_SIZE, 4);
//! assert_eq!(WIN_TILE, 2048);
//! ```

/// Cells per row and per column.
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// The first appearance of this tile value wins the game.
pub const WIN_TILE: u32 = 2048;

/// Number of tiles placed when a new game starts.
pub const INITIAL_TILES: usize = 2;

/// Chance, in percent, that a spawned tile is a 4 instead of a 2.
pub const SPAWN_FOUR_PERCENT: u32 = 10;

/// Upper bound on merges a single move can produce (two per line).
pub const MAX_MERGES_PER_MOVE: usize = 2 * GRID_SIZE;

/// Key under which the best score lives in the external key-value store.
pub const BEST_SCORE_KEY: &str = "2048-best-score";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_game_defaults() {
        assert_eq!(GRID_SIZE, 4);
        assert_eq!(CELL_COUNT, 16);
        assert_eq!(WIN_TILE, 2048);
        assert_eq!(INITIAL_TILES, 2);
        assert_eq!(SPAWN_FOUR_PERCENT, 10);
        assert_eq!(MAX_MERGES_PER_MOVE, 8);
        assert_eq!(BEST_SCORE_KEY, "2048-best-score");
    }

    #[test]
    fn test_direction_axes() {
        let horizontal: Vec<_> = Direction::ALL.iter().map(|d| d.is_horizontal()).collect();
        let reversed: Vec<_> = Direction::ALL.iter().map(|d| d.is_reversed()).collect();
        assert_eq!(horizontal, [false, false, true, true]);
        assert_eq!(reversed, [false, true, false, true]);
    }

    #[test]
    fn test_names() {
        assert_eq!(Direction::Left.as_str(), "left");
        assert_eq!(GameStatus::default().as_str(), "in_progress");
        assert_eq!(GameStatus::Lost.as_str(), "lost");
    }
}

/// The four slide directions.
///
/// A direction is the only input the board engine accepts. It carries no
/// information about where it came from (key press, swipe, button).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// True for directions that slide along rows (Left/Right).
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True when the line is processed back to front (Right/Down).
    pub fn is_reversed(&self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }
}

/// Game status
///
/// - **InProgress**: moves may still be made
/// - **Won**: a 2048 tile has appeared (sticky; play may continue)
/// - **Lost**: the grid is full and no adjacent pair matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::InProgress => "in_progress",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

/// Actions a front end can apply to a game session
///
/// Key presses, swipes and buttons all collapse into one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles in a direction
    Move(Direction),
    /// Throw away the current game and start a fresh one
    NewGame,
    /// Dismiss the win message and continue playing past 2048
    KeepPlaying,
}

/// One merge produced by a move.
///
/// `row`/`col` locate the merged tile on the grid after the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergeEvent {
    pub value: u32,
    pub score_delta: u32,
    pub row: u8,
    pub col: u8,
}

/// A tile placed on a previously empty cell by the spawner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnedTile {
    pub row: u8,
    pub col: u8,
    pub value: u32,
}
