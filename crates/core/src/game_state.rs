//! Game state module - one game of 2048 as a value
//!
//! [`GameState`] bundles the board, score and status flags. It is `Copy` and never
//! mutated in place by a move: [`GameState::apply_move`] returns the next state
//! together with a [`MoveOutcome`] describing what happened. The RNG used for the
//! post-move spawn is passed in by the caller.

use arrayvec::ArrayVec;
use rand::Rng;

use crate::board::{apply_move, Board};
use crate::types::{Direction, GameStatus, MergeEvent, SpawnedTile, MAX_MERGES_PER_MOVE};

/// Board, score and status of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    board: Board,
    score: u32,
    /// Set the first time a 2048 tile appears; never cleared within a game.
    won: bool,
    lost: bool,
}

/// Everything a front end needs to know about one move
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    pub moved: bool,
    pub score_delta: u32,
    pub merges: ArrayVec<MergeEvent, MAX_MERGES_PER_MOVE>,
    pub spawned: Option<SpawnedTile>,
    /// True only on the move that produced the first 2048 tile.
    pub newly_won: bool,
    pub status: GameStatus,
}

impl GameState {
    /// NewGame: two random tiles, zero score, in progress
    pub fn start<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_board(Board::new_game(rng), 0)
    }

    /// Resume from an arbitrary board and score
    ///
    /// Status flags are derived from the board.
    pub fn from_board(board: Board, score: u32) -> Self {
        Self {
            board,
            score,
            won: board.has_winning_tile(),
            lost: board.is_lost(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn lost(&self) -> bool {
        self.lost
    }

    /// Current status; a 2048 tile reports Won even on a blocked board
    pub fn status(&self) -> GameStatus {
        if self.won {
            GameStatus::Won
        } else if self.lost {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Apply one move: slide, merge, score, spawn, terminal checks
    ///
    /// A move that changes nothing (or any move once the game is lost) returns
    /// `self` unchanged, spawns nothing and reports `moved = false`.
    pub fn apply_move<R: Rng + ?Sized>(
        &self,
        direction: Direction,
        rng: &mut R,
    ) -> (GameState, MoveOutcome) {
        if self.lost {
            return (*self, self.unmoved());
        }

        let result = apply_move(&self.board, self.score, direction);
        if !result.moved {
            return (*self, self.unmoved());
        }

        let mut next = GameState {
            board: result.board,
            score: result.score,
            won: self.won,
            lost: false,
        };

        let newly_won = !next.won && next.board.has_winning_tile();
        next.won |= newly_won;

        let spawned = next.board.spawn_random_tile(rng);
        next.lost = next.board.is_lost();

        if newly_won {
            log::info!("reached {} with score {}", crate::types::WIN_TILE, next.score);
        }
        if next.lost {
            log::info!("no moves left, final score {}", next.score);
        }

        let outcome = MoveOutcome {
            moved: true,
            score_delta: result.score - self.score,
            merges: result.merges,
            spawned,
            newly_won,
            status: next.status(),
        };
        (next, outcome)
    }

    fn unmoved(&self) -> MoveOutcome {
        MoveOutcome {
            status: self.status(),
            ..MoveOutcome::default()
        }
    }
}
