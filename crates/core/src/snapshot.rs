use arrayvec::ArrayVec;

use crate::types::{GameStatus, MergeEvent, SpawnedTile, GRID_SIZE, MAX_MERGES_PER_MOVE};

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: [[u32; GRID_SIZE]; GRID_SIZE],
    pub score: u32,
    pub best: u32,
    pub status: GameStatus,
    pub won: bool,
    pub lost: bool,
    /// Win reached and not yet acknowledged by the player.
    pub win_pending: bool,
    pub episode_id: u32,
    pub seed: u64,
    pub move_count: u32,
    pub last_spawn: Option<SpawnedTile>,
    pub last_merges: ArrayVec<MergeEvent, MAX_MERGES_PER_MOVE>,
    pub last_score_delta: u32,
}

impl GameSnapshot {
    /// Moves are accepted in this state.
    pub fn playable(&self) -> bool {
        !self.lost && !self.win_pending
    }

    /// True if the tile at (row, col) was produced by a merge on the last move.
    pub fn merged_at(&self, row: usize, col: usize) -> bool {
        self.last_merges
            .iter()
            .any(|m| m.row as usize == row && m.col as usize == col)
    }

    /// True if the tile at (row, col) was spawned by the last move.
    pub fn spawned_at(&self, row: usize, col: usize) -> bool {
        self.last_spawn
            .is_some_and(|s| s.row as usize == row && s.col as usize == col)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0; GRID_SIZE]; GRID_SIZE],
            score: 0,
            best: 0,
            status: GameStatus::InProgress,
            won: false,
            lost: false,
            win_pending: false,
            episode_id: 0,
            seed: 0,
            move_count: 0,
            last_spawn: None,
            last_merges: ArrayVec::new(),
            last_score_delta: 0,
        }
    }
}
