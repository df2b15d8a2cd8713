//! Spawn module - random tile placement
//!
//! New tiles land on a uniformly chosen empty cell and are a 2 with 90%
//! probability or a 4 with 10% probability. The RNG is always passed in so
//! that games replay exactly from a seed.

use rand::Rng;

use crate::board::Board;
use crate::types::{SpawnedTile, SPAWN_FOUR_PERCENT};

/// Draw the value of a new tile: 2 (90%) or 4 (10%)
pub fn tile_value<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.gen_range(0..100) < SPAWN_FOUR_PERCENT {
        4
    } else {
        2
    }
}

/// Pick the cell and value for the next tile without mutating the board
///
/// Returns `None` when the board has no empty cell.
pub fn choose_tile<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<SpawnedTile> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let (row, col) = empty[rng.gen_range(0..empty.len())];
    let value = tile_value(rng);
    Some(SpawnedTile { row, col, value })
}
