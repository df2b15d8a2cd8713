//! Board module - manages the 4x4 grid
//!
//! The board is a fixed 4x4 grid of tile values where `0` means empty.
//! Coordinates: (row, col) where row ranges 0..3 (top to bottom), col ranges 0..3
//! (left to right).
//!
//! Every operation here is pure with respect to randomness: sliding, merging and
//! the terminal queries never touch an RNG. Tile spawning takes the RNG as an
//! argument (see [`crate::spawn`]).

use std::fmt;

use arrayvec::ArrayVec;
use rand::Rng;

use crate::line::{slide_merge, slide_merge_reversed, Line};
use crate::spawn;
use crate::types::{
    Direction, GameStatus, MergeEvent, SpawnedTile, CELL_COUNT, GRID_SIZE, INITIAL_TILES,
    MAX_MERGES_PER_MOVE, WIN_TILE,
};

/// The game board - 4 rows x 4 columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Row-major tile values, `cells[row][col]`
    cells: [[u32; GRID_SIZE]; GRID_SIZE],
}

/// Result of sliding a whole board in one direction (no spawn)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shift {
    pub board: Board,
    /// Logical OR of every line's changed flag
    pub moved: bool,
    pub score_delta: u32,
    pub merges: ArrayVec<MergeEvent, MAX_MERGES_PER_MOVE>,
}

/// Result of the Move operation: new board and score plus merge records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub board: Board,
    pub score: u32,
    pub moved: bool,
    pub merges: ArrayVec<MergeEvent, MAX_MERGES_PER_MOVE>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Build a board from explicit rows (top row first)
    pub fn from_rows(cells: [[u32; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    /// Clear all tiles and place the opening tiles
    pub fn new_game<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut board = Self::new();
        for _ in 0..INITIAL_TILES {
            board.spawn_random_tile(rng);
        }
        board
    }

    /// Borrow the rows
    pub fn rows(&self) -> &[[u32; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Get the tile at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Set the tile at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Extract row `index` (horizontal) or column `index` (vertical), in grid order
    pub fn line(&self, index: usize, horizontal: bool) -> Line {
        if horizontal {
            self.cells[index]
        } else {
            [
                self.cells[0][index],
                self.cells[1][index],
                self.cells[2][index],
                self.cells[3][index],
            ]
        }
    }

    fn set_line(&mut self, index: usize, horizontal: bool, line: Line) {
        if horizontal {
            self.cells[index] = line;
        } else {
            for (row, value) in line.into_iter().enumerate() {
                self.cells[row][index] = value;
            }
        }
    }

    /// Positions of all empty cells in row-major order
    pub fn empty_cells(&self) -> ArrayVec<(u8, u8), CELL_COUNT> {
        let mut empty = ArrayVec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                if value == 0 {
                    empty.push((row as u8, col as u8));
                }
            }
        }
        empty
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == 0).count()
    }

    pub fn count_tiles(&self) -> usize {
        CELL_COUNT - self.count_empty()
    }

    pub fn is_full(&self) -> bool {
        self.count_empty() == 0
    }

    /// Highest tile value on the board (0 for an empty board)
    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// HasWinningTile: any cell holds 2048
    pub fn has_winning_tile(&self) -> bool {
        self.cells.iter().flatten().any(|&v| v == WIN_TILE)
    }

    /// True if some cell equals its right or bottom neighbour
    pub fn has_adjacent_match(&self) -> bool {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let value = self.cells[row][col];
                if col + 1 < GRID_SIZE && self.cells[row][col + 1] == value {
                    return true;
                }
                if row + 1 < GRID_SIZE && self.cells[row + 1][col] == value {
                    return true;
                }
            }
        }
        false
    }

    /// Full grid with no adjacent pair left to merge
    pub fn is_lost(&self) -> bool {
        self.is_full() && !self.has_adjacent_match()
    }

    /// IsTerminal: `Lost` when no legal move remains, otherwise `InProgress`
    pub fn terminal_status(&self) -> GameStatus {
        if self.is_lost() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Slide and merge every line toward `direction`
    ///
    /// No randomness is involved; the caller decides whether to spawn a tile
    /// based on `moved`.
    pub fn shift(&self, direction: Direction) -> Shift {
        let horizontal = direction.is_horizontal();
        let mut board = *self;
        let mut moved = false;
        let mut score_delta = 0;
        let mut merges = ArrayVec::new();

        for index in 0..GRID_SIZE {
            let line = self.line(index, horizontal);
            let shifted = if direction.is_reversed() {
                slide_merge_reversed(line)
            } else {
                slide_merge(line)
            };

            moved |= shifted.changed;
            score_delta += shifted.score_delta;
            for &(pos, value) in shifted.merges.iter() {
                let (row, col) = if horizontal { (index, pos) } else { (pos, index) };
                merges.push(MergeEvent {
                    value,
                    score_delta: value,
                    row: row as u8,
                    col: col as u8,
                });
            }
            board.set_line(index, horizontal, shifted.line);
        }

        Shift {
            board,
            moved,
            score_delta,
            merges,
        }
    }

    /// True if sliding in `direction` would change the board
    pub fn can_move(&self, direction: Direction) -> bool {
        self.shift(direction).moved
    }

    /// SpawnRandomTile: place a 2 (90%) or 4 (10%) on a uniformly chosen empty cell
    ///
    /// Returns `None` and leaves the board untouched when it is full.
    pub fn spawn_random_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<SpawnedTile> {
        let tile = spawn::choose_tile(self, rng)?;
        self.cells[tile.row as usize][tile.col as usize] = tile.value;
        Some(tile)
    }
}

/// Move: slide and merge `board` toward `direction`, adding merge points to `score`
///
/// When nothing moves the board and score come back unchanged and `merges` is empty.
pub fn apply_move(board: &Board, score: u32, direction: Direction) -> MoveResult {
    let shift = board.shift(direction);
    if !shift.moved {
        return MoveResult {
            board: *board,
            score,
            moved: false,
            merges: ArrayVec::new(),
        };
    }

    MoveResult {
        board: shift.board,
        score: score + shift.score_delta,
        moved: true,
        merges: shift.merges,
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, &value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                if value == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", value)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn checkerboard() -> Board {
        Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
    }

    #[test]
    fn test_board_get_set_bounds() {
        let mut board = Board::new();
        assert!(board.set(3, 3, 8));
        assert_eq!(board.get(3, 3), Some(8));
        assert!(!board.set(4, 0, 2));
        assert_eq!(board.get(0, 4), None);
    }

    #[test]
    fn test_line_extraction() {
        let board = Board::from_rows([
            [1, 2, 3, 4],
            [5, 6, 7, 8],
            [9, 10, 11, 12],
            [13, 14, 15, 16],
        ]);
        assert_eq!(board.line(1, true), [5, 6, 7, 8]);
        assert_eq!(board.line(2, false), [3, 7, 11, 15]);
    }

    #[test]
    fn test_shift_left_and_right() {
        let board = Board::from_rows([[2, 2, 2, 2], [0, 2, 0, 2], [2, 0, 0, 4], [0, 0, 0, 0]]);

        let left = board.shift(Direction::Left);
        assert!(left.moved);
        assert_eq!(left.board.rows()[0], [4, 4, 0, 0]);
        assert_eq!(left.board.rows()[1], [4, 0, 0, 0]);
        assert_eq!(left.board.rows()[2], [2, 4, 0, 0]);
        assert_eq!(left.score_delta, 12);

        let right = board.shift(Direction::Right);
        assert_eq!(right.board.rows()[0], [0, 0, 4, 4]);
        assert_eq!(right.board.rows()[2], [0, 0, 2, 4]);
    }

    #[test]
    fn test_shift_up_and_down() {
        let board = Board::from_rows([[2, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 0], [0, 0, 0, 0]]);

        let up = board.shift(Direction::Up);
        assert_eq!(up.board.line(0, false), [4, 4, 0, 0]);
        assert_eq!(up.score_delta, 4);
        assert_eq!(
            up.merges.as_slice(),
            &[MergeEvent {
                value: 4,
                score_delta: 4,
                row: 0,
                col: 0
            }]
        );

        let down = board.shift(Direction::Down);
        assert_eq!(down.board.line(0, false), [0, 0, 4, 4]);
        assert_eq!(down.merges[0].row, 2);
    }

    #[test]
    fn test_apply_move_noop_keeps_score() {
        let board = Board::from_rows([[2, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let result = apply_move(&board, 100, Direction::Left);
        assert!(!result.moved);
        assert_eq!(result.board, board);
        assert_eq!(result.score, 100);
        assert!(result.merges.is_empty());
    }

    #[test]
    fn test_checkerboard_is_lost() {
        let board = checkerboard();
        assert!(board.is_lost());
        assert_eq!(board.terminal_status(), GameStatus::Lost);
        for dir in Direction::ALL {
            assert!(!board.can_move(dir));
        }
    }

    #[test]
    fn test_full_board_with_vertical_pair_not_lost() {
        let mut board = checkerboard();
        board.set(1, 0, 2);
        assert!(board.is_full());
        assert!(!board.is_lost());
        assert_eq!(board.terminal_status(), GameStatus::InProgress);
    }

    #[test]
    fn test_winning_tile_detection() {
        let mut board = Board::new();
        assert!(!board.has_winning_tile());
        board.set(2, 1, 2048);
        assert!(board.has_winning_tile());
        assert_eq!(board.highest_tile(), 2048);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let mut board = checkerboard();
        board.set(0, 1, 0);
        board.set(3, 2, 0);
        assert_eq!(board.empty_cells().as_slice(), &[(0, 1), (3, 2)]);
        assert_eq!(board.count_empty(), 2);
        assert_eq!(board.count_tiles(), 14);
    }

    #[test]
    fn test_new_game_places_two_tiles() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let board = Board::new_game(&mut rng);
            assert_eq!(board.count_tiles(), 2);
            assert!(board
                .rows()
                .iter()
                .flatten()
                .all(|&v| v == 0 || v == 2 || v == 4));
        }
    }

    #[test]
    fn test_display() {
        let board = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 2048]]);
        let text = board.to_string();
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("    2"));
        assert!(text.ends_with(" 2048"));
    }
}
