//! Line module - slide and merge for a single row or column
//!
//! A line is always processed front to back: zeros are removed, equal
//! neighbours merge once, and the result is padded with zeros at the back.
//! Callers reverse the line for Right/Down and reverse the result back.

use arrayvec::ArrayVec;

use crate::types::GRID_SIZE;

/// A single row or column, ordered in the slide direction.
pub type Line = [u32; GRID_SIZE];

/// Outcome of sliding one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineShift {
    /// The line after slide and merge.
    pub line: Line,
    /// True when `line` differs from the input at any position.
    pub changed: bool,
    /// Sum of merged values.
    pub score_delta: u32,
    /// `(index, value)` of each merged tile within `line`.
    pub merges: ArrayVec<(usize, u32), 2>,
}

/// Slide and merge a line toward index 0.
///
/// Each tile merges at most once per call, so `[2, 2, 2, 2]` becomes
/// `[4, 4, 0, 0]` and never `[8, 0, 0, 0]`.
pub fn slide_merge(input: Line) -> LineShift {
    let mut compacted: ArrayVec<u32, GRID_SIZE> = ArrayVec::new();
    for &value in input.iter().filter(|&&v| v != 0) {
        compacted.push(value);
    }

    let mut line = [0u32; GRID_SIZE];
    let mut merges = ArrayVec::new();
    let mut score_delta = 0u32;
    let mut write = 0usize;
    let mut read = 0usize;

    while read < compacted.len() {
        let value = compacted[read];
        if read + 1 < compacted.len() && compacted[read + 1] == value {
            let merged = value * 2;
            line[write] = merged;
            score_delta += merged;
            merges.push((write, merged));
            read += 2;
        } else {
            line[write] = value;
            read += 1;
        }
        write += 1;
    }

    LineShift {
        line,
        changed: line != input,
        score_delta,
        merges,
    }
}

/// Slide and merge a line toward its last index.
pub fn slide_merge_reversed(input: Line) -> LineShift {
    let mut reversed = input;
    reversed.reverse();
    let mut shift = slide_merge(reversed);
    shift.line.reverse();
    for merge in shift.merges.iter_mut() {
        merge.0 = GRID_SIZE - 1 - merge.0;
    }
    shift.changed = shift.line != input;
    shift
}
