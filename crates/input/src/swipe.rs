//! Swipe detection from mouse drags.
//!
//! A press followed by a release is treated like a touch swipe: the axis with the
//! larger displacement wins, and the drag must be longer than a minimum distance.
//! Terminal coordinates grow rightwards and downwards.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::Direction;

/// Default minimum drag length, in terminal cells.
pub const DEFAULT_MIN_SWIPE_CELLS: u16 = 3;

/// Direction of a drag from `(dx, dy)`, or `None` if it is too short.
///
/// The dominant axis must move strictly more than `min_distance`. Ties between the
/// axes resolve to the vertical axis.
pub fn direction_from_delta(dx: i32, dy: i32, min_distance: u16) -> Option<Direction> {
    let min = min_distance as i32;
    if dx.abs() > dy.abs() {
        if dx.abs() <= min {
            return None;
        }
        Some(if dx > 0 { Direction::Right } else { Direction::Left })
    } else {
        if dy.abs() <= min {
            return None;
        }
        Some(if dy > 0 { Direction::Down } else { Direction::Up })
    }
}

/// Tracks a left-button press and turns the matching release into a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeTracker {
    start: Option<(u16, u16)>,
    min_distance: u16,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SWIPE_CELLS)
    }
}

impl SwipeTracker {
    pub fn new(min_distance: u16) -> Self {
        Self {
            start: None,
            min_distance,
        }
    }

    pub fn min_distance(&self) -> u16 {
        self.min_distance
    }

    /// True between a press and its release.
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Feed a mouse event; returns a direction when a swipe completes.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> Option<Direction> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.start = Some((event.column, event.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (x0, y0) = self.start.take()?;
                let dx = event.column as i32 - x0 as i32;
                let dy = event.row as i32 - y0 as i32;
                direction_from_delta(dx, dy, self.min_distance)
            }
            _ => None,
        }
    }

    /// Forget a press in progress (e.g. on focus loss or resize).
    pub fn cancel(&mut self) {
        self.start = None;
    }
}
