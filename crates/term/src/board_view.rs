//! BoardView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::GRID_SIZE;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BOARD_BG: Rgb = Rgb::hex(0xbbada0);
const EMPTY_BG: Rgb = Rgb::hex(0xcdc1b4);
const DARK_TEXT: Rgb = Rgb::hex(0x776e65);
const LIGHT_TEXT: Rgb = Rgb::hex(0xf9f6f2);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// A terminal renderer for the 2048 board.
pub struct BoardView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    anchor_y: AnchorY,
}

impl Default for BoardView {
    fn default() -> Self {
        // 7x3 keeps tiles roughly square and fits six-digit values.
        Self {
            tile_w: 7,
            tile_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl BoardView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board: `(width, height)`.
    pub fn frame_size(&self) -> (u16, u16) {
        let n = GRID_SIZE as u16;
        let inner_w = n * self.tile_w + (n + 1);
        let inner_h = n * self.tile_h + (n + 1);
        (inner_w + 2, inner_h + 2)
    }

    /// Top-left terminal cell of the tile at (row, col), given the frame origin.
    pub fn tile_origin(&self, start_x: u16, start_y: u16, row: usize, col: usize) -> (u16, u16) {
        let x = start_x + 2 + (col as u16) * (self.tile_w + 1);
        let y = start_y + 2 + (row as u16) * (self.tile_h + 1);
        (x, y)
    }

    /// Frame origin for a viewport.
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w + PANEL_WIDTH) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        (start_x, start_y)
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(LIGHT_TEXT, SCREEN_BG).into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);

        let bg = CellStyle::new(DARK_TEXT, BOARD_BG);
        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', bg);
        let border = CellStyle::new(BOARD_BG, SCREEN_BG);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                self.draw_tile(fb, snap, start_x, start_y, row, col);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        // A pending win is announced before a loss on the same move.
        let overlay: &[&str] = if snap.win_pending {
            &["YOU WIN!", "c: keep playing", "n: new game"]
        } else if snap.lost {
            &["GAME OVER", "n: try again"]
        } else {
            &[]
        };
        if !overlay.is_empty() {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, overlay);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '╭', style);
        fb.put_char(x + w - 1, y, '╮', style);
        fb.put_char(x, y + h - 1, '╰', style);
        fb.put_char(x + w - 1, y + h - 1, '╯', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        row: usize,
        col: usize,
    ) {
        let (x, y) = self.tile_origin(start_x, start_y, row, col);
        let value = snap.board[row][col];
        let mut style = tile_style(value);
        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', style);
        if value == 0 {
            return;
        }

        if snap.merged_at(row, col) {
            style = style.bold();
        }
        let mid = y + self.tile_h / 2;
        let mut digits = [0u8; 10];
        fb.put_str_centered(x, mid, self.tile_w, format_u32(value, &mut digits), style);

        if snap.spawned_at(row, col) {
            fb.put_char(x, y, '•', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let hint = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "2048", CellStyle::new(Rgb::hex(0xedc22e), SCREEN_BG).bold());
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        let end = fb.put_u32(panel_x, y, snap.score, value);
        if snap.last_score_delta > 0 {
            let cx = fb.put_str(end + 1, y, "+", hint);
            fb.put_u32(cx, y, snap.last_score_delta, hint);
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.best, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.move_count, value);
        y = y.saturating_add(2);

        for line in ["arrows/wasd: move", "n: new game", "q: quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        lines: &[&str],
    ) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(60, 58, 50)).bold();
        let box_h = lines.len() as u16 + 2;
        let box_w = frame_w.saturating_sub(8);
        let box_x = start_x + (frame_w - box_w) / 2;
        let box_y = start_y + frame_h.saturating_sub(box_h) / 2;

        fb.fill_rect(box_x, box_y, box_w, box_h, ' ', style);
        for (i, line) in lines.iter().enumerate() {
            fb.put_str_centered(box_x, box_y + 1 + i as u16, box_w, line, style);
        }
    }
}

/// Width reserved to the right of the board for the side panel when centering.
const PANEL_WIDTH: u16 = 22;

/// Background/foreground for a tile value, after the classic palette.
pub fn tile_style(value: u32) -> CellStyle {
    let (bg, fg) = match value {
        0 => (EMPTY_BG, DARK_TEXT),
        2 => (Rgb::hex(0xeee4da), DARK_TEXT),
        4 => (Rgb::hex(0xede0c8), DARK_TEXT),
        8 => (Rgb::hex(0xf2b179), LIGHT_TEXT),
        16 => (Rgb::hex(0xf59563), LIGHT_TEXT),
        32 => (Rgb::hex(0xf67c5f), LIGHT_TEXT),
        64 => (Rgb::hex(0xf65e3b), LIGHT_TEXT),
        128 => (Rgb::hex(0xedcf72), LIGHT_TEXT),
        256 => (Rgb::hex(0xedcc61), LIGHT_TEXT),
        512 => (Rgb::hex(0xedc850), LIGHT_TEXT),
        1024 => (Rgb::hex(0xedc53f), LIGHT_TEXT),
        2048 => (Rgb::hex(0xedc22e), LIGHT_TEXT),
        _ => (Rgb::hex(0x3c3a32), LIGHT_TEXT),
    };
    CellStyle::new(fg, bg)
}

fn format_u32(value: u32, buf: &mut [u8; 10]) -> &str {
    let mut n = value;
    let mut i = buf.len();
    loop {
        i -= 1;
        buf[i] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    // Only ASCII digits were written.
    std::str::from_utf8(&buf[i..]).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with(board: [[u32; 4]; 4]) -> GameSnapshot {
        GameSnapshot {
            board,
            ..GameSnapshot::default()
        }
    }

    #[test]
    fn test_frame_size() {
        let view = BoardView::default();
        // 4 tiles of 7 plus 5 gaps, plus border.
        assert_eq!(view.frame_size(), (35, 19));
    }

    #[test]
    fn test_format_u32() {
        let mut buf = [0u8; 10];
        assert_eq!(format_u32(0, &mut buf), "0");
        assert_eq!(format_u32(2048, &mut buf), "2048");
        assert_eq!(format_u32(131072, &mut buf), "131072");
    }

    #[test]
    fn test_tile_value_is_centered() {
        let mut board = [[0; 4]; 4];
        board[1][2] = 128;
        let snap = snapshot_with(board);
        let view = BoardView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&snap, Viewport::new(35, 19));

        let (x, y) = view.tile_origin(0, 0, 1, 2);
        let text = fb.row_text(y + 1);
        let tile: String = text.chars().skip(x as usize).take(7).collect();
        assert_eq!(tile, "  128  ");
        assert_eq!(fb.get(x, y).unwrap().style.bg, Rgb::hex(0xedcf72));
    }

    #[test]
    fn test_tile_styles_distinguish_values() {
        assert_ne!(tile_style(2).bg, tile_style(4).bg);
        assert_eq!(tile_style(4096), tile_style(8192));
        assert_eq!(tile_style(0).bg, EMPTY_BG);
    }

    #[test]
    fn test_lost_overlay() {
        let snap = GameSnapshot {
            lost: true,
            ..GameSnapshot::default()
        };
        let fb = BoardView::default().render(&snap, Viewport::new(80, 24));
        assert!(fb.contains_text("GAME OVER"));
        assert!(!fb.contains_text("YOU WIN!"));
    }

    #[test]
    fn test_win_overlay_only_while_pending() {
        let mut snap = GameSnapshot {
            won: true,
            win_pending: true,
            ..GameSnapshot::default()
        };
        let view = BoardView::default();
        assert!(view.render(&snap, Viewport::new(80, 24)).contains_text("YOU WIN!"));

        snap.win_pending = false;
        assert!(!view.render(&snap, Viewport::new(80, 24)).contains_text("YOU WIN!"));
    }

    #[test]
    fn test_win_overlay_shown_before_game_over() {
        let mut snap = GameSnapshot {
            won: true,
            lost: true,
            win_pending: true,
            ..GameSnapshot::default()
        };
        let view = BoardView::default();
        let fb = view.render(&snap, Viewport::new(80, 24));
        assert!(fb.contains_text("YOU WIN!"));
        assert!(!fb.contains_text("GAME OVER"));

        snap.win_pending = false;
        let fb = view.render(&snap, Viewport::new(80, 24));
        assert!(fb.contains_text("GAME OVER"));
    }

    #[test]
    fn test_panel_shows_score_and_delta() {
        let snap = GameSnapshot {
            score: 1234,
            best: 5000,
            last_score_delta: 16,
            ..GameSnapshot::default()
        };
        let fb = BoardView::default().render(&snap, Viewport::new(80, 24));
        assert!(fb.contains_text("SCORE"));
        assert!(fb.contains_text("1234 +16"));
        assert!(fb.contains_text("5000"));
    }

    #[test]
    fn test_small_viewport_does_not_panic() {
        let snap = GameSnapshot::default();
        let fb = BoardView::default().render(&snap, Viewport::new(10, 5));
        assert_eq!(fb.width(), 10);
    }
}
