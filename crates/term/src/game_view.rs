//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so layouts can be asserted in unit tests.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::scores::ScoreEntry;
use crate::types::GameOverReason;

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

/// Host-side information drawn next to the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hud<'a> {
    pub player: &'a str,
    pub leaderboard: &'a [ScoreEntry],
    /// Transient message such as "Saved!".
    pub status: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

const PANEL_GAP: u16 = 2;
const MIN_PANEL_W: u16 = 14;

const BOARD_BG: Rgb = Rgb::new(20, 24, 20);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps grid cells roughly square in most terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Terminal size of the bordered board for a given grid.
    pub fn frame_size(&self, grid_size: u16) -> (u16, u16) {
        (
            grid_size.saturating_mul(self.cell_w).saturating_add(2),
            grid_size.saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Reuse one framebuffer across frames; this path does not allocate once
    /// the buffer has its final size.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &Hud<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::plain(Rgb::new(220, 220, 220), SCREEN_BG).glyph(' '));

        let n = snap.grid_size;
        let (frame_w, frame_h) = self.frame_size(n);

        // Center board and panel together when the panel fits.
        let total_w = frame_w + PANEL_GAP + MIN_PANEL_W + 10;
        let start_x = if viewport.width >= total_w {
            (viewport.width - total_w) / 2
        } else {
            viewport.width.saturating_sub(frame_w) / 2
        };
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let empty = CellStyle::plain(Rgb::new(70, 80, 70), BOARD_BG).dim();
        for y in 0..n {
            for x in 0..n {
                self.fill_grid_cell(fb, start_x, start_y, x, y, '·', empty);
            }
        }

        if let Some(food) = snap.food {
            let style = CellStyle::plain(Rgb::new(230, 70, 70), BOARD_BG).bold();
            self.draw_grid_glyph(fb, start_x, start_y, food.x, food.y, '●', style);
        }

        // Tail first so the head wins if cells ever overlap.
        let dead = snap.terminal && snap.game_over_reason != Some(GameOverReason::BoardFull);
        let body = if dead {
            CellStyle::plain(Rgb::new(120, 130, 120), BOARD_BG)
        } else {
            CellStyle::plain(Rgb::new(60, 180, 90), BOARD_BG)
        };
        for c in snap.snake.iter().skip(1).rev() {
            self.draw_grid_cell(fb, start_x, start_y, c.x, c.y, '█', body);
        }
        if let Some(head) = snap.head() {
            let style = if dead {
                CellStyle::plain(Rgb::new(200, 90, 90), BOARD_BG).bold()
            } else {
                CellStyle::plain(Rgb::new(120, 240, 140), BOARD_BG).bold()
            };
            self.draw_grid_cell(fb, start_x, start_y, head.x, head.y, '█', style);
        }

        self.draw_side_panel(fb, snap, hud, viewport, start_x, start_y, frame_w);

        if snap.paused && !snap.terminal {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, &["PAUSED", "space: resume"]);
        } else if snap.terminal {
            let title = match snap.game_over_reason {
                Some(GameOverReason::BoardFull) => "YOU WIN",
                _ => "GAME OVER",
            };
            self.draw_overlay(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                &[title, "enter: save & restart", "r: restart  q: quit"],
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &Hud<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Fill one grid cell with `ch`. Negative coordinates are skipped.
    fn draw_grid_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: i16,
        y: i16,
        ch: char,
        style: CellStyle,
    ) {
        if x < 0 || y < 0 {
            return;
        }
        self.fill_grid_cell(fb, start_x, start_y, x as u16, y as u16, ch, style);
    }

    /// Single glyph in the first column of a grid cell, the rest blank.
    fn draw_grid_glyph(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: i16,
        y: i16,
        ch: char,
        style: CellStyle,
    ) {
        if x < 0 || y < 0 {
            return;
        }
        self.fill_grid_cell(fb, start_x, start_y, x as u16, y as u16, ' ', style);
        let px = start_x + 1 + (x as u16) * self.cell_w;
        let py = start_y + 1 + (y as u16) * self.cell_h;
        fb.put_char(px, py, ch, style);
    }

    fn fill_grid_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + x * self.cell_w;
        let py = start_y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &Hud<'_>,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(PANEL_GAP);
        if panel_x >= viewport.width || viewport.width - panel_x < MIN_PANEL_W {
            return;
        }

        let label = CellStyle::plain(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG);
        let dim = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "PLAYER", label);
        y += 1;
        fb.put_str(panel_x, y, if hud.player.is_empty() { "-" } else { hud.player }, value);
        y += 2;

        fb.put_str(panel_x, y, "SCORE", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.score, value);
        y += 2;

        fb.put_str(panel_x, y, "LENGTH", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.snake.len() as u32, value);
        y += 2;

        fb.put_str(panel_x, y, "SPEED", label);
        y += 1;
        let end = fb.put_u32(panel_x, y, snap.tick_period_ms, value);
        fb.put_str(end, y, "ms", dim);
        y += 2;

        fb.put_str(panel_x, y, "TOP SCORES", label);
        y += 1;
        if hud.leaderboard.is_empty() {
            fb.put_str(panel_x, y, "no scores yet", dim);
            y += 1;
        }
        for (i, entry) in hud.leaderboard.iter().enumerate() {
            if y >= viewport.height {
                return;
            }
            let x = fb.put_u32(panel_x, y, (i as u32) + 1, dim);
            let x = fb.put_str(x, y, ". ", dim);
            let x = fb.put_u32(x, y, entry.score, value);
            let x = fb.put_str(x, y, " ", value);
            fb.put_str(x, y, &entry.player_name, value);
            y += 1;
        }

        if let Some(status) = hud.status {
            y += 1;
            if y < viewport.height {
                let style = CellStyle::plain(Rgb::new(240, 220, 80), SCREEN_BG).bold();
                fb.put_str(panel_x, y, status, style);
            }
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
        let title = CellStyle::plain(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        let hint = CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG);

        let top = start_y
            .saturating_add(frame_h / 2)
            .saturating_sub(lines.len() as u16 / 2);
        for (i, line) in lines.iter().enumerate() {
            let w = line.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(w) / 2);
            let style = if i == 0 { title } else { hint };
            fb.put_str(x, top + i as u16, line, style);
        }
    }
}
