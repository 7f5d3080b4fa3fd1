//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested.

use crate::core::{get_shape, GameSnapshot, PreviewGrid};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

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

pub struct GameView {
    /// Terminal columns per board cell.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell roughly squares the glyphs.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let frame_w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 + 2;
        let left = viewport.width.saturating_sub(frame_w) / 2;
        let top = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(fb, left, top, frame_w, frame_h);

        let empty = CellStyle::plain(Rgb::new(90, 90, 100), WELL_BG).dim();
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (ch, style) = match cell {
                    Some(kind) => ('█', piece_style(*kind)),
                    None => ('·', empty),
                };
                self.fill_cell(fb, left, top, x as u16, y as u16, ch, style);
            }
        }

        self.draw_ghost(fb, snap, left, top);
        self.draw_side_panel(fb, snap, left + frame_w + 2, top);

        let banner = match snap.status {
            GameStatus::NotStarted => Some("PRESS ENTER"),
            GameStatus::Paused => Some("PAUSED"),
            GameStatus::GameOver => Some("GAME OVER"),
            GameStatus::Running => None,
        };
        if let Some(text) = banner {
            let text_w = text.chars().count() as u16;
            let x = left + frame_w.saturating_sub(text_w) / 2;
            fb.put_str(x, top + frame_h / 2, text, CellStyle::default().bold());
        }
    }

    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_ghost(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, left: u16, top: u16) {
        let (Some(active), Some(ghost_y)) = (snap.active, snap.ghost_y) else {
            return;
        };
        if ghost_y == active.y || snap.status == GameStatus::GameOver {
            return;
        }
        let style = CellStyle::plain(Rgb::new(140, 140, 140), WELL_BG).dim();
        for (dx, dy) in get_shape(active.kind, active.rotation) {
            let (x, y) = (active.x + dx, ghost_y + dy);
            let on_board = (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y);
            // Locked cells and the active piece win over the ghost.
            if on_board && snap.board[y as usize][x as usize].is_none() {
                self.fill_cell(fb, left, top, x as u16, y as u16, '░', style);
            }
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, top: u16) {
        if x >= fb.width() {
            return;
        }
        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        let mut y = top;
        for (name, n) in [("SCORE", snap.score), ("LINES", snap.lines)] {
            fb.put_str(x, y, name, label);
            fb.put_str(x, y + 1, &n.to_string(), value);
            y += 3;
        }

        fb.put_str(x, y, "NEXT", label);
        self.draw_preview(fb, &snap.next_preview, x, y + 1);
        y += 6;

        let hold_label = if snap.can_hold { label } else { label.dim() };
        fb.put_str(x, y, "HOLD", hold_label);
        self.draw_preview(fb, &snap.hold_preview, x, y + 1);
        y += 6;

        fb.put_str(x, y, "GAME", label);
        fb.put_str(x, y + 1, &snap.episode_id.to_string(), value);
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, grid: &PreviewGrid, x: u16, y: u16) {
        for (dy, row) in grid.iter().enumerate() {
            for (dx, cell) in row.iter().enumerate() {
                if let Some(kind) = cell {
                    let px = x + dx as u16 * self.cell_w;
                    fb.fill_rect(px, y + dy as u16, self.cell_w, 1, '█', piece_style(*kind));
                }
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell(&self, fb: &mut FrameBuffer, left: u16, top: u16, x: u16, y: u16, ch: char, style: CellStyle) {
        fb.fill_rect(left + 1 + x * self.cell_w, top + 1 + y, self.cell_w, 1, ch, style);
    }
}

fn piece_style(kind: PieceKind) -> CellStyle {
    CellStyle::plain(Rgb::of_piece(kind), WELL_BG).bold()
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    let style = CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG);
    let (right, bottom) = (x + w - 1, y + h - 1);

    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
    fb.fill_rect(x + 1, y, w - 2, 1, '─', style);
    fb.fill_rect(x + 1, bottom, w - 2, 1, '─', style);
    fb.fill_rect(x, y + 1, 1, h - 2, '│', style);
    fb.fill_rect(right, y + 1, 1, h - 2, '│', style);
}
