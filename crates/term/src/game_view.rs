//! GameView: lays a [`GameSnapshot`] out on a framebuffer.
//!
//! No I/O happens here. The layout is three columns: hold and stats on the
//! left, the 10x20 well in the middle (two terminal columns per cell), the
//! next-piece preview on the right.

use crate::core::{get_shape, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, Rotation, BOARD_WIDTH, VISIBLE_HEIGHT, VISIBLE_START};

/// Pieces shown in the next panel.
pub const PREVIEW_COUNT: usize = 3;

const CELL_W: u16 = 2;
const SIDE_W: u16 = 12;
const GAP: u16 = 1;
const WELL_W: u16 = BOARD_WIDTH as u16 * CELL_W + 2;
const WELL_H: u16 = VISIBLE_HEIGHT as u16 + 2;
const LAYOUT_W: u16 = SIDE_W * 2 + GAP * 2 + WELL_W;

const WELL_BG: Rgb = Rgb::new(24, 24, 32);
const GRID: CellStyle = CellStyle {
    fg: Rgb::new(70, 70, 84),
    bg: WELL_BG,
    bold: false,
    dim: false,
};
const FRAME: CellStyle = CellStyle::fg(Rgb::new(190, 190, 200));
const LABEL: CellStyle = CellStyle::fg(Rgb::new(230, 230, 230)).bold();
const VALUE: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const HINT: CellStyle = CellStyle::fg(Rgb::new(130, 130, 140));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    fn fits_layout(&self) -> bool {
        self.width >= LAYOUT_W && self.height >= WELL_H
    }
}

#[derive(Debug, Clone)]
pub struct GameView {
    ghost: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self { ghost: true }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ghost(mut self, ghost: bool) -> Self {
        self.ghost = ghost;
        self
    }

    /// Top-left corner of the well frame for a viewport.
    pub fn well_origin(&self, viewport: Viewport) -> (u16, u16) {
        let left = viewport.width.saturating_sub(LAYOUT_W) / 2;
        let top = viewport.height.saturating_sub(WELL_H + 1) / 2;
        (left + SIDE_W + GAP, top)
    }

    /// Terminal position of the left column of a board cell, if that row is visible.
    pub fn cell_origin(&self, viewport: Viewport, x: u8, y: u8) -> Option<(u16, u16)> {
        if x >= BOARD_WIDTH || y < VISIBLE_START || y >= VISIBLE_START + VISIBLE_HEIGHT {
            return None;
        }
        let (wx, wy) = self.well_origin(viewport);
        Some((
            wx + 1 + x as u16 * CELL_W,
            wy + 1 + (y - VISIBLE_START) as u16,
        ))
    }

    /// Draw a full frame into `fb`, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        if !viewport.fits_layout() {
            let msg = "terminal too small";
            let x = viewport.width.saturating_sub(msg.len() as u16) / 2;
            fb.put_str(x, viewport.height / 2, msg, LABEL);
            return;
        }

        let (well_x, top) = self.well_origin(viewport);
        self.draw_well(fb, snap, viewport);
        self.draw_left_panel(fb, snap, well_x - GAP - SIDE_W, top);
        self.draw_next_panel(fb, snap, well_x + WELL_W + GAP, top);

        if snap.game_over {
            self.draw_overlay(fb, well_x, top, "GAME OVER", "r to restart");
        } else if snap.paused {
            self.draw_overlay(fb, well_x, top, "PAUSED", "p to resume");
        }

        if top + WELL_H < viewport.height {
            let help = "←→ move  ↓ soft  ␣ drop  ↑x/c/v rotate  z hold  p pause  q quit";
            let x = viewport.width.saturating_sub(help.chars().count() as u16) / 2;
            fb.put_str(x, top + WELL_H, help, HINT);
        }
    }

    fn draw_well(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let (well_x, top) = self.well_origin(viewport);
        fb.draw_box(well_x, top, WELL_W, WELL_H, FRAME);

        for (row, cells) in snap.visible_rows().iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let y = VISIBLE_START + row as u8;
                match cell {
                    Some(kind) => {
                        self.put_block(fb, viewport, col as u8, y, block_style(*kind), '█')
                    }
                    None => {
                        if let Some((px, py)) = self.cell_origin(viewport, col as u8, y) {
                            fb.put_char(px, py, ' ', GRID);
                            fb.put_char(px + 1, py, '·', GRID);
                        }
                    }
                }
            }
        }

        let Some(active) = snap.active else {
            return;
        };
        let shape = get_shape(active.kind, active.rotation);

        if self.ghost {
            if let Some(ghost_y) = snap.ghost_y.filter(|&gy| gy != active.y) {
                let style = CellStyle {
                    fg: Rgb::from(active.kind.color()).scaled(3, 5),
                    bg: WELL_BG,
                    bold: false,
                    dim: true,
                };
                for (dx, dy) in shape {
                    if let Some((x, y)) = board_coord(active.x + dx, ghost_y + dy) {
                        self.put_block(fb, viewport, x, y, style, '░');
                    }
                }
            }
        }

        let style = block_style(active.kind).bold();
        for (dx, dy) in shape {
            if let Some((x, y)) = board_coord(active.x + dx, active.y + dy) {
                self.put_block(fb, viewport, x, y, style, '█');
            }
        }
    }

    fn put_block(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        x: u8,
        y: u8,
        style: CellStyle,
        ch: char,
    ) {
        if let Some((px, py)) = self.cell_origin(viewport, x, y) {
            fb.put_char(px, py, ch, style);
            fb.put_char(px + 1, py, ch, style);
        }
    }

    fn draw_left_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        fb.draw_box(x, y, SIDE_W, 4, FRAME);
        fb.put_str(x + 1, y, " HOLD ", LABEL);
        if let Some(kind) = snap.hold {
            let style = if snap.hold_used {
                block_style(kind).dim()
            } else {
                block_style(kind)
            };
            draw_mini(fb, x + 2, y + 1, kind, style);
        }

        let stats = [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ];
        let mut sy = y + 5;
        for (label, value) in stats {
            fb.put_str(x + 1, sy, label, LABEL);
            fb.put_u32(x + 1, sy + 1, value, VALUE);
            sy += 3;
        }
        if snap.back_to_back {
            fb.put_str(x + 1, sy, "B2B", LABEL);
        }
    }

    fn draw_next_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let h = PREVIEW_COUNT as u16 * 3 + 1;
        fb.draw_box(x, y, SIDE_W, h, FRAME);
        fb.put_str(x + 1, y, " NEXT ", LABEL);
        for (i, kind) in snap.next_queue.iter().take(PREVIEW_COUNT).enumerate() {
            draw_mini(fb, x + 2, y + 1 + i as u16 * 3, *kind, block_style(*kind));
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, well_x: u16, top: u16, title: &str, hint: &str) {
        fb.dim_rect(well_x + 1, top + 1, WELL_W - 2, WELL_H - 2);
        let mid = top + WELL_H / 2 - 1;
        for (dy, text, style) in [(0, title, LABEL), (2, hint, VALUE)] {
            let w = text.chars().count() as u16;
            let tx = well_x + WELL_W.saturating_sub(w) / 2;
            fb.put_str(tx, mid + dy, text, style);
        }
    }
}

fn block_style(kind: PieceKind) -> CellStyle {
    CellStyle {
        fg: Rgb::from(kind.color()),
        bg: WELL_BG,
        bold: false,
        dim: false,
    }
}

fn board_coord(x: i8, y: i8) -> Option<(u8, u8)> {
    (x >= 0 && y >= 0).then(|| (x as u8, y as u8))
}

/// Spawn orientation squeezed into two rows, two columns per cell.
fn draw_mini(fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind, style: CellStyle) {
    let shape = get_shape(kind, Rotation::North);
    let min_row = shape.iter().map(|&(_, r)| r).min().unwrap_or(0);
    let style = CellStyle {
        bg: Rgb::BLACK,
        ..style
    };
    for (col, row) in shape {
        let px = x + col as u16 * CELL_W;
        let py = y + (row - min_row) as u16;
        fb.put_char(px, py, '█', style);
        fb.put_char(px + 1, py, '█', style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mini_i_piece_sits_on_first_row() {
        let mut fb = FrameBuffer::new(10, 2);
        draw_mini(&mut fb, 0, 0, PieceKind::I, block_style(PieceKind::I));
        let top: String = (0..8).filter_map(|x| fb.get(x, 0)).map(|c| c.ch).collect();
        assert_eq!(top, "████████");
        assert_eq!(fb.get(0, 1).map(|c| c.ch), Some(' '));
    }

    #[test]
    fn hidden_rows_have_no_screen_position() {
        let view = GameView::new();
        let vp = Viewport::new(80, 24);
        assert_eq!(view.cell_origin(vp, 0, VISIBLE_START - 1), None);
        assert!(view.cell_origin(vp, 9, 39).is_some());
        assert_eq!(view.cell_origin(vp, 10, 30), None);
    }

    #[test]
    fn cells_are_two_columns_wide() {
        let view = GameView::new();
        let vp = Viewport::new(80, 24);
        let (x0, y0) = view.cell_origin(vp, 0, VISIBLE_START).unwrap_or_default();
        let (x1, y1) = view.cell_origin(vp, 1, VISIBLE_START + 1).unwrap_or_default();
        assert_eq!(x1 - x0, 2);
        assert_eq!(y1 - y0, 1);
    }
}
