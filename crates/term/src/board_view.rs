//! BoardView: paints the board into a terminal framebuffer.
//!
//! This module is pure (no I/O). It implements the core [`Renderer`] trait,
//! so the game pushes repaints into it; the host loop presents the
//! framebuffer whenever the view reports itself dirty.

use crate::core::{Board, Cell, Renderer, OPAQUE};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::BACKGROUND_RGB;

const HINT: &str = "←/→ shift  ↑/↓ rotate  space drop  q quit";

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

/// Last state handed over by the game, kept so a resize can repaint.
#[derive(Debug, Clone, Default)]
struct Scene {
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
    full_rows: Vec<usize>,
    fade: f32,
}

pub struct BoardView {
    /// Terminal columns per tile
    tile_width: u16,
    viewport: Viewport,
    fb: FrameBuffer,
    scene: Scene,
    banner: Option<String>,
    dirty: bool,
}

impl BoardView {
    pub fn new(tile_width: u16, viewport: Viewport) -> Self {
        Self {
            tile_width: tile_width.max(1),
            viewport,
            fb: FrameBuffer::new(viewport.width, viewport.height),
            scene: Scene {
                fade: OPAQUE,
                ..Scene::default()
            },
            banner: None,
            dirty: true,
        }
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Whether the frame changed since the last call
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        self.fb.resize(viewport.width, viewport.height);
        self.paint();
    }

    /// Text drawn across the middle of the board (e.g. "GAME OVER")
    pub fn set_banner(&mut self, banner: Option<&str>) {
        let banner = banner.map(str::to_string);
        if banner != self.banner {
            self.banner = banner;
            self.paint();
        }
    }

    /// Top-left corner of the board frame (border included)
    pub fn origin(&self) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        (
            self.viewport.width.saturating_sub(frame_w) / 2,
            self.viewport.height.saturating_sub(frame_h.saturating_add(1)) / 2,
        )
    }

    /// Board size in terminal cells, border included; saturates at `u16::MAX`
    fn frame_size(&self) -> (u16, u16) {
        let columns = u16::try_from(self.scene.columns).unwrap_or(u16::MAX);
        let rows = u16::try_from(self.scene.rows).unwrap_or(u16::MAX);
        (
            columns.saturating_mul(self.tile_width).saturating_add(2),
            rows.saturating_add(2),
        )
    }

    fn paint(&mut self) {
        self.dirty = true;
        self.fb.clear(CellStyle::default().into_cell(' '));
        if self.scene.columns == 0 || self.scene.rows == 0 {
            return;
        }

        let (x0, y0) = self.origin();
        let (frame_w, frame_h) = self.frame_size();
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        draw_border(&mut self.fb, x0, y0, frame_w, frame_h, border);

        let background = Rgb::from_tuple(BACKGROUND_RGB);
        let empty = CellStyle::new(Rgb::new(255, 255, 255), background);

        let (fb_w, fb_h) = (u32::from(self.fb.width()), u32::from(self.fb.height()));
        for row in 0..self.scene.rows {
            // Tiles past the framebuffer edge are not drawn.
            let y = u32::from(y0) + 1 + row as u32;
            if y >= fb_h {
                break;
            }
            let alpha = if self.scene.full_rows.contains(&row) {
                self.scene.fade
            } else {
                OPAQUE
            };
            for column in 0..self.scene.columns {
                let x = u32::from(x0) + 1 + column as u32 * u32::from(self.tile_width);
                if x >= fb_w {
                    break;
                }
                let cell = self.scene.cells[row * self.scene.columns + column];
                let (style, ch) = match cell {
                    Some(color) => {
                        let fill = Rgb::from_tuple(color.rgb()).blend(background, alpha);
                        (CellStyle::new(fill, fill), '█')
                    }
                    None => (empty, '·'),
                };
                self.fb
                    .fill_rect(x as u16, y as u16, self.tile_width, 1, style.into_cell(ch));
            }
        }

        if let Some(banner) = &self.banner {
            let style = CellStyle {
                bold: true,
                ..CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(160, 30, 30))
            };
            let len = banner.chars().count() as u16;
            let x = x0 + frame_w.saturating_sub(len) / 2;
            self.fb.put_str(x, y0.saturating_add(frame_h / 2), banner, style);
        }

        let hint_len = HINT.chars().count() as u16;
        let hint_x = self.viewport.width.saturating_sub(hint_len) / 2;
        let hint_style = CellStyle::new(Rgb::new(140, 140, 140), Rgb::new(0, 0, 0));
        self.fb.put_str(hint_x, y0.saturating_add(frame_h), HINT, hint_style);
    }
}

impl Renderer for BoardView {
    fn render(&mut self, board: &Board, full_rows: &[usize], fade: f32) {
        self.scene.columns = board.columns();
        self.scene.rows = board.rows();
        self.scene.cells.clear();
        self.scene.cells.extend_from_slice(board.cells());
        self.scene.full_rows.clear();
        self.scene.full_rows.extend_from_slice(full_rows);
        self.scene.fade = fade;
        self.paint();
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.set(x, y, style.into_cell('┌'));
    fb.set(x + w - 1, y, style.into_cell('┐'));
    fb.set(x, y + h - 1, style.into_cell('└'));
    fb.set(x + w - 1, y + h - 1, style.into_cell('┘'));

    for dx in 1..w - 1 {
        fb.set(x + dx, y, style.into_cell('─'));
        fb.set(x + dx, y + h - 1, style.into_cell('─'));
    }
    for dy in 1..h - 1 {
        fb.set(x, y + dy, style.into_cell('│'));
        fb.set(x + w - 1, y + dy, style.into_cell('│'));
    }
}
