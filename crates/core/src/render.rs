//! Renderer seam between the game and whatever draws it.

use crate::board::Board;

/// Fade value for a render without highlighted rows
pub const OPAQUE: f32 = 1.0;

/// Receives a repaint request after every board change.
///
/// Implementors repaint each cell from [`Board::color_at`]. Occupied cells in
/// `full_rows` are drawn blended toward transparency by `fade` (1.0 opaque,
/// 0.0 gone).
pub trait Renderer {
    fn render(&mut self, board: &Board, full_rows: &[usize], fade: f32);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, board: &Board, full_rows: &[usize], fade: f32) {
        (**self).render(board, full_rows, fade);
    }
}

/// Renderer that draws nothing (headless runs, benches)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _board: &Board, _full_rows: &[usize], _fade: f32) {}
}
