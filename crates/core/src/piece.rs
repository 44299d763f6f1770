//! Piece module - immutable piece values
//!
//! A piece is a color, an orientation and a shape kind. It has no position of
//! its own: the board asks for its tiles at a given center.

use crate::shapes::{tiles_for, PieceTiles};
use crate::types::{Color, Orientation, ShapeKind, Tile};

/// Identifies one spawned piece instance on the board.
///
/// Piece values are interchangeable, so the board keys its ownership
/// records by this id instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    orientation: Orientation,
    kind: ShapeKind,
}

impl Piece {
    /// A new piece in orientation A with the kind's default color
    pub fn new(kind: ShapeKind) -> Self {
        Self::with_color(kind, kind.color())
    }

    pub fn with_color(kind: ShapeKind, color: Color) -> Self {
        Self {
            color,
            orientation: Orientation::A,
            kind,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Tiles this piece covers when anchored at `center`
    pub fn tiles_at(&self, center: Tile) -> PieceTiles {
        tiles_for(self.kind, self.orientation, center)
    }

    /// The same piece turned one step
    pub fn rotated(&self, clockwise: bool) -> Self {
        Self {
            orientation: self.orientation.rotated(clockwise),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_keeps_color_and_kind() {
        let piece = Piece::with_color(ShapeKind::T, Color::Red);
        let turned = piece.rotated(true);

        assert_eq!(turned.orientation(), Orientation::B);
        assert_eq!(turned.color(), Color::Red);
        assert_eq!(turned.kind(), ShapeKind::T);
        // Original is untouched.
        assert_eq!(piece.orientation(), Orientation::A);
    }

    #[test]
    fn tiles_at_uses_current_orientation() {
        let piece = Piece::new(ShapeKind::Stick).rotated(true);
        let tiles = piece.tiles_at(Tile::new(2, 3));
        assert!(tiles.iter().all(|t| t.column == 3));
        assert_eq!(tiles.first(), Some(&Tile::new(3, 3)));
        assert_eq!(tiles.last(), Some(&Tile::new(3, 6)));
    }
}
