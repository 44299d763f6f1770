//! Shapes module - fixed tetromino layouts
//!
//! Every kind and orientation maps to a small grid of 0/1 flags. The 1-cells,
//! read row by row and translated by a center tile, are the tiles the piece
//! occupies. Layouts are data, not derived by rotating a base shape, so each
//! piece keeps its own rotation feel.

use arrayvec::ArrayVec;

use crate::types::{Orientation, ShapeKind, Tile};

/// Row-major grid of occupancy flags
pub type Layout = &'static [&'static [u8]];

/// Tiles of a single piece (always four)
pub type PieceTiles = ArrayVec<Tile, 4>;

/// Edge of the largest layout grid (the stick's 4x4)
pub const MAX_LAYOUT_EDGE: usize = 4;

const STICK: [Layout; 4] = [
    &[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]],
    &[&[0, 1, 0, 0], &[0, 1, 0, 0], &[0, 1, 0, 0], &[0, 1, 0, 0]],
    &[&[0, 0, 0, 0], &[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0]],
    &[&[0, 0, 1, 0], &[0, 0, 1, 0], &[0, 0, 1, 0], &[0, 0, 1, 0]],
];

const J: [Layout; 4] = [
    &[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]],
    &[&[0, 1, 1], &[0, 1, 0], &[0, 1, 0]],
    &[&[0, 0, 0], &[1, 1, 1], &[0, 0, 1]],
    &[&[0, 1, 0], &[0, 1, 0], &[1, 1, 0]],
];

const L: [Layout; 4] = [
    &[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]],
    &[&[0, 1, 0], &[0, 1, 0], &[0, 1, 1]],
    &[&[0, 0, 0], &[1, 1, 1], &[1, 0, 0]],
    &[&[1, 1, 0], &[0, 1, 0], &[0, 1, 0]],
];

// Rotationally symmetric.
const SQUARE: Layout = &[&[1, 1], &[1, 1]];

const S: [Layout; 4] = [
    &[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]],
    &[&[0, 1, 0], &[0, 1, 1], &[0, 0, 1]],
    &[&[0, 0, 0], &[0, 1, 1], &[1, 1, 0]],
    &[&[1, 0, 0], &[1, 1, 0], &[0, 1, 0]],
];

const T: [Layout; 4] = [
    &[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]],
    &[&[0, 1, 0], &[0, 1, 1], &[0, 1, 0]],
    &[&[0, 0, 0], &[1, 1, 1], &[0, 1, 0]],
    &[&[0, 1, 0], &[1, 1, 0], &[0, 1, 0]],
];

const Z: [Layout; 4] = [
    &[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]],
    &[&[0, 0, 1], &[0, 1, 1], &[0, 1, 0]],
    &[&[0, 0, 0], &[1, 1, 0], &[0, 1, 1]],
    &[&[0, 1, 0], &[1, 1, 0], &[1, 0, 0]],
];

/// Get the layout grid for a shape kind and orientation
pub fn layout(kind: ShapeKind, orientation: Orientation) -> Layout {
    let i = orientation.index();
    match kind {
        ShapeKind::Stick => STICK[i],
        ShapeKind::J => J[i],
        ShapeKind::L => L[i],
        ShapeKind::Square => SQUARE,
        ShapeKind::S => S[i],
        ShapeKind::T => T[i],
        ShapeKind::Z => Z[i],
    }
}

/// Absolute tiles of a shape at `center`, in row-major layout order
pub fn tiles_for(kind: ShapeKind, orientation: Orientation, center: Tile) -> PieceTiles {
    let mut tiles = PieceTiles::new();
    for (row, flags) in layout(kind, orientation).iter().enumerate() {
        for (column, &flag) in flags.iter().enumerate() {
            if flag != 0 {
                tiles.push(center.offset(column as i32, row as i32));
            }
        }
    }
    tiles
}
