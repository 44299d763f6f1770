//! Board module - manages the game grid
//!
//! The board is a `columns x rows` grid where each cell is empty or holds the
//! color of the piece occupying it. Cells live in a flat row-major vector.
//! Coordinates: column grows left to right, row grows top to bottom.
//!
//! Besides the cells the board remembers, per placed piece instance, exactly
//! which tiles it covers. Removing a piece clears those tiles instead of
//! recomputing them from a center that may have changed since placement.

use std::collections::HashMap;

use crate::piece::{Piece, PieceId};
use crate::shapes::PieceTiles;
use crate::types::{Color, Tile, BOARD_HEIGHT, BOARD_WIDTH};

/// A cell on the board: `None` when empty
pub type Cell = Option<Color>;

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    columns: usize,
    rows: usize,
    /// Flat array of cells, row-major order (row * columns + column)
    cells: Vec<Cell>,
    /// Tiles covered by each piece instance currently on the board
    placed: HashMap<PieceId, PieceTiles>,
}

impl Board {
    /// Create a new empty board
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            cells: vec![None; columns * rows],
            placed: HashMap::new(),
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    fn index(&self, column: i32, row: i32) -> Option<usize> {
        if column < 0 || row < 0 {
            return None;
        }
        let (column, row) = (column as usize, row as usize);
        if column >= self.columns || row >= self.rows {
            return None;
        }
        Some(row * self.columns + column)
    }

    /// Color of the piece at (column, row); `None` if empty or out of bounds
    pub fn color_at(&self, column: i32, row: i32) -> Cell {
        self.index(column, row).and_then(|idx| self.cells[idx])
    }

    /// Raw cell write for building static boards.
    /// Returns false if out of bounds.
    pub fn set(&mut self, column: i32, row: i32, cell: Cell) -> bool {
        match self.index(column, row) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    fn is_free(&self, tile: Tile) -> bool {
        matches!(self.index(tile.column, tile.row), Some(idx) if self.cells[idx].is_none())
    }

    /// Place `piece` at `center` as instance `id`.
    ///
    /// Succeeds only if every tile is on the board and empty. On failure the
    /// board is left untouched; out of bounds and collisions are not told
    /// apart.
    pub fn try_place(&mut self, id: PieceId, piece: &Piece, center: Tile) -> bool {
        assert!(
            !self.placed.contains_key(&id),
            "piece {:?} is already on the board",
            id
        );

        let tiles = piece.tiles_at(center);
        if !tiles.iter().all(|&tile| self.is_free(tile)) {
            return false;
        }

        for tile in &tiles {
            self.set(tile.column, tile.row, Some(piece.color()));
        }
        self.placed.insert(id, tiles);
        true
    }

    /// Take instance `id` off the board.
    ///
    /// # Panics
    ///
    /// If `id` is not currently placed. That is a caller bug, and clearing
    /// guessed tiles could wipe cells owned by other pieces.
    pub fn remove(&mut self, id: PieceId) {
        let Some(tiles) = self.placed.remove(&id) else {
            panic!("piece {:?} is not on the board", id);
        };
        for tile in tiles {
            self.set(tile.column, tile.row, None);
        }
    }

    /// Forget the record for `id` but keep its cells: the piece has locked
    /// and is now part of the static board.
    pub fn settle(&mut self, id: PieceId) {
        let settled = self.placed.remove(&id);
        debug_assert!(settled.is_some(), "piece {:?} is not on the board", id);
    }

    /// Settle every placed piece; the board keeps only static cells
    pub fn settle_all(&mut self) {
        self.placed.clear();
    }

    /// Whether instance `id` is on the board and can still be removed
    pub fn is_placed(&self, id: PieceId) -> bool {
        self.placed.contains_key(&id)
    }

    fn row_cells(&self, row: usize) -> &[Cell] {
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        row < self.rows && self.row_cells(row).iter().all(|cell| cell.is_some())
    }

    /// Indices of all full rows, top to bottom
    pub fn full_row_indices(&self) -> Vec<usize> {
        (0..self.rows).filter(|&row| self.is_row_full(row)).collect()
    }

    /// Delete `row` and shift every row above it down by one.
    ///
    /// The top row ends up empty. When clearing several rows in one pass,
    /// clear them in ascending order: each clear only touches rows at or
    /// above its index, so the lower pending rows stay where they were found.
    pub fn clear_row(&mut self, row: usize) {
        if row >= self.rows {
            return;
        }

        let width = self.columns;
        // copy_within handles the overlap between neighbouring rows
        for r in (1..=row).rev() {
            let src = (r - 1) * width;
            self.cells.copy_within(src..src + width, r * width);
        }
        self.cells[..width].fill(None);
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
