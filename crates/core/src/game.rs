//! Game module - active piece and loop state machine
//!
//! Ties the board, the drop clock and the RNG together. The host drives it
//! with [`Game::advance_time`] once per frame and forwards player input to
//! [`Game::apply_action`]. Every change to the board is followed by a render
//! request to the [`Renderer`].
//!
//! Phases:
//!
//! - `NoActivePiece`: the next due tick spawns a piece.
//! - `PieceFalling`: due ticks move the piece down one row. When it cannot
//!   move it locks; full rows start a clear, otherwise the next piece spawns.
//! - `RowsClearing`: every frame fades the full rows; once the fade runs out
//!   the rows are deleted and the next piece spawns.
//! - `GameOver`: a spawn found its cells taken. Nothing happens any more.

use tracing::{debug, info};

use crate::board::Board;
use crate::clock::DropClock;
use crate::piece::{Piece, PieceId};
use crate::render::{Renderer, OPAQUE};
use crate::rng::SimpleRng;
use crate::shapes::MAX_LAYOUT_EDGE;
use crate::types::{GameAction, GameConfig, Tile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NoActivePiece,
    PieceFalling,
    RowsClearing,
    GameOver,
}

/// The falling piece and where it is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub id: PieceId,
    pub piece: Piece,
    pub center: Tile,
}

pub struct Game<R: Renderer> {
    board: Board,
    renderer: R,
    rng: SimpleRng,
    clock: DropClock,
    active: Option<ActivePiece>,
    /// Rows waiting to be deleted; non-empty only while clearing
    full_rows: Vec<usize>,
    fade: f32,
    fade_step: f32,
    spawn_center: Tile,
    next_id: u32,
    game_over: bool,
}

impl<R: Renderer> Game<R> {
    /// New game on an empty board sized by `config`
    pub fn new(config: &GameConfig, renderer: R, seed: u32) -> Self {
        Self::with_board(config, Board::new(config.columns, config.rows), renderer, seed)
    }

    /// New game on a prepared board.
    ///
    /// The board's cells are treated as static, including those of pieces
    /// placed on it; its dimensions win over the ones in `config`.
    pub fn with_board(config: &GameConfig, mut board: Board, renderer: R, seed: u32) -> Self {
        board.settle_all();
        // Middle column, pulled left on narrow boards so every layout fits.
        let spawn_column = (board.columns().saturating_sub(1) / 2)
            .min(board.columns().saturating_sub(MAX_LAYOUT_EDGE));
        Self {
            renderer,
            rng: SimpleRng::new(seed),
            clock: DropClock::new(config.gravity_ms, config.fast_drop_ms),
            active: None,
            full_rows: Vec::new(),
            fade: OPAQUE,
            fade_step: config.fade_step,
            spawn_center: Tile::new(spawn_column as i32, 0),
            next_id: 1,
            game_over: false,
            board,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if !self.full_rows.is_empty() {
            Phase::RowsClearing
        } else if self.active.is_some() {
            Phase::PieceFalling
        } else {
            Phase::NoActivePiece
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    /// Rows being cleared (empty unless clearing)
    pub fn full_rows(&self) -> &[usize] {
        &self.full_rows
    }

    /// Current fade of the clearing rows
    pub fn fade(&self) -> f32 {
        self.fade
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Whether fast fall is engaged for the active piece
    pub fn is_dropping(&self) -> bool {
        self.clock.is_fast()
    }

    pub fn spawn_center(&self) -> Tile {
        self.spawn_center
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Advance the game to host time `now_ms`. Call once per frame.
    pub fn advance_time(&mut self, now_ms: u64) {
        if self.game_over {
            return;
        }

        if !self.full_rows.is_empty() {
            self.fade_rows(now_ms);
            return;
        }

        if !self.clock.poll(now_ms) {
            return;
        }

        if self.active.is_some() {
            self.step_down();
        } else {
            self.spawn();
        }
    }

    /// Apply a player action; returns whether anything changed
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::RotateCw => self.rotate(true),
            GameAction::RotateCcw => self.rotate(false),
            GameAction::ShiftLeft => self.shift(false),
            GameAction::ShiftRight => self.shift(true),
            GameAction::Drop => self.drop(),
        }
    }

    /// Turn the active piece in place.
    ///
    /// Ignored while fast fall is engaged. A blocked rotation leaves the
    /// piece where it was.
    pub fn rotate(&mut self, clockwise: bool) -> bool {
        let Some(active) = self.active.filter(|_| !self.clock.is_fast()) else {
            return false;
        };
        self.try_update(active.piece.rotated(clockwise), active.center)
    }

    /// Move the active piece one column sideways.
    ///
    /// Same rules as [`Game::rotate`].
    pub fn shift(&mut self, right: bool) -> bool {
        let Some(active) = self.active.filter(|_| !self.clock.is_fast()) else {
            return false;
        };
        let delta = if right { 1 } else { -1 };
        self.try_update(active.piece, active.center.offset(delta, 0))
    }

    /// Engage fast fall until the active piece locks
    pub fn drop(&mut self) -> bool {
        if self.active.is_none() {
            return false;
        }
        self.clock.set_fast(true);
        true
    }

    /// Put `piece` on the board at `center` as the new active piece.
    ///
    /// A previous active piece stays where it is and becomes part of the
    /// static board. Returns false, leaving no active piece, if the cells are
    /// not free. Refused while rows are clearing or the game is over.
    pub fn add_piece(&mut self, piece: Piece, center: Tile) -> bool {
        if self.game_over || !self.full_rows.is_empty() {
            return false;
        }
        if let Some(previous) = self.active.take() {
            self.board.settle(previous.id);
        }
        self.clock.set_fast(false);

        let id = PieceId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        if !self.board.try_place(id, &piece, center) {
            return false;
        }

        debug!(
            piece_id = id.0,
            kind = piece.kind().as_str(),
            column = center.column,
            row = center.row,
            "piece placed"
        );
        self.active = Some(ActivePiece { id, piece, center });
        self.render();
        true
    }

    fn spawn(&mut self) -> bool {
        let piece = Piece::new(self.rng.shape_kind());
        let spawned = self.add_piece(piece, self.spawn_center);
        if !spawned {
            self.game_over = true;
            info!(kind = piece.kind().as_str(), "spawn blocked, game over");
        }
        spawned
    }

    fn step_down(&mut self) {
        let Some(active) = self.active else {
            return;
        };
        if !self.try_update(active.piece, active.center.offset(0, 1)) {
            self.lock();
        }
    }

    /// The active piece could not fall: fix it in place and look for full rows
    fn lock(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        self.board.settle(active.id);
        self.clock.set_fast(false);

        let full_rows = self.board.full_row_indices();
        debug!(
            piece_id = active.id.0,
            row = active.center.row,
            full_rows = full_rows.len(),
            "piece locked"
        );

        if full_rows.is_empty() {
            self.spawn();
        } else {
            self.full_rows = full_rows;
            self.fade = OPAQUE;
            self.renderer.render(&self.board, &self.full_rows, self.fade);
        }
    }

    fn fade_rows(&mut self, now_ms: u64) {
        self.fade -= self.fade_step;
        if self.fade > 0.0 {
            self.renderer.render(&self.board, &self.full_rows, self.fade);
            return;
        }

        // Ascending order: each clear only shifts rows above it.
        let rows = std::mem::take(&mut self.full_rows);
        for &row in &rows {
            self.board.clear_row(row);
        }
        debug!(rows = ?rows, "rows cleared");
        self.fade = OPAQUE;
        self.render();

        self.spawn();
        self.clock.mark(now_ms);
    }

    /// Swap the active piece for `piece` at `center` if it fits, otherwise
    /// put the original back exactly where it was.
    fn try_update(&mut self, piece: Piece, center: Tile) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        self.board.remove(active.id);
        if self.board.try_place(active.id, &piece, center) {
            self.active = Some(ActivePiece {
                piece,
                center,
                ..active
            });
            self.render();
            return true;
        }

        let restored = self.board.try_place(active.id, &active.piece, active.center);
        assert!(restored, "active piece {:?} could not be restored", active.id);
        false
    }

    fn render(&mut self) {
        self.renderer.render(&self.board, &[], OPAQUE);
    }

    /// Ask the renderer to repaint the current state, including any rows
    /// being faded out.
    pub fn repaint(&mut self) {
        if self.full_rows.is_empty() {
            self.render();
        } else {
            self.renderer.render(&self.board, &self.full_rows, self.fade);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::NullRenderer;
    use crate::types::ShapeKind;

    fn game() -> Game<NullRenderer> {
        Game::new(&GameConfig::default(), NullRenderer, 12345)
    }

    #[test]
    fn test_new_game_has_no_piece() {
        let game = game();
        assert_eq!(game.phase(), Phase::NoActivePiece);
        assert!(game.active().is_none());
        assert!(game.full_rows().is_empty());
        assert_eq!(game.spawn_center(), Tile::new(4, 0));
    }

    #[test]
    fn test_first_tick_spawns_at_center() {
        let mut game = game();
        game.advance_time(0);

        let active = game.active().unwrap();
        assert_eq!(game.phase(), Phase::PieceFalling);
        assert_eq!(active.center, Tile::new(4, 0));
        assert_eq!(active.piece.orientation(), crate::types::Orientation::A);
        assert!(game.board().is_placed(active.id));
    }

    #[test]
    fn test_piece_ids_are_unique() {
        let mut game = game();
        assert!(game.add_piece(Piece::new(ShapeKind::Square), Tile::new(0, 10)));
        let first = game.active().unwrap().id;
        assert!(game.add_piece(Piece::new(ShapeKind::Square), Tile::new(4, 10)));
        let second = game.active().unwrap().id;

        assert_ne!(first, second);
        assert!(!game.board().is_placed(first));
        assert_eq!(game.board().occupied_count(), 8);
    }

    #[test]
    fn test_drop_blocks_rotate_and_shift() {
        let mut game = game();
        assert!(game.add_piece(Piece::new(ShapeKind::T), Tile::new(4, 5)));
        assert!(game.drop());

        assert!(!game.rotate(true));
        assert!(!game.shift(true));
        assert_eq!(game.active().unwrap().center, Tile::new(4, 5));
    }
}
