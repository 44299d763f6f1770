//! Core game logic - pure, deterministic, and testable
//!
//! Everything the game does lives here with no terminal, input or clock
//! dependencies. The host feeds in timestamps and player actions and gets
//! repaint requests back through the [`Renderer`] trait.
//!
//! # Module Structure
//!
//! - [`shapes`]: fixed layout grids for the seven shape kinds
//! - [`piece`]: immutable piece values and instance ids
//! - [`board`]: the grid, placement, removal and row clearing
//! - [`clock`]: gravity timing
//! - [`rng`]: seeded uniform shape selection
//! - [`render`]: the renderer seam
//! - [`game`]: the active-piece state machine
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Game, NullRenderer, Phase};
//! use blockfall_types::{GameAction, GameConfig};
//!
//! let mut game = Game::new(&GameConfig::default(), NullRenderer, 12345);
//!
//! // First frame spawns a piece.
//! game.advance_time(0);
//! assert_eq!(game.phase(), Phase::PieceFalling);
//!
//! game.apply_action(GameAction::ShiftLeft);
//! game.apply_action(GameAction::Drop);
//! assert!(game.is_dropping());
//! ```

pub mod board;
pub mod clock;
pub mod game;
pub mod piece;
pub mod render;
pub mod rng;
pub mod shapes;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Cell};
pub use clock::DropClock;
pub use game::{ActivePiece, Game, Phase};
pub use piece::{Piece, PieceId};
pub use render::{NullRenderer, Renderer, OPAQUE};
pub use rng::SimpleRng;
pub use shapes::{layout, tiles_for, Layout, PieceTiles, MAX_LAYOUT_EDGE};
