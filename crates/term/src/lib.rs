//! Terminal frontend.
//!
//! [`BoardView`] is the game's renderer: it paints board cells (and the row
//! clear fade) into a [`FrameBuffer`] without doing any I/O.
//! [`TerminalRenderer`] puts that framebuffer on screen through crossterm,
//! rewriting only what changed between frames.

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use board_view::{BoardView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
