//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no external dependencies, so the same
//! types flow through the game core, the terminal view and the key mapper.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn center**: (4, 0) on the default board
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Host frame interval (~60 FPS) |
//! | `GRAVITY_PERIOD_MS` | 800 | One row of gravity |
//! | `FAST_DROP_PERIOD_MS` | 20 | Gravity while drop is engaged |
//! | `FADE_STEP` | 0.04 | Row-clear fade per frame |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, Orientation, ShapeKind, Tile, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = ShapeKind::from_str("stick").unwrap();
//! assert_eq!(kind, ShapeKind::Stick);
//!
//! assert_eq!(Orientation::A.rotated(true), Orientation::B);
//! assert_eq!(Orientation::A.rotated(false), Orientation::D);
//!
//! assert_eq!(Tile::new(4, 0).offset(1, 2), Tile::new(5, 2));
//! assert_eq!(GameAction::from_str("drop"), Some(GameAction::Drop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

pub mod config;

pub use config::{ConfigError, GameConfig};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// Normal gravity: one row every 800ms
pub const GRAVITY_PERIOD_MS: u64 = 800;

/// Gravity period while drop is engaged
pub const FAST_DROP_PERIOD_MS: u64 = 20;

/// Amount the row-clear highlight fades per frame (25 frames to clear)
pub const FADE_STEP: f32 = 0.04;

/// Terminal columns per board tile
pub const TILE_WIDTH: u16 = 2;

/// Integer (column, row) coordinate on the board.
///
/// Fields are signed so that candidate positions left of or above the board
/// can be represented and rejected by placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile {
    pub column: i32,
    pub row: i32,
}

impl Tile {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// This tile moved by `(columns, rows)`.
    pub const fn offset(self, columns: i32, rows: i32) -> Self {
        Self {
            column: self.column + columns,
            row: self.row + rows,
        }
    }
}

/// The four rotation states of a piece.
///
/// Clockwise rotation cycles A → B → C → D → A, anti-clockwise the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    A,
    B,
    C,
    D,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [Orientation::A, Orientation::B, Orientation::C, Orientation::D];

    /// Position in the cycle (A = 0 ... D = 3)
    pub fn index(self) -> usize {
        match self {
            Orientation::A => 0,
            Orientation::B => 1,
            Orientation::C => 2,
            Orientation::D => 3,
        }
    }

    /// Orientation at `index` modulo 4
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// One step around the cycle.
    ///
    /// Anti-clockwise is three clockwise steps.
    ///
    /// ```
    /// use blockfall_types::Orientation;
    ///
    /// assert_eq!(Orientation::D.rotated(true), Orientation::A);
    /// assert_eq!(Orientation::B.rotated(false), Orientation::A);
    /// ```
    pub fn rotated(self, clockwise: bool) -> Self {
        let step = if clockwise { 1 } else { 3 };
        Self::from_index(self.index() + step)
    }
}

/// Fixed palette of piece colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    LightBlue,
    DarkBlue,
    Orange,
    Yellow,
    LightGreen,
    Purple,
    Red,
}

impl Color {
    /// CSS color name used by the browser build
    pub fn css_name(self) -> &'static str {
        match self {
            Color::LightBlue => "cyan",
            Color::DarkBlue => "blue",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::LightGreen => "green",
            Color::Purple => "purple",
            Color::Red => "red",
        }
    }

    /// 24-bit RGB value of the CSS color
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::LightBlue => (0, 255, 255),
            Color::DarkBlue => (0, 0, 255),
            Color::Orange => (255, 165, 0),
            Color::Yellow => (255, 255, 0),
            Color::LightGreen => (0, 128, 0),
            Color::Purple => (128, 0, 128),
            Color::Red => (255, 0, 0),
        }
    }
}

/// Empty-cell color (CSS `#eee`)
pub const BACKGROUND_RGB: (u8, u8, u8) = (0xee, 0xee, 0xee);

/// The seven tetromino shape kinds
///
/// Default colors:
/// - **Stick**: light blue
/// - **J**: dark blue
/// - **L**: orange
/// - **Square**: yellow
/// - **S**: light green
/// - **T**: purple
/// - **Z**: red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Stick,
    J,
    L,
    Square,
    S,
    T,
    Z,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Stick,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::Square,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    pub fn color(self) -> Color {
        match self {
            ShapeKind::Stick => Color::LightBlue,
            ShapeKind::J => Color::DarkBlue,
            ShapeKind::L => Color::Orange,
            ShapeKind::Square => Color::Yellow,
            ShapeKind::S => Color::LightGreen,
            ShapeKind::T => Color::Purple,
            ShapeKind::Z => Color::Red,
        }
    }

    /// Parse shape kind from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("Square"), Some(ShapeKind::Square));
    /// assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
    /// assert_eq!(ShapeKind::from_str("o"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "stick" => Some(ShapeKind::Stick),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            "square" => Some(ShapeKind::Square),
            "s" => Some(ShapeKind::S),
            "t" => Some(ShapeKind::T),
            "z" => Some(ShapeKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Stick => "stick",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
            ShapeKind::Square => "square",
            ShapeKind::S => "s",
            ShapeKind::T => "t",
            ShapeKind::Z => "z",
        }
    }
}

/// Player actions delivered by the input layer.
///
/// Each maps 1:1 to a game method; repeat suppression is the input layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Rotate the active piece clockwise
    RotateCw,
    /// Rotate the active piece anti-clockwise
    RotateCcw,
    /// Shift the active piece one column left
    ShiftLeft,
    /// Shift the active piece one column right
    ShiftRight,
    /// Engage fast fall for the active piece
    Drop,
}

impl GameAction {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "shiftleft" => Some(GameAction::ShiftLeft),
            "shiftright" => Some(GameAction::ShiftRight),
            "drop" => Some(GameAction::Drop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::ShiftLeft => "shiftLeft",
            GameAction::ShiftRight => "shiftRight",
            GameAction::Drop => "drop",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clockwise_four_times_is_identity() {
        for start in Orientation::ALL {
            let mut o = start;
            for _ in 0..4 {
                o = o.rotated(true);
            }
            assert_eq!(o, start);
        }
    }

    #[test]
    fn clockwise_then_anticlockwise_is_identity() {
        for start in Orientation::ALL {
            assert_eq!(start.rotated(true).rotated(false), start);
            assert_eq!(start.rotated(false).rotated(true), start);
        }
    }

    #[test]
    fn every_kind_has_a_distinct_color() {
        let mut seen = Vec::new();
        for kind in ShapeKind::ALL {
            assert!(!seen.contains(&kind.color()), "{:?} reuses a color", kind);
            seen.push(kind.color());
        }
    }

    #[test]
    fn action_names_roundtrip() {
        for action in [
            GameAction::RotateCw,
            GameAction::RotateCcw,
            GameAction::ShiftLeft,
            GameAction::ShiftRight,
            GameAction::Drop,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }
}
