//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. There is no
//! repeat handling in the game, so whatever the terminal delivers as a press or
//! auto-repeat becomes one action.

pub mod map;

pub use blockfall_types as types;

pub use map::{action_for_key, should_quit};
