//! Input mapping (engine-facing).
//!
//! Independent of any UI framework: maps browser key identifiers and
//! `crossterm` key events into [`crate::types::GameAction`], and filters
//! actions the current [`crate::types::GameStatus`] would reject anyway.

pub mod map;

pub use blockfall_types as types;

pub use map::{gate, handle_key_event, map_key_name, should_quit};
