//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management. It has **no
//! dependencies** on rendering, timers, or I/O:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Every rule is reachable from plain method calls
//! - **Portable**: Runs inside a browser host, a terminal runner, or headless
//!
//! # Module Structure
//!
//! - [`pieces`]: Tetromino shapes, rotation with horizontal wall kicks, previews
//! - [`rng`]: 7-bag random piece generation
//! - [`board`]: 10x20 grid of locked cells and line clearing
//! - [`collision`]: Legality test for a piece placement
//! - [`game_state`]: The state machine tying everything together
//! - [`snapshot`]: Immutable render-facing copy of the state
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: Every piece appears once per shuffled cycle of seven
//! - **Rotation**: Four fixed states per piece; failed rotations retry at
//!   horizontal offsets -1, +1, -2, +2
//! - **Gravity**: One row per external tick; a blocked step down locks the piece
//! - **Hold**: Store one piece for later use (once per spawned piece)
//! - **Scoring**: 100 points per cleared row
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{GameAction, GameStatus};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateRight);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.status(), GameStatus::Running);
//! assert_eq!(game.score(), 0); // one piece never completes a row
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::is_legal;
pub use game_state::{GameState, Tetromino};
pub use pieces::{get_shape, preview_grid, try_rotate, PreviewGrid};
pub use rng::PieceBag;
pub use snapshot::{ActiveSnapshot, GameSnapshot, VisibleBoard};
