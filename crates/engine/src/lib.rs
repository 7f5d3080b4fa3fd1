//! Engine runtime - drives a [`GameState`](blockfall_core::GameState) from a
//! timer and a command channel.
//!
//! The game core is synchronous and knows nothing about time. This crate owns
//! the gravity timer and serializes every tick and command through one task:
//!
//! - Commands are applied strictly in arrival order, each to completion
//! - The timer only runs while the game is `Running`, and restarts a full
//!   period after every resume or (re)start
//! - After every change a fresh [`GameSnapshot`](blockfall_core::GameSnapshot)
//!   is published on a watch channel
//!
//! # Configuration
//!
//! [`EngineConfig::from_env`] reads:
//!
//! - `BLOCKFALL_TICK_MS`: Gravity period in milliseconds (default: 800)
//! - `BLOCKFALL_SEED`: Bag seed (default: system entropy)
//! - `BLOCKFALL_COMMAND_BUFFER`: Command channel capacity (default: 64)
//!
//! # Example
//!
//! ```no_run
//! use blockfall_engine::{Engine, EngineConfig};
//! use blockfall_types::GameAction;
//!
//! # async fn demo() -> blockfall_engine::Result<()> {
//! let handle = Engine::spawn(EngineConfig::default().with_seed(7))?;
//! handle.send(GameAction::Start).await?;
//! handle.send(GameAction::HardDrop).await?;
//!
//! let snapshot = handle.snapshot();
//! println!("score: {}", snapshot.score);
//!
//! let final_state = handle.shutdown().await?;
//! # let _ = final_state;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod runtime;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use runtime::{ActionSender, Engine, EngineCommand, EngineHandle};
