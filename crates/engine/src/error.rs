/// Error types for the engine runtime
use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur while configuring or talking to the engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// Gravity period outside the accepted range
    #[error("Invalid tick interval: {0}ms (expected {min}..={max}ms)", min = blockfall_types::MIN_TICK_MS, max = blockfall_types::MAX_TICK_MS)]
    InvalidTickInterval(u64),

    /// Command buffer must hold at least one command
    #[error("Invalid command buffer size: {0}")]
    InvalidCommandBuffer(usize),

    /// Environment variable present but unparsable
    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnv {
        /// Variable name
        var: &'static str,
        /// Raw value found
        value: String,
    },

    /// The engine task is gone (shut down or panicked)
    #[error("Engine stopped")]
    Stopped,

    /// The engine task could not be joined
    #[error("Engine task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
