//! Configuration for the engine runtime

use std::time::Duration;

use crate::error::{EngineError, Result};
use crate::types::{DEFAULT_TICK_MS, MAX_TICK_MS, MIN_TICK_MS};

/// Main configuration for an [`Engine`](crate::Engine)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Gravity period
    pub tick_interval: Duration,

    /// Bag seed (system entropy if None)
    pub seed: Option<u64>,

    /// Capacity of the command channel
    pub command_buffer: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            seed: None,
            command_buffer: 64,
        }
    }
}

impl EngineConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gravity period in milliseconds
    pub fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        self.tick_interval = Duration::from_millis(tick_ms);
        self
    }

    /// Set the bag seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the command channel capacity
    pub fn with_command_buffer(mut self, command_buffer: usize) -> Self {
        self.command_buffer = command_buffer;
        self
    }

    /// Create from environment variables
    ///
    /// Unset variables keep their defaults; set but malformed ones are errors.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(tick_ms) = parse_var(&lookup, "BLOCKFALL_TICK_MS")? {
            config = config.with_tick_ms(tick_ms);
        }
        if let Some(seed) = parse_var(&lookup, "BLOCKFALL_SEED")? {
            config = config.with_seed(seed);
        }
        if let Some(buffer) = parse_var(&lookup, "BLOCKFALL_COMMAND_BUFFER")? {
            config = config.with_command_buffer(buffer);
        }

        config.validate()?;
        Ok(config)
    }

    /// Check ranges
    pub fn validate(&self) -> Result<()> {
        let tick_ms = self.tick_interval.as_millis() as u64;
        if !(MIN_TICK_MS..=MAX_TICK_MS).contains(&tick_ms) {
            return Err(EngineError::InvalidTickInterval(tick_ms));
        }
        if self.command_buffer == 0 {
            return Err(EngineError::InvalidCommandBuffer(self.command_buffer));
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>> {
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| EngineError::InvalidEnv { var, value: raw })
}
