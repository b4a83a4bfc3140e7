use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Configuration for the snake game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    /// Width and height of the square grid
    pub grid_size: usize,
    /// Initial length of the snake
    pub initial_length: usize,
    /// Milliseconds between simulation ticks
    pub tick_interval_ms: u64,
    /// Seed for food placement; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            grid_size: Self::DEFAULT_GRID_SIZE,
            initial_length: 3,
            tick_interval_ms: 140,
            seed: None,
        }
    }
}

impl SnakeConfig {
    pub const DEFAULT_GRID_SIZE: usize = 16;
    pub const MIN_GRID_SIZE: usize = 4;
    pub const MAX_GRID_SIZE: usize = 64;

    /// Create a new configuration with custom grid size
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Same configuration with a fixed food seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Longest snake that fits to the left of the centre cell
    pub fn max_initial_length(&self) -> usize {
        self.grid_size / 2 + 1
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !(Self::MIN_GRID_SIZE..=Self::MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(ConfigError::GridSize {
                size: self.grid_size,
                min: Self::MIN_GRID_SIZE,
                max: Self::MAX_GRID_SIZE,
            });
        }

        if self.initial_length == 0 || self.initial_length > self.max_initial_length() {
            return Err(ConfigError::InitialLength {
                length: self.initial_length,
                grid_size: self.grid_size,
                max: self.max_initial_length(),
            });
        }

        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval {
                name: "tick_interval_ms",
            });
        }

        Ok(())
    }
}
