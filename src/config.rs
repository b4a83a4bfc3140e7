//! Application configuration
//!
//! Values come from built-in defaults, optionally replaced by a JSON file, and
//! finally by command-line flags applied in `main`.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::snake::SnakeConfig;

/// Top-level configuration shared by both games
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Snake game settings
    pub snake: SnakeConfig,
    /// Milliseconds between redraws
    pub render_interval_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            snake: SnakeConfig::default(),
            render_interval_ms: 33,
        }
    }
}

impl AppConfig {
    /// Read a JSON config file; missing keys keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = serde_json::from_str(&text)?;
        Ok(config)
    }

    /// Defaults, or the file at `path` when given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_json_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.render_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval {
                name: "render_interval_ms",
            });
        }
        self.snake.validate()
    }
}
