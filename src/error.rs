//! Error types for configuration loading and validation

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a game configuration.
///
/// Gameplay itself never errors; invalid moves are ignored by the engines.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("grid size {size} out of range (expected {min}..={max})")]
    GridSize { size: usize, min: usize, max: usize },

    #[error("initial snake length {length} does not fit a {grid_size}x{grid_size} grid (max {max})")]
    InitialLength {
        length: usize,
        grid_size: usize,
        max: usize,
    },

    #[error("{name} must be greater than zero")]
    ZeroInterval { name: &'static str },

    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
