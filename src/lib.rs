//! Grid Games - terminal tic-tac-toe and snake
//!
//! This library provides:
//! - Pure game cores (tictactoe and snake modules), testable without a terminal
//! - Keyboard and mouse translation (input module)
//! - TUI rendering with ratatui (render module)
//! - Interactive sessions that own the game state (modes module)

pub mod config;
pub mod error;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod snake;
pub mod tictactoe;

pub use config::AppConfig;
pub use error::ConfigError;
