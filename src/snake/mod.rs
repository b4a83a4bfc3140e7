//! Core snake simulation
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Every transition takes a state snapshot and returns the next one, so the
//! terminal front-end only has to swap its copy and redraw.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::SnakeConfig;
pub use direction::Direction;
pub use engine::{SnakeEngine, StepInfo, StepResult, request_direction, toggle_pause};
pub use state::{CollisionType, Position, Snake, SnakePhase, SnakeState};
