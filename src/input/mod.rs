//! Keyboard and mouse translation into game commands

pub mod handler;

pub use handler::{InputHandler, SnakeCommand, TicTacToeCommand};
