//! ratatui views for both games

pub mod snake_renderer;
pub mod tictactoe_renderer;

pub use snake_renderer::SnakeRenderer;
pub use tictactoe_renderer::{BoardLayout, TicTacToeRenderer};
