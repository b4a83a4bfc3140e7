pub mod snake;
pub mod terminal;
pub mod tictactoe;

pub use snake::SnakeMode;
pub use tictactoe::TicTacToeMode;
