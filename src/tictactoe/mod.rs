//! Core tic-tac-toe rules
//!
//! Pure board bookkeeping and the move evaluator; no I/O.

pub mod board;
pub mod engine;

pub use board::{Board, CELL_COUNT, Player, WIN_LINES};
pub use engine::{MoveResult, Outcome, TicTacToeState, apply_move};
