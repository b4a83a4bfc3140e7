use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::board::{Board, Player};

/// How a move left the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
    Continue,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Continue)
    }
}

/// Complete tic-tac-toe game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeState {
    pub board: Board,
    pub current_player: Player,
    /// False once the game is won or drawn
    pub active: bool,
    pub outcome: Outcome,
    /// Cells of the completed line, for highlighting
    pub winning_line: Option<[usize; 3]>,
}

impl TicTacToeState {
    /// Empty board, X to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            active: true,
            outcome: Outcome::Continue,
            winning_line: None,
        }
    }

    /// Text for the status area
    pub fn status(&self) -> String {
        match self.outcome {
            Outcome::Win(player) => format!("{player} wins!"),
            Outcome::Draw => "Draw!".to_string(),
            Outcome::Continue => format!("Turn: {}", self.current_player),
        }
    }
}

impl Default for TicTacToeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a move attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub state: TicTacToeState,
    /// False when the move was ignored
    pub accepted: bool,
    pub terminal: bool,
    pub outcome: Outcome,
}

/// Place the current player's symbol at `index`.
///
/// Moves on a finished game, an occupied cell, or an index past 8 are ignored:
/// the state comes back unchanged with `accepted == false`.
pub fn apply_move(state: &TicTacToeState, index: usize) -> MoveResult {
    let player = state.current_player;
    let board = match state.board.with_move(index, player) {
        Some(board) if state.active => board,
        _ => {
            debug!("ignored move at {index} by {player}");
            return MoveResult {
                state: state.clone(),
                accepted: false,
                terminal: !state.active,
                outcome: state.outcome,
            };
        }
    };

    let mut next = state.clone();
    next.board = board;

    if let Some((winner, line)) = board.winner() {
        next.outcome = Outcome::Win(winner);
        next.winning_line = Some(line);
        next.active = false;
        info!("tic-tac-toe: {winner} wins via {line:?}");
    } else if board.is_full() {
        next.outcome = Outcome::Draw;
        next.active = false;
        info!("tic-tac-toe: draw");
    } else {
        next.current_player = player.other();
    }

    MoveResult {
        accepted: true,
        terminal: next.outcome.is_terminal(),
        outcome: next.outcome,
        state: next,
    }
}
