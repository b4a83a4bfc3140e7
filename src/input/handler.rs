use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::snake::Direction;

/// What a key press means during a snake game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeCommand {
    Steer(Direction),
    TogglePause,
    Restart,
    Quit,
    None,
}

/// What a key press or click means during a tic-tac-toe game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicTacToeCommand {
    /// Shift the cursor by (columns, rows)
    MoveCursor(i32, i32),
    /// Mark the cell under the cursor
    Place,
    /// Mark a cell by board index
    PlaceAt(usize),
    /// Left click at a terminal column/row
    Click { column: u16, row: u16 },
    Restart,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Arrow keys and WASD, shared by both games
    fn arrow(key: &KeyEvent) -> Option<Direction> {
        match key.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
            _ => None,
        }
    }

    fn is_quit(key: &KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }
        matches!(
            key.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        )
    }

    fn is_restart(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
    }

    pub fn snake_key(&self, key: KeyEvent) -> SnakeCommand {
        if Self::is_quit(&key) {
            return SnakeCommand::Quit;
        }
        if Self::is_restart(&key) {
            return SnakeCommand::Restart;
        }
        if let Some(direction) = Self::arrow(&key) {
            return SnakeCommand::Steer(direction);
        }

        match key.code {
            KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
                SnakeCommand::TogglePause
            }
            _ => SnakeCommand::None,
        }
    }

    pub fn tictactoe_key(&self, key: KeyEvent) -> TicTacToeCommand {
        if Self::is_quit(&key) {
            return TicTacToeCommand::Quit;
        }
        if Self::is_restart(&key) {
            return TicTacToeCommand::Restart;
        }
        if let Some(direction) = Self::arrow(&key) {
            let (dx, dy) = direction.delta();
            return TicTacToeCommand::MoveCursor(dx, dy);
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => TicTacToeCommand::Place,
            KeyCode::Char(c @ '1'..='9') => TicTacToeCommand::PlaceAt(c as usize - '1' as usize),
            _ => TicTacToeCommand::None,
        }
    }

    pub fn tictactoe_mouse(&self, mouse: MouseEvent) -> TicTacToeCommand {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => TicTacToeCommand::Click {
                column: mouse.column,
                row: mouse.row,
            },
            _ => TicTacToeCommand::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
