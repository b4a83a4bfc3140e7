use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// True when the two positions share an edge
    pub fn is_adjacent(&self, other: Position) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current heading
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with given head position and heading, trailing behind the head
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = Vec::with_capacity(length);
        body.push(head);

        let (dx, dy) = direction.delta();
        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(-dx, -dy));
        }

        Self { body, direction }
    }

    /// Build a snake from explicit segments, head first
    pub fn from_segments(body: Vec<Position>, direction: Direction) -> Self {
        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Check if position is covered by any segment, head and tail included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Push a new head; the tail is dropped unless the snake grows
    pub fn advance_to(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Each segment touches the next and no cell repeats
    pub fn is_contiguous(&self) -> bool {
        let adjacent = self.body.windows(2).all(|w| w[0].is_adjacent(w[1]));
        let unique = self
            .body
            .iter()
            .enumerate()
            .all(|(i, pos)| !self.body[i + 1..].contains(pos));
        adjacent && unique
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the grid
    Wall,
    /// Snake ran into one of its own segments
    SelfCollision,
}

/// Where the game stands, derived from the state flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakePhase {
    Paused,
    Running,
    GameOver,
    /// The snake covers every cell
    Won,
}

/// Complete snake game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeState {
    pub snake: Snake,
    /// Heading to apply on the next tick
    pub next_direction: Direction,
    pub food: Option<Position>,
    pub grid_size: usize,
    pub score: u32,
    pub steps: u32,
    pub paused: bool,
    pub game_over: bool,
    pub won: bool,
}

impl SnakeState {
    /// Create a paused game state around the given snake
    pub fn new(snake: Snake, food: Option<Position>, grid_size: usize) -> Self {
        Self {
            next_direction: snake.direction,
            snake,
            food,
            grid_size,
            score: 0,
            steps: 0,
            paused: true,
            game_over: false,
            won: false,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        let size = self.grid_size as i32;
        pos.x >= 0 && pos.x < size && pos.y >= 0 && pos.y < size
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
    }

    pub fn phase(&self) -> SnakePhase {
        if self.won {
            SnakePhase::Won
        } else if self.game_over {
            SnakePhase::GameOver
        } else if self.paused {
            SnakePhase::Paused
        } else {
            SnakePhase::Running
        }
    }

    /// Text for the status area
    pub fn status(&self) -> String {
        match self.phase() {
            SnakePhase::Paused if self.steps == 0 => "Press an arrow key to start".to_string(),
            SnakePhase::Paused => "Paused".to_string(),
            SnakePhase::Running => format!("Score: {}", self.score),
            SnakePhase::GameOver => format!("Game over! Final score: {}", self.score),
            SnakePhase::Won => format!("Board cleared! Final score: {}", self.score),
        }
    }
}
