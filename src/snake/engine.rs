use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::{
    config::SnakeConfig,
    direction::Direction,
    state::{CollisionType, Position, Snake, SnakeState},
};

/// Information about a step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
    /// Whether the snake filled the grid this step
    pub filled_grid: bool,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    /// State after the step
    pub state: SnakeState,
    /// Whether the game has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

/// The game engine that handles all game logic.
///
/// Transitions take the current state by reference and hand back a new one.
/// The engine only holds the configuration and the RNG used to place food.
pub struct SnakeEngine {
    config: SnakeConfig,
    rng: StdRng,
}

impl SnakeEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: SnakeConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    /// Build a fresh, paused game
    pub fn reset(&mut self) -> SnakeState {
        let center = (self.config.grid_size / 2) as i32;

        let snake = Snake::new(
            Position::new(center, center),
            Direction::Right,
            self.config.initial_length,
        );

        let food = self.place_food(&snake);
        let mut state = SnakeState::new(snake, food, self.config.grid_size);
        if food.is_none() {
            state.won = true;
            state.game_over = true;
        }

        info!(
            "snake reset: {}x{} grid, food at {:?}",
            state.grid_size, state.grid_size, state.food
        );
        state
    }

    /// Execute one tick of the game.
    ///
    /// A paused or finished game comes back unchanged.
    pub fn advance(&mut self, state: &SnakeState) -> StepResult {
        if state.paused || state.game_over {
            return StepResult {
                state: state.clone(),
                terminated: state.game_over,
                info: StepInfo::default(),
            };
        }

        let direction = state.next_direction;
        let new_head = state.snake.head().moved_in_direction(direction);

        if let Some(collision_type) = check_collision(state, new_head) {
            let mut next = state.clone();
            next.game_over = true;
            next.paused = true;

            info!(
                "snake game over: {:?} at {:?}, score {}",
                collision_type, new_head, state.score
            );
            return StepResult {
                state: next,
                terminated: true,
                info: StepInfo {
                    collision_type: Some(collision_type),
                    ..StepInfo::default()
                },
            };
        }

        let ate_food = state.food == Some(new_head);

        let mut next = state.clone();
        next.snake.advance_to(new_head, ate_food);
        next.snake.direction = direction;
        next.steps += 1;

        let mut info = StepInfo {
            ate_food,
            ..StepInfo::default()
        };

        if ate_food {
            next.score += 1;
            next.food = self.place_food(&next.snake);

            if next.food.is_none() {
                next.won = true;
                next.game_over = true;
                next.paused = true;
                info.filled_grid = true;
                info!("snake filled the grid with score {}", next.score);
            }
        }

        StepResult {
            terminated: next.game_over,
            state: next,
            info,
        }
    }

    /// Pick a uniformly random free cell, or `None` when the snake covers the grid
    fn place_food(&mut self, snake: &Snake) -> Option<Position> {
        let size = self.config.grid_size as i32;
        let free: Vec<Position> = (0..size)
            .flat_map(|y| (0..size).map(move |x| Position::new(x, y)))
            .filter(|pos| !snake.occupies(*pos))
            .collect();

        let food = free.choose(&mut self.rng).copied();
        debug!("food placed at {:?} ({} free cells)", food, free.len());
        food
    }
}

/// Check if the new head position causes a collision
fn check_collision(state: &SnakeState, pos: Position) -> Option<CollisionType> {
    if !state.is_in_bounds(pos) {
        return Some(CollisionType::Wall);
    }

    // The tail still counts: it has not moved out yet.
    if state.is_occupied_by_snake(pos) {
        return Some(CollisionType::SelfCollision);
    }

    None
}

/// Buffer a new heading for the next tick.
///
/// Reversals of the current heading and input after game over are dropped.
/// An accepted heading also resumes a paused game.
pub fn request_direction(state: &SnakeState, direction: Direction) -> SnakeState {
    if state.game_over || state.snake.direction.is_opposite(direction) {
        return state.clone();
    }

    if direction != state.next_direction {
        debug!("heading buffered: {:?}", direction);
    }

    let mut next = state.clone();
    next.next_direction = direction;
    next.paused = false;
    next
}

/// Flip between paused and running; a finished game stays finished
pub fn toggle_pause(state: &SnakeState) -> SnakeState {
    let mut next = state.clone();
    if !state.game_over {
        next.paused = !state.paused;
    }
    next
}
