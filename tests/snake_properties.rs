//! Property-based tests for the snake simulation step.

use grid_games::snake::{
    CollisionType, Direction, Position, Snake, SnakeConfig, SnakeEngine, SnakeState,
    request_direction, toggle_pause,
};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Input {
    Steer(Direction),
    Pause,
    Tick,
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

/// Mostly ticks, with steering and the occasional pause mixed in
fn arb_inputs() -> impl Strategy<Value = Vec<Input>> {
    let input = prop_oneof![
        6 => Just(Input::Tick),
        3 => arb_direction().prop_map(Input::Steer),
        1 => Just(Input::Pause),
    ];
    proptest::collection::vec(input, 1..200)
}

fn check_invariants(state: &SnakeState) -> Result<(), TestCaseError> {
    prop_assert_eq!(state.snake.len(), state.score as usize + 3);
    prop_assert!(state.snake.is_contiguous());
    prop_assert!(state.snake.body.iter().all(|p| state.is_in_bounds(*p)));
    if let Some(food) = state.food {
        prop_assert!(!state.snake.occupies(food));
        prop_assert!(state.is_in_bounds(food));
    }
    Ok(())
}

proptest! {
    #[test]
    fn play_preserves_invariants(seed in any::<u64>(), inputs in arb_inputs()) {
        let mut engine = SnakeEngine::new(SnakeConfig::default().with_seed(seed));
        let mut state = engine.reset();
        check_invariants(&state)?;

        for input in inputs {
            match input {
                Input::Steer(direction) => {
                    let next = request_direction(&state, direction);
                    if state.snake.direction.is_opposite(direction) || state.game_over {
                        prop_assert_eq!(next.next_direction, state.next_direction);
                        prop_assert_eq!(next.paused, state.paused);
                    } else {
                        prop_assert_eq!(next.next_direction, direction);
                        prop_assert!(!next.paused);
                    }
                    state = next;
                }
                Input::Pause => {
                    let next = toggle_pause(&state);
                    let expected = if state.game_over { state.paused } else { !state.paused };
                    prop_assert_eq!(next.paused, expected);
                    state = next;
                }
                Input::Tick => {
                    let result = engine.advance(&state);
                    let next = result.state;

                    if state.paused || state.game_over {
                        prop_assert_eq!(&next, &state);
                    } else if result.info.collision_type.is_some() {
                        prop_assert!(next.game_over);
                        prop_assert!(next.paused);
                        prop_assert_eq!(&next.snake, &state.snake);
                        prop_assert_eq!(next.score, state.score);
                    } else {
                        let expected_head = state.snake.head().moved_in_direction(state.next_direction);
                        prop_assert_eq!(next.snake.head(), expected_head);
                        prop_assert_eq!(next.snake.direction, state.next_direction);
                        let grown = usize::from(result.info.ate_food);
                        prop_assert_eq!(next.snake.len(), state.snake.len() + grown);
                        prop_assert_eq!(next.score, state.score + grown as u32);
                    }
                    state = next;
                }
            }
            check_invariants(&state)?;
        }
    }

    #[test]
    fn leaving_the_grid_ends_the_game(offset in 0i32..16, edge in arb_direction()) {
        // Head on the edge facing outwards, body trailing inwards
        let head = match edge {
            Direction::Up => Position::new(offset, 0),
            Direction::Down => Position::new(offset, 15),
            Direction::Left => Position::new(0, offset),
            Direction::Right => Position::new(15, offset),
        };
        let snake = Snake::new(head, edge, 3);
        let mut state = SnakeState::new(snake, None, 16);
        state.paused = false;

        let mut engine = SnakeEngine::new(SnakeConfig::default().with_seed(0));
        let result = engine.advance(&state);

        prop_assert!(result.state.game_over);
        prop_assert!(result.state.paused);
        prop_assert_eq!(result.info.collision_type, Some(CollisionType::Wall));
        prop_assert_eq!(&result.state.snake, &state.snake);
    }

    #[test]
    fn reversal_never_changes_heading(seed in any::<u64>(), dir in arb_direction()) {
        let mut engine = SnakeEngine::new(SnakeConfig::default().with_seed(seed));
        let mut state = engine.reset();
        state.snake.direction = dir;
        state.next_direction = dir;

        let next = request_direction(&state, dir.opposite());
        prop_assert_eq!(next.next_direction, dir);
    }
}

#[test]
fn first_step_without_food() {
    let mut engine = SnakeEngine::new(SnakeConfig::default().with_seed(3));
    let mut state = engine.reset();
    assert_eq!(
        state.snake.body,
        vec![Position::new(8, 8), Position::new(7, 8), Position::new(6, 8)]
    );
    assert!(!state.snake.occupies(state.food.unwrap()));

    state.food = Some(Position::new(0, 0));
    state.paused = false;
    let result = engine.advance(&state);

    assert_eq!(
        result.state.snake.body,
        vec![Position::new(9, 8), Position::new(8, 8), Position::new(7, 8)]
    );
    assert_eq!(result.state.score, 0);
}

#[test]
fn stepping_off_the_right_edge() {
    let snake = Snake::new(Position::new(15, 8), Direction::Right, 3);
    let mut state = SnakeState::new(snake.clone(), Some(Position::new(0, 0)), 16);
    state.paused = false;

    let mut engine = SnakeEngine::new(SnakeConfig::default());
    let result = engine.advance(&state);

    assert!(result.state.game_over);
    assert!(result.state.paused);
    assert_eq!(result.state.snake, snake);
}
