//! Property-based tests for the tic-tac-toe evaluator.

use grid_games::tictactoe::{
    Board, CELL_COUNT, Outcome, Player, TicTacToeState, WIN_LINES, apply_move,
};
use proptest::prelude::*;

/// A random sequence of move attempts, including occupied and out-of-range indices
fn arb_moves() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(0usize..12, 0..20)
}

fn arb_cell() -> impl Strategy<Value = Option<Player>> {
    prop_oneof![Just(None), Just(Some(Player::X)), Just(Some(Player::O))]
}

fn arb_board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(arb_cell()).prop_map(Board::from_cells)
}

proptest! {
    #[test]
    fn filled_cells_never_change(moves in arb_moves()) {
        let mut state = TicTacToeState::new();
        for index in moves {
            let before = state.board;
            let result = apply_move(&state, index);
            for i in 0..CELL_COUNT {
                if before.get(i).is_some() {
                    prop_assert_eq!(result.state.board.get(i), before.get(i));
                }
            }
            prop_assert!(result.state.board.filled_count() <= before.filled_count() + 1);
            state = result.state;
        }
    }

    #[test]
    fn nothing_is_accepted_after_the_game_ends(moves in arb_moves(), extra in 0usize..9) {
        let mut state = TicTacToeState::new();
        for index in moves {
            state = apply_move(&state, index).state;
        }
        if !state.active {
            let result = apply_move(&state, extra);
            prop_assert!(!result.accepted);
            prop_assert_eq!(result.state, state);
        }
    }

    #[test]
    fn outcome_matches_board(moves in arb_moves()) {
        let mut state = TicTacToeState::new();
        for index in moves {
            state = apply_move(&state, index).state;
        }
        match state.outcome {
            Outcome::Win(player) => {
                let line = state.winning_line.expect("a win records its line");
                prop_assert!(line.iter().all(|&i| state.board.get(i) == Some(player)));
                prop_assert!(!state.active);
            }
            Outcome::Draw => {
                prop_assert!(state.board.is_full());
                prop_assert!(state.board.winner().is_none());
                prop_assert!(!state.active);
            }
            Outcome::Continue => {
                prop_assert!(state.active);
                prop_assert!(state.board.winner().is_none());
                prop_assert!(!state.board.is_full());
            }
        }
    }

    #[test]
    fn winner_agrees_with_line_scan(board in arb_board()) {
        let has_line = WIN_LINES.iter().any(|&[a, b, c]| {
            board.get(a).is_some() && board.get(a) == board.get(b) && board.get(a) == board.get(c)
        });
        prop_assert_eq!(board.winner().is_some(), has_line);
    }
}

#[test]
fn completing_any_line_wins() {
    for line in WIN_LINES {
        // X takes the line while O answers off it
        let mut state = TicTacToeState::new();
        let spare: Vec<usize> = (0..CELL_COUNT).filter(|i| !line.contains(i)).collect();
        for (turn, &cell) in line.iter().enumerate() {
            state = apply_move(&state, cell).state;
            if turn < 2 {
                state = apply_move(&state, spare[turn]).state;
            }
        }
        assert_eq!(state.outcome, Outcome::Win(Player::X), "line {line:?}");
        assert_eq!(state.winning_line, Some(line));
        assert!(!apply_move(&state, spare[2]).accepted);
    }
}

#[test]
fn row_win_scenario() {
    let state = [0, 4, 1, 5, 2]
        .iter()
        .fold(TicTacToeState::new(), |s, &i| apply_move(&s, i).state);

    assert_eq!(state.outcome, Outcome::Win(Player::X));
    assert_eq!(state.winning_line, Some([0, 1, 2]));
    assert!((6..9).all(|i| state.board.get(i).is_none()));
}

#[test]
fn full_board_without_line_is_draw() {
    use Player::{O, X};
    let board = Board::from_cells([
        Some(X),
        Some(O),
        Some(X),
        Some(O),
        Some(X),
        Some(O),
        Some(O),
        Some(X),
        Some(O),
    ]);
    assert!(board.is_full());
    assert_eq!(board.winner(), None);

    // Same board reached through the evaluator, with O's last cell empty
    let mut cells = *board.cells();
    cells[8] = None;
    let state = TicTacToeState {
        board: Board::from_cells(cells),
        current_player: O,
        ..TicTacToeState::new()
    };
    let result = apply_move(&state, 8);
    assert!(result.terminal);
    assert_eq!(result.outcome, Outcome::Draw);
}
