//! Property tests for the rules engine.

use noughts::{Board, Game, GameStatus, Mark, Square};
use proptest::prelude::*;

fn marks_on(board: &Board, mark: Mark) -> usize {
    board
        .squares()
        .iter()
        .filter(|square| **square == Square::Occupied(mark))
        .count()
}

fn any_mark() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::X), Just(Mark::O)]
}

proptest! {
    #[test]
    fn accepted_moves_alternate_from_x(cells in prop::collection::vec(0usize..9, 0..20)) {
        let mut game = Game::new();
        for cell in cells {
            if let GameStatus::InProgress { turn } = game.status() {
                let _ = game.apply_move(cell, turn);
            }
        }

        for (i, mv) in game.history().iter().enumerate() {
            let expected = if i % 2 == 0 { Mark::X } else { Mark::O };
            prop_assert_eq!(mv.mark(), expected);
        }

        let x = marks_on(game.board(), Mark::X);
        let o = marks_on(game.board(), Mark::O);
        prop_assert!(x == o || x == o + 1);
        prop_assert_eq!(x + o, game.history().len());
    }

    #[test]
    fn refused_moves_change_nothing(
        attempts in prop::collection::vec((0usize..12, any_mark()), 0..30)
    ) {
        let mut game = Game::new();
        for (cell, mark) in attempts {
            let before = game.clone();
            match game.apply_move(cell, mark) {
                Ok(_) => {
                    prop_assert_eq!(game.history().len(), before.history().len() + 1);
                    prop_assert!(before.board().is_empty(cell));
                }
                Err(_) => prop_assert_eq!(&game, &before),
            }
        }
    }

    #[test]
    fn no_moves_after_terminal(cells in prop::collection::vec(0usize..9, 0..40)) {
        let mut game = Game::new();
        for cell in cells {
            let was_terminal = game.status().is_terminal();
            let mark = game.status().turn().unwrap_or(Mark::X);
            let result = game.apply_move(cell, mark);
            if was_terminal {
                prop_assert!(result.is_err());
            }
        }
        prop_assert!(game.history().len() <= 9);
    }
}
