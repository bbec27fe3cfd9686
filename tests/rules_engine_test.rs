//! Tests for the tic-tac-toe rules engine.

use noughts::{Board, Game, GameStatus, Mark, MoveError, Square, WIN_LINES};

/// Plays `cells` alternately starting with X, asserting each move is accepted.
fn play(cells: &[usize]) -> Game {
    let mut game = Game::new();
    for &cell in cells {
        let turn = game.status().turn().expect("game still running");
        game.apply_move(cell, turn).unwrap();
    }
    game
}

#[test]
fn test_fresh_game() {
    let game = Game::new();
    assert_eq!(*game.board(), Board::new());
    assert_eq!(game.status(), GameStatus::InProgress { turn: Mark::X });
    assert!(game.history().is_empty());
}

#[test]
fn test_turns_alternate() {
    let mut game = Game::new();
    assert_eq!(
        game.apply_move(0, Mark::X),
        Ok(GameStatus::InProgress { turn: Mark::O })
    );
    assert_eq!(
        game.apply_move(4, Mark::O),
        Ok(GameStatus::InProgress { turn: Mark::X })
    );
    assert_eq!(
        game.apply_move(8, Mark::O),
        Err(MoveError::WrongTurn {
            expected: Mark::X,
            attempted: Mark::O
        })
    );
}

#[test]
fn test_occupied_cell_rejected_without_change() {
    let mut game = play(&[4]);
    let before = game.clone();

    assert_eq!(game.apply_move(4, Mark::O), Err(MoveError::CellOccupied(4)));
    assert_eq!(game, before);
    assert_eq!(game.board().get(4), Some(Square::Occupied(Mark::X)));
}

#[test]
fn test_out_of_range_rejected() {
    let mut game = Game::new();
    assert_eq!(game.apply_move(9, Mark::X), Err(MoveError::OutOfRange(9)));
    assert_eq!(game, Game::new());
}

#[test]
fn test_every_line_wins() {
    for (i, line) in WIN_LINES.iter().enumerate() {
        let [a, b, c] = line.cells();
        let mut others = (0..9).filter(|cell| !line.contains(*cell));
        let o1 = others.next().unwrap();
        let o2 = others.next().unwrap();

        let mut game = Game::new();
        for (cell, mark) in [(a, Mark::X), (o1, Mark::O), (b, Mark::X), (o2, Mark::O)] {
            let status = game.apply_move(cell, mark).unwrap();
            assert!(!status.is_terminal(), "line {i} ended early at cell {cell}");
        }

        assert_eq!(
            game.apply_move(c, Mark::X),
            Ok(GameStatus::Won {
                winner: Mark::X,
                line: *line
            }),
            "line {i}"
        );
    }
}

#[test]
fn test_end_to_end_win() {
    let game = play(&[0, 4, 1, 5, 2]);
    assert_eq!(
        game.status(),
        GameStatus::Won {
            winner: Mark::X,
            line: WIN_LINES[0]
        }
    );
    assert_eq!(game.history().len(), 5);
}

#[test]
fn test_end_to_end_draw() {
    let game = play(&[0, 1, 2, 3, 4, 6, 5, 8, 7]);
    assert_eq!(game.status(), GameStatus::Draw);
    assert!(game.board().empty_cells().is_empty());
    let xs = game
        .board()
        .squares()
        .iter()
        .filter(|square| **square == Square::Occupied(Mark::X))
        .count();
    assert_eq!(xs, 5);
}

#[test]
fn test_finished_game_refuses_moves() {
    let mut game = play(&[0, 4, 1, 5, 2]);
    let before = game.clone();

    assert_eq!(game.apply_move(8, Mark::O), Err(MoveError::GameOver));
    // GameOver is checked before the cell index.
    assert_eq!(game.apply_move(42, Mark::O), Err(MoveError::GameOver));
    assert_eq!(game, before);
}

#[test]
fn test_reset_is_idempotent() {
    let mut game = play(&[0, 4, 1]);

    let first = game.reset();
    let second = game.reset();

    assert_eq!(first, second);
    assert_eq!(first, (Board::new(), GameStatus::InProgress { turn: Mark::X }));
    assert!(game.history().is_empty());
}
