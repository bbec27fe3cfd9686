//! Rules engine for tic-tac-toe.
//!
//! [`Game`] owns the board and status and is the only place the board is
//! mutated. Every move goes through [`Game::apply_move`].

use super::action::{Move, MoveError};
use super::rules::{check_winner, is_full};
use super::types::{Board, GameStatus, Mark, CELL_COUNT};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::InProgress { turn: Mark::X },
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Discards the current game and starts a fresh one.
    ///
    /// Callable at any time, including mid-game or after a terminal status.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> (Board, GameStatus) {
        *self = Self::new();
        debug!("Game reset");
        (self.board, self.status)
    }

    /// Places `mark` at `cell` and returns the new status.
    ///
    /// Preconditions are checked in this order: the game is in progress,
    /// the cell is in range, the cell is empty, and `mark` is the side to
    /// move. Nothing changes when a check fails.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, cell: usize, mark: Mark) -> Result<GameStatus, MoveError> {
        let turn = match self.status {
            GameStatus::InProgress { turn } => turn,
            _ => return Err(MoveError::GameOver),
        };

        if cell >= CELL_COUNT {
            return Err(MoveError::OutOfRange(cell));
        }

        if !self.board.is_empty(cell) {
            return Err(MoveError::CellOccupied(cell));
        }

        if mark != turn {
            return Err(MoveError::WrongTurn {
                expected: turn,
                attempted: mark,
            });
        }

        self.board.place(cell, mark);
        self.history.push(Move::new(mark, cell));
        self.status = Self::evaluate(&self.board, mark);

        if self.status.is_terminal() {
            info!(status = ?self.status, moves = self.history.len(), "Game finished");
        } else {
            debug!(cell, %mark, "Move applied");
        }

        Ok(self.status)
    }

    /// Status of `board` after `last` has just moved.
    fn evaluate(board: &Board, last: Mark) -> GameStatus {
        if let Some((winner, line)) = check_winner(board) {
            GameStatus::Won { winner, line }
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                turn: last.opponent(),
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
