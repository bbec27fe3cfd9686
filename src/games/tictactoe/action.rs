//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. The engine records every
//! accepted move so shells can log or replay a game.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a mark placed at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Board index (0-8) of the placement.
    pub cell: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, cell: usize) -> Self {
        Self { mark, cell }
    }

    /// Returns the mark of this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the cell of this move.
    pub fn cell(&self) -> usize {
        self.cell
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match Position::from_index(self.cell) {
            Some(pos) => write!(f, "{} -> {}", self.mark, pos.label()),
            None => write!(f, "{} -> cell {}", self.mark, self.cell),
        }
    }
}

/// Reasons a move is refused. The engine state is unchanged when any fires.
///
/// Variants are listed in the order the preconditions are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game already ended in a win or draw.
    #[display("Game is already over")]
    GameOver,

    /// The cell index is outside 0-8.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The mark does not match the side to move.
    #[display("It's not {}'s turn (expected {})", attempted, expected)]
    WrongTurn {
        /// Mark whose turn it is.
        expected: Mark,
        /// Mark that tried to move.
        attempted: Mark,
    },
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display_uses_label() {
        assert_eq!(Move::new(Mark::X, 4).to_string(), "X -> Center");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(MoveError::CellOccupied(3).to_string(), "Cell 3 is already occupied");
        let err = MoveError::WrongTurn {
            expected: Mark::X,
            attempted: Mark::O,
        };
        assert_eq!(err.to_string(), "It's not O's turn (expected X)");
    }
}
