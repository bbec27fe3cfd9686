//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three cell indices that win when uniformly occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([usize; 3]);

impl WinLine {
    /// Cell indices of this line, in scan order.
    pub fn cells(self) -> [usize; 3] {
        self.0
    }

    /// Returns true if `index` lies on this line.
    pub fn contains(self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// Returns the mark completing this line, if all three cells hold it.
    ///
    /// This is the one line-completion test in the crate: the engine's win
    /// scan and the opponent's win/block search both go through it.
    pub fn completed_by(self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.0;
        let first = board.get(a)?;
        if first != Square::Empty && Some(first) == board.get(b) && Some(first) == board.get(c) {
            first.mark()
        } else {
            None
        }
    }
}

/// All winning lines in declaration order: rows top-to-bottom,
/// columns left-to-right, then the two diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([0, 1, 2]),
    WinLine([3, 4, 5]),
    WinLine([6, 7, 8]),
    // Columns
    WinLine([0, 3, 6]),
    WinLine([1, 4, 7]),
    WinLine([2, 5, 8]),
    // Diagonals
    WinLine([0, 4, 8]),
    WinLine([2, 4, 6]),
];

/// Checks if there is a winner on the board.
///
/// Returns the winner and the first completed line in declaration order.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Mark, WinLine)> {
    WIN_LINES
        .iter()
        .find_map(|line| line.completed_by(board).map(|mark| (mark, *line)))
}
