//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

use super::rules::WinLine;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A player's symbol.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELL_COUNT],
        }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if the square at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Indices of all empty squares, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Returns a copy of this board with `mark` written at `index`.
    ///
    /// Used for hypothetical placements; the receiver is left untouched.
    /// Out-of-range indices return an unchanged copy.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut next = *self;
        if let Some(square) = next.squares.get_mut(index) {
            *square = Square::Occupied(mark);
        }
        next
    }

    /// Writes `mark` at `index`. Bounds and occupancy are checked by the engine.
    pub(super) fn place(&mut self, index: usize, mark: Mark) {
        if let Some(square) = self.squares.get_mut(index) {
            *square = Square::Occupied(mark);
        }
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based key.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.squares[index] {
                    Square::Empty => (index + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; `turn` moves next.
    InProgress {
        /// Mark to move next.
        turn: Mark,
    },
    /// Game ended in a win.
    Won {
        /// The winning mark.
        winner: Mark,
        /// The first completed line in declaration order.
        line: WinLine,
    },
    /// Board is full with no completed line.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// Mark to move, if the game is still running.
    pub fn turn(&self) -> Option<Mark> {
        match self {
            GameStatus::InProgress { turn } => Some(*turn),
            _ => None,
        }
    }

    /// The winner, if the game was won.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { turn } => write!(f, "Player {}'s turn", turn),
            GameStatus::Won { winner, .. } => write!(f, "Player {} wins!", winner),
            GameStatus::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// Who the second seat belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    TwoPlayer,
    /// Human plays X, the heuristic opponent plays O.
    VsComputer,
}

impl GameMode {
    /// Returns display name.
    pub fn label(self) -> &'static str {
        match self {
            GameMode::TwoPlayer => "Two Player",
            GameMode::VsComputer => "Vs Computer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_with_mark_leaves_original() {
        let board = Board::new();
        let next = board.with_mark(4, Mark::O);
        assert!(board.is_empty(4));
        assert_eq!(next.get(4), Some(Square::Occupied(Mark::O)));
        assert_eq!(board.with_mark(9, Mark::X), board);
    }

    #[test]
    fn test_display_shows_keys_for_empty() {
        let board = Board::new().with_mark(0, Mark::X).with_mark(4, Mark::O);
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_status_winner_only_for_wins() {
        let won = GameStatus::Won {
            winner: Mark::O,
            line: crate::games::tictactoe::WIN_LINES[3],
        };
        assert_eq!(won.winner(), Some(Mark::O));
        assert_eq!(GameStatus::Draw.winner(), None);
        assert_eq!(GameStatus::InProgress { turn: Mark::X }.winner(), None);
    }

    #[test]
    fn test_mode_parses_kebab_case() {
        assert_eq!("vs-computer".parse::<GameMode>().ok(), Some(GameMode::VsComputer));
        assert_eq!("two-player".parse::<GameMode>().ok(), Some(GameMode::TwoPlayer));
        assert_eq!(GameMode::VsComputer.to_string(), "vs-computer");
    }
}
