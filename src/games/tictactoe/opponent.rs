//! Heuristic computer opponent.
//!
//! A greedy one-ply player: win if possible, otherwise block, otherwise
//! prefer the center, then a random corner, then any random cell. It does
//! not look for forks, so it can be beaten.

use super::rules::WIN_LINES;
use super::types::{Board, Mark};
use super::Position;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Seeded random source for the opponent's tie-breaks.
///
/// Same seed, same sequence of choices.
#[derive(Clone, Debug)]
pub struct OpponentRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl OpponentRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a fresh random seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        items.choose(&mut self.inner).copied()
    }
}

/// Which rule produced the opponent's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Tactic {
    /// Completes one of its own lines.
    Win,
    /// Fills the cell the other side needed to complete a line.
    Block,
    /// Takes the center.
    Center,
    /// Takes a random empty corner.
    Corner,
    /// Takes a random empty cell.
    Any,
}

/// A cell picked by the opponent, with the rule that picked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Board index (0-8).
    pub cell: usize,
    /// Rule that produced the cell.
    pub tactic: Tactic,
}

/// Finds the first empty cell that would complete a line for `mark`.
///
/// Lines are scanned in declaration order and cells in line order. The
/// placement is tried on a copy of `board`, and completion is judged by the
/// same line test the engine uses to declare a win.
#[instrument(skip(board))]
pub fn winning_cell(board: &Board, mark: Mark) -> Option<usize> {
    WIN_LINES.iter().find_map(|line| {
        line.cells().into_iter().find(|&cell| {
            board.is_empty(cell) && line.completed_by(&board.with_mark(cell, mark)) == Some(mark)
        })
    })
}

/// The heuristic opponent with its own random source.
#[derive(Clone, Debug)]
pub struct HeuristicOpponent {
    rng: OpponentRng,
}

impl HeuristicOpponent {
    /// Creates an opponent drawing tie-breaks from `rng`.
    pub fn new(rng: OpponentRng) -> Self {
        Self { rng }
    }

    /// Creates an opponent with a deterministic seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(OpponentRng::new(seed))
    }

    /// Seed of the underlying random source.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Picks a cell for `me` on `board`.
    ///
    /// The caller guarantees that the game is in progress and that it is
    /// `me`'s turn. Returns `None` only for a full board.
    pub fn choose_move(&mut self, board: &Board, me: Mark) -> Option<usize> {
        self.choose(board, me).map(|choice| choice.cell)
    }

    /// Like [`choose_move`](Self::choose_move), also reporting which rule fired.
    #[instrument(skip(self, board))]
    pub fn choose(&mut self, board: &Board, me: Mark) -> Option<Choice> {
        let choice = if let Some(cell) = winning_cell(board, me) {
            Some(Choice {
                cell,
                tactic: Tactic::Win,
            })
        } else if let Some(cell) = winning_cell(board, me.opponent()) {
            Some(Choice {
                cell,
                tactic: Tactic::Block,
            })
        } else if board.is_empty(Position::Center.to_index()) {
            Some(Choice {
                cell: Position::Center.to_index(),
                tactic: Tactic::Center,
            })
        } else {
            let corners: Vec<usize> = Position::CORNERS
                .iter()
                .map(|pos| pos.to_index())
                .filter(|&cell| board.is_empty(cell))
                .collect();

            match self.rng.choose(&corners) {
                Some(cell) => Some(Choice {
                    cell,
                    tactic: Tactic::Corner,
                }),
                None => self.rng.choose(&board.empty_cells()).map(|cell| Choice {
                    cell,
                    tactic: Tactic::Any,
                }),
            }
        };

        debug!(?choice, "Opponent chose");
        choice
    }
}
