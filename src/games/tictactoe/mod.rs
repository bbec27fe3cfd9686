//! Tic-tac-toe core: board, rules engine and heuristic opponent.

mod action;
mod game;
mod opponent;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use opponent::{winning_cell, Choice, HeuristicOpponent, OpponentRng, Tactic};
pub use position::Position;
pub use rules::{WinLine, WIN_LINES};
pub use types::{Board, GameMode, GameStatus, Mark, Square, CELL_COUNT};
