//! Noughts - tic-tac-toe for two players or against the computer
//!
//! # Architecture
//!
//! - **Games**: the rules engine ([`Game`]) and the [`HeuristicOpponent`]
//! - **Session**: one game at a time, its mode, and the computer's pending turn
//! - **Scheduler**: delivers computer turns after a short, cancellable delay
//! - **TUI**: a ratatui front end over the session
//!
//! # Example
//!
//! ```
//! use noughts::{GameMode, GameSession, GameStatus, HeuristicOpponent, Mark};
//!
//! let mut session = GameSession::new(GameMode::VsComputer, HeuristicOpponent::seeded(1));
//! let outcome = session.play_human(0).unwrap();
//! let ticket = outcome.computer_turn.expect("computer replies");
//! let choice = session.play_computer(ticket).unwrap();
//! assert_eq!(choice.cell, 4);
//! assert_eq!(session.status(), GameStatus::InProgress { turn: Mark::X });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod scheduler;
mod session;
mod simulate;

/// Terminal user interface.
pub mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - Computer move scheduling
pub use scheduler::ComputerMoveScheduler;

// Crate-level exports - Session management
pub use session::{ComputerTurn, GameSession, Generation, MoveOutcome, SessionError, SessionSnapshot};

// Crate-level exports - Self-play
pub use simulate::{play_one, simulate, SelfPlayError, SimulationReport};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    winning_cell, Board, Choice, Game, GameMode, GameStatus, HeuristicOpponent, Mark, Move,
    MoveError, OpponentRng, Position, Square, Tactic, WinLine, CELL_COUNT, WIN_LINES,
};

/// Rule predicates shared by the engine and the opponent.
pub use games::tictactoe::rules;
