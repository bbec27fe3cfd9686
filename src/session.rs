//! Game session: one engine, its mode, and the computer's pending turn.
//!
//! The session is owned by the caller. Each reset bumps a generation
//! counter; a [`ComputerTurn`] ticket is only honoured while its generation
//! is current, so a delayed computer move can never touch a newer game.

use crate::games::tictactoe::{
    Board, Choice, Game, GameMode, GameStatus, HeuristicOpponent, Mark, Move, MoveError,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Counter identifying one game within a session.
pub type Generation = u64;

/// Permission for the computer to move once, in one specific game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComputerTurn {
    generation: Generation,
    mark: Mark,
}

impl ComputerTurn {
    /// Game this ticket belongs to.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Mark the computer will place.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

/// Result of a human move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Status after the move.
    pub status: GameStatus,
    /// Set when the move handed the turn to the computer.
    pub computer_turn: Option<ComputerTurn>,
}

/// Errors from session operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum SessionError {
    /// The engine refused the move.
    #[display("Invalid move: {}", _0)]
    #[from]
    Move(MoveError),

    /// The ticket was issued for an earlier game.
    #[display("Computer turn for game {} is stale (current game {})", ticket, current)]
    StaleTurn {
        /// Generation on the ticket.
        ticket: Generation,
        /// Generation of the running game.
        current: Generation,
    },

    /// The ticket is current but no computer turn is waiting.
    #[display("No computer turn is pending")]
    NotPending,

    /// The opponent found no empty cell.
    #[display("Computer found no empty cell")]
    NoMoveAvailable,
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Move(err) => Some(err),
            _ => None,
        }
    }
}

/// Read-only view of a session for display layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Current game generation.
    pub generation: Generation,
    /// Mode of the current game.
    pub mode: GameMode,
    /// Board cells.
    pub board: Board,
    /// Game status.
    pub status: GameStatus,
    /// Accepted moves in order.
    pub history: Vec<Move>,
    /// True while the computer's move is pending.
    pub computer_thinking: bool,
}

/// A single-player-seat game session.
#[derive(Debug, Clone)]
pub struct GameSession {
    game: Game,
    mode: GameMode,
    opponent: HeuristicOpponent,
    computer_mark: Mark,
    generation: Generation,
    pending: Option<ComputerTurn>,
}

impl GameSession {
    /// Creates a session and starts its first game.
    ///
    /// In [`GameMode::VsComputer`] the human plays X and `opponent` plays O.
    #[instrument(skip(opponent), fields(seed = opponent.seed()))]
    pub fn new(mode: GameMode, opponent: HeuristicOpponent) -> Self {
        info!(%mode, "Creating game session");
        Self {
            game: Game::new(),
            mode,
            opponent,
            computer_mark: Mark::O,
            generation: 0,
            pending: None,
        }
    }

    /// Discards the current game and starts a new one in `mode`.
    ///
    /// Any pending computer turn is dropped; tickets already handed out
    /// become stale.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn reset(&mut self, mode: GameMode) -> (Board, GameStatus) {
        if let Some(stale) = self.pending.take() {
            debug!(?stale, "Dropping pending computer turn");
        }
        self.generation += 1;
        self.mode = mode;
        let fresh = self.game.reset();
        info!(generation = self.generation, %mode, "New game");
        fresh
    }

    /// Starts a new game in the current mode.
    pub fn restart(&mut self) -> (Board, GameStatus) {
        self.reset(self.mode)
    }

    /// Plays a human move at `cell`.
    ///
    /// In two-player mode the mark is whoever is to move. Against the
    /// computer the human always plays X, so input during the computer's
    /// turn is refused with [`MoveError::WrongTurn`].
    #[instrument(skip(self), fields(generation = self.generation, mode = %self.mode))]
    pub fn play_human(&mut self, cell: usize) -> Result<MoveOutcome, SessionError> {
        let mark = match self.mode {
            // A finished game has no turn; the engine reports GameOver first.
            GameMode::TwoPlayer => self.game.status().turn().unwrap_or(Mark::X),
            GameMode::VsComputer => self.computer_mark.opponent(),
        };

        let status = self.game.apply_move(cell, mark).map_err(|err| {
            warn!(cell, %mark, error = %err, "Human move refused");
            err
        })?;

        let computer_turn = match (self.mode, status.turn()) {
            (GameMode::VsComputer, Some(turn)) if turn == self.computer_mark => {
                let ticket = ComputerTurn {
                    generation: self.generation,
                    mark: self.computer_mark,
                };
                self.pending = Some(ticket);
                debug!(?ticket, "Computer turn pending");
                Some(ticket)
            }
            _ => None,
        };

        Ok(MoveOutcome {
            status,
            computer_turn,
        })
    }

    /// Lets the computer take the turn described by `ticket`.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn play_computer(&mut self, ticket: ComputerTurn) -> Result<Choice, SessionError> {
        if ticket.generation != self.generation {
            warn!(
                ticket = ticket.generation,
                current = self.generation,
                "Ignoring stale computer turn"
            );
            return Err(SessionError::StaleTurn {
                ticket: ticket.generation,
                current: self.generation,
            });
        }

        if self.pending != Some(ticket) {
            return Err(SessionError::NotPending);
        }

        let choice = self
            .opponent
            .choose(self.game.board(), ticket.mark)
            .ok_or(SessionError::NoMoveAvailable)?;

        let status = self.game.apply_move(choice.cell, ticket.mark)?;
        self.pending = None;
        info!(cell = choice.cell, tactic = %choice.tactic, ?status, "Computer moved");
        Ok(choice)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    /// Returns the mode of the current game.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the current generation.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Returns accepted moves of the current game.
    pub fn history(&self) -> &[Move] {
        self.game.history()
    }

    /// Mark played by the computer in [`GameMode::VsComputer`].
    pub fn computer_mark(&self) -> Mark {
        self.computer_mark
    }

    /// True while a computer move is pending.
    pub fn is_computer_thinking(&self) -> bool {
        self.pending.is_some()
    }

    /// Captures the current state for display.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            generation: self.generation,
            mode: self.mode,
            board: *self.game.board(),
            status: self.game.status(),
            history: self.game.history().to_vec(),
            computer_thinking: self.is_computer_thinking(),
        }
    }
}
