//! Headless self-play: the heuristic opponent on both sides.

use crate::games::tictactoe::{Board, Game, GameStatus, HeuristicOpponent, Mark, MoveError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Errors from self-play.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum SelfPlayError {
    /// The engine refused the opponent's move.
    #[display("Invalid move: {}", _0)]
    #[from]
    Move(MoveError),

    /// The opponent found no empty cell in a running game.
    #[display("Opponent found no empty cell for {}", _0)]
    NoMoveAvailable(Mark),
}

impl std::error::Error for SelfPlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SelfPlayError::Move(err) => Some(err),
            SelfPlayError::NoMoveAvailable(_) => None,
        }
    }
}

/// Tally of a self-play run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Seed the opponent was created with.
    pub seed: u64,
    /// Games played.
    pub games: u32,
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
    /// Final board of the last game.
    pub last_board: Board,
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Games: {} (seed {})", self.games, self.seed)?;
        writeln!(f, "X wins: {}", self.x_wins)?;
        writeln!(f, "O wins: {}", self.o_wins)?;
        writeln!(f, "Draws:  {}", self.draws)?;
        writeln!(f)?;
        write!(f, "{}", self.last_board.display())
    }
}

/// Plays one game with `opponent` choosing for both marks.
#[instrument(skip(opponent))]
pub fn play_one(opponent: &mut HeuristicOpponent) -> Result<Game, SelfPlayError> {
    let mut game = Game::new();
    while let GameStatus::InProgress { turn } = game.status() {
        let cell = opponent
            .choose_move(game.board(), turn)
            .ok_or(SelfPlayError::NoMoveAvailable(turn))?;
        game.apply_move(cell, turn)?;
    }
    debug!(status = ?game.status(), "Self-play game finished");
    Ok(game)
}

/// Plays `games` self-play games from one seeded opponent.
#[instrument]
pub fn simulate(games: u32, seed: u64) -> Result<SimulationReport, SelfPlayError> {
    let mut opponent = HeuristicOpponent::seeded(seed);
    let mut report = SimulationReport {
        seed,
        games,
        x_wins: 0,
        o_wins: 0,
        draws: 0,
        last_board: Board::new(),
    };

    for _ in 0..games {
        let game = play_one(&mut opponent)?;
        match game.status().winner() {
            Some(Mark::X) => report.x_wins += 1,
            Some(Mark::O) => report.o_wins += 1,
            None => report.draws += 1,
        }
        report.last_board = *game.board();
    }

    info!(
        games,
        x_wins = report.x_wins,
        o_wins = report.o_wins,
        draws = report.draws,
        "Simulation finished"
    );
    Ok(report)
}
