//! Application state and key handling.
//!
//! [`App`] holds no terminal handles, so every key path can be driven from
//! tests. Side effects that need the runtime come back as [`AppAction`]s.

use super::clock::GameClock;
use super::input::{digit_cell, move_cursor};
use crate::games::tictactoe::{GameMode, GameStatus, HeuristicOpponent, Mark, Position};
use crate::session::{ComputerTurn, GameSession, SessionError};
use crossterm::event::KeyCode;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Choosing between two-player and vs-computer.
    ModeSelect,
    /// A game is on the board.
    Playing,
}

/// Work the event loop must do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Nothing beyond redrawing.
    None,
    /// Deliver this computer turn after the configured delay.
    ScheduleComputer(ComputerTurn),
    /// Drop any computer turn still waiting out its delay.
    CancelComputer,
    /// Leave the UI.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    screen: Screen,
    session: GameSession,
    cursor: Position,
    notice: Option<String>,
    clock: GameClock,
}

impl App {
    /// Creates the app. With `start_mode` the mode screen is skipped.
    pub fn new(opponent: HeuristicOpponent, start_mode: Option<GameMode>, now: Instant) -> Self {
        let mut app = Self {
            screen: Screen::ModeSelect,
            session: GameSession::new(start_mode.unwrap_or_default(), opponent),
            cursor: Position::Center,
            notice: None,
            clock: GameClock::default(),
        };
        if let Some(mode) = start_mode {
            app.start_game(mode, now);
        }
        app
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The game clock.
    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// Handles one key press.
    #[instrument(skip(self, now), fields(screen = ?self.screen))]
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) -> AppAction {
        match (self.screen, key) {
            (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => AppAction::Quit,

            (Screen::ModeSelect, KeyCode::Char('1')) => self.start_game(GameMode::TwoPlayer, now),
            (Screen::ModeSelect, KeyCode::Char('2')) => self.start_game(GameMode::VsComputer, now),
            (Screen::ModeSelect, _) => AppAction::None,

            (Screen::Playing, KeyCode::Char('n')) => self.start_game(self.session.mode(), now),
            (Screen::Playing, KeyCode::Char('m')) => {
                info!("Back to mode selection");
                self.screen = Screen::ModeSelect;
                self.clock.stop(now);
                self.session.restart();
                AppAction::CancelComputer
            }
            (Screen::Playing, KeyCode::Enter | KeyCode::Char(' ')) => {
                self.place(self.cursor.to_index(), now)
            }
            (Screen::Playing, KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                self.cursor = move_cursor(self.cursor, key);
                AppAction::None
            }
            (Screen::Playing, other) => match digit_cell(other) {
                Some(cell) => {
                    if let Some(pos) = Position::from_index(cell) {
                        self.cursor = pos;
                    }
                    self.place(cell, now)
                }
                None => AppAction::None,
            },
        }
    }

    /// Plays a computer turn delivered by the scheduler.
    #[instrument(skip(self, now))]
    pub fn on_computer_turn(&mut self, ticket: ComputerTurn, now: Instant) {
        match self.session.play_computer(ticket) {
            Ok(choice) => {
                debug!(cell = choice.cell, tactic = %choice.tactic, "Computer move shown");
                self.notice = None;
                self.stop_clock_if_over(now);
            }
            // A ticket from an abandoned game; nothing to show.
            Err(SessionError::StaleTurn { .. }) | Err(SessionError::NotPending) => {}
            Err(err) => self.notice = Some(err.to_string()),
        }
    }

    /// Status line under the board.
    pub fn status_message(&self) -> String {
        if let Some(notice) = &self.notice {
            return notice.clone();
        }
        if self.session.is_computer_thinking() {
            return "Computer is thinking...".to_string();
        }

        let vs_computer = self.session.mode() == GameMode::VsComputer;
        let computer = self.session.computer_mark();
        match self.session.status() {
            GameStatus::InProgress { turn } if vs_computer && turn != computer => {
                format!("Your turn ({})", turn)
            }
            GameStatus::Won { winner, .. } if vs_computer && winner == computer => {
                "Computer wins! Press 'n' for a new game.".to_string()
            }
            GameStatus::Won { winner, .. } if vs_computer => {
                format!("You win as {}! Press 'n' for a new game.", winner)
            }
            status @ (GameStatus::Won { .. } | GameStatus::Draw) => {
                format!("{} Press 'n' for a new game.", status)
            }
            status => status.to_string(),
        }
    }

    /// Mark to show on the turn indicator, if the game is running.
    pub fn current_turn(&self) -> Option<Mark> {
        self.session.status().turn()
    }

    fn start_game(&mut self, mode: GameMode, now: Instant) -> AppAction {
        self.session.reset(mode);
        self.screen = Screen::Playing;
        self.cursor = Position::Center;
        self.notice = None;
        self.clock.start(now);
        AppAction::CancelComputer
    }

    fn place(&mut self, cell: usize, now: Instant) -> AppAction {
        match self.session.play_human(cell) {
            Ok(outcome) => {
                self.notice = None;
                self.stop_clock_if_over(now);
                outcome
                    .computer_turn
                    .map_or(AppAction::None, AppAction::ScheduleComputer)
            }
            Err(err) => {
                // The board stays as it was; the refusal is only logged.
                debug!(cell, error = %err, "Move ignored");
                AppAction::None
            }
        }
    }

    fn stop_clock_if_over(&mut self, now: Instant) {
        if self.session.status().is_terminal() {
            self.clock.stop(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Square};

    fn app(mode: Option<GameMode>) -> App {
        App::new(HeuristicOpponent::seeded(21), mode, Instant::now())
    }

    #[test]
    fn test_mode_select_then_play() {
        let mut app = app(None);
        assert_eq!(app.screen(), Screen::ModeSelect);
        assert_eq!(app.handle_key(KeyCode::Char('5'), Instant::now()), AppAction::None);
        assert_eq!(app.session().board(), &Board::new());

        app.handle_key(KeyCode::Char('1'), Instant::now());
        assert_eq!(app.screen(), Screen::Playing);
        assert_eq!(app.session().mode(), GameMode::TwoPlayer);
        assert!(app.clock().is_running());
    }

    #[test]
    fn test_digit_places_and_schedules_computer() {
        let mut app = app(Some(GameMode::VsComputer));
        let action = app.handle_key(KeyCode::Char('1'), Instant::now());
        let ticket = match action {
            AppAction::ScheduleComputer(ticket) => ticket,
            other => panic!("expected a computer turn, got {other:?}"),
        };
        assert_eq!(app.status_message(), "Computer is thinking...");

        // Input during the delay is ignored.
        app.handle_key(KeyCode::Char('2'), Instant::now());
        assert!(app.session().board().is_empty(1));

        app.on_computer_turn(ticket, Instant::now());
        assert_eq!(app.session().board().get(4), Some(Square::Occupied(Mark::O)));
        assert_eq!(app.status_message(), "Your turn (X)");
    }

    #[test]
    fn test_cursor_and_enter() {
        let mut app = app(Some(GameMode::TwoPlayer));
        app.handle_key(KeyCode::Up, Instant::now());
        app.handle_key(KeyCode::Left, Instant::now());
        assert_eq!(app.cursor(), Position::TopLeft);
        app.handle_key(KeyCode::Enter, Instant::now());
        assert_eq!(app.session().board().get(0), Some(Square::Occupied(Mark::X)));
        assert_eq!(app.status_message(), "Player O's turn");
    }

    #[test]
    fn test_new_game_discards_pending_computer_turn() {
        let mut app = app(Some(GameMode::VsComputer));
        let ticket = match app.handle_key(KeyCode::Char('5'), Instant::now()) {
            AppAction::ScheduleComputer(ticket) => ticket,
            other => panic!("expected a computer turn, got {other:?}"),
        };

        assert_eq!(app.handle_key(KeyCode::Char('n'), Instant::now()), AppAction::CancelComputer);
        app.on_computer_turn(ticket, Instant::now());
        assert_eq!(app.session().board(), &Board::new());
        assert_eq!(app.status_message(), "Your turn (X)");
    }

    #[test]
    fn test_two_player_win_stops_clock() {
        let mut app = app(Some(GameMode::TwoPlayer));
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key), Instant::now());
        }
        assert_eq!(app.current_turn(), None);
        assert!(!app.clock().is_running());
        assert_eq!(app.status_message(), "Player X wins! Press 'n' for a new game.");
    }

    #[test]
    fn test_quit() {
        let mut app = app(None);
        assert_eq!(app.handle_key(KeyCode::Char('q'), Instant::now()), AppAction::Quit);
    }
}
