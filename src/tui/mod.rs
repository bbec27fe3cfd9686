//! Terminal UI for noughts.

mod app;
mod clock;
mod input;
mod ui;

pub use app::{App, AppAction, Screen};

use crate::config::AppConfig;
use crate::games::tictactoe::{HeuristicOpponent, OpponentRng};
use crate::scheduler::ComputerMoveScheduler;
use crate::session::ComputerTurn;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{error, info, instrument, warn};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the terminal UI until the player quits.
///
/// Logging must already be routed away from the terminal.
#[instrument(skip_all)]
pub async fn run_tui(config: &AppConfig) -> Result<()> {
    let rng = match config.seed() {
        Some(seed) => OpponentRng::new(*seed),
        None => OpponentRng::from_entropy(),
    };
    info!(seed = rng.seed(), delay_ms = config.computer_delay_ms(), "Starting TUI");

    let app = App::new(HeuristicOpponent::new(rng), *config.default_mode(), Instant::now());
    let (scheduler, turns) = ComputerMoveScheduler::new(config.computer_delay());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    restore_on_err(execute!(stdout, EnterAlternateScreen), restore_terminal)?;
    let mut terminal =
        restore_on_err(Terminal::new(CrosstermBackend::new(stdout)), restore_terminal)?;

    let res = run_app(&mut terminal, app, scheduler, turns).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    res
}

/// Returns `result`, calling `restore` first if it is an error.
fn restore_on_err<T>(result: io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        restore();
    }
    result
}

/// Best-effort undo of raw mode and the alternate screen after a failed setup.
fn restore_terminal() {
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen) {
        warn!(error = %err, "Failed to leave alternate screen");
    }
    if let Err(err) = disable_raw_mode() {
        warn!(error = %err, "Failed to disable raw mode");
    }
}

/// Event loop: redraw, apply delivered computer turns, handle one key.
async fn run_app(
    terminal: &mut Term,
    mut app: App,
    mut scheduler: ComputerMoveScheduler,
    mut turns: mpsc::UnboundedReceiver<ComputerTurn>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app, Instant::now()))?;

        while let Ok(ticket) = turns.try_recv() {
            app.on_computer_turn(ticket, Instant::now());
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match app.handle_key(key.code, Instant::now()) {
                    AppAction::Quit => {
                        info!("User quit");
                        scheduler.cancel();
                        return Ok(());
                    }
                    AppAction::ScheduleComputer(ticket) => scheduler.schedule(ticket),
                    AppAction::CancelComputer => {
                        scheduler.cancel();
                    }
                    AppAction::None => {}
                }
            }
        }

        // Let the scheduler's timer task make progress.
        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let result: io::Result<()> = restore_on_err(
            Err(io::Error::other("alternate screen unavailable")),
            || restored.set(true),
        );
        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_keeps_terminal() {
        let restored = Cell::new(false);
        let result = restore_on_err(Ok(7), || restored.set(true));
        assert_eq!(result.unwrap(), 7);
        assert!(!restored.get());
    }
}
