//! Elapsed-time display for the current game.
//!
//! The core never measures time; the shell starts the clock on a new game
//! and stops it when the game ends.

use std::time::{Duration, Instant};

/// Stopwatch for one game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameClock {
    started: Option<Instant>,
    frozen: Option<Duration>,
}

impl GameClock {
    /// Restarts the clock from zero at `now`.
    pub fn start(&mut self, now: Instant) {
        self.started = Some(now);
        self.frozen = None;
    }

    /// Freezes the clock at `now`. A stopped clock stays stopped.
    pub fn stop(&mut self, now: Instant) {
        if self.frozen.is_none() {
            self.frozen = Some(self.elapsed(now));
        }
    }

    /// True between `start` and `stop`.
    pub fn is_running(&self) -> bool {
        self.started.is_some() && self.frozen.is_none()
    }

    /// Time on the clock at `now`.
    pub fn elapsed(&self, now: Instant) -> Duration {
        match (self.frozen, self.started) {
            (Some(frozen), _) => frozen,
            (None, Some(started)) => now.saturating_duration_since(started),
            (None, None) => Duration::ZERO,
        }
    }
}

/// Formats a duration as `MM:SS`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
