//! Delayed delivery of computer turns.
//!
//! The computer's reply is held back for a short, fixed delay so it does
//! not appear instantly. The delay runs on a tokio task that can be aborted
//! when a new game starts.

use crate::session::ComputerTurn;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Schedules [`ComputerTurn`] tickets for delivery after a delay.
///
/// Tickets arrive on the receiver returned by [`ComputerMoveScheduler::new`].
/// At most one ticket is in flight; scheduling another aborts the first.
#[derive(Debug)]
pub struct ComputerMoveScheduler {
    tx: mpsc::UnboundedSender<ComputerTurn>,
    delay: Duration,
    in_flight: Option<JoinHandle<()>>,
}

impl ComputerMoveScheduler {
    /// Creates a scheduler and the receiving end for its tickets.
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<ComputerTurn>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                tx,
                delay,
                in_flight: None,
            },
            rx,
        )
    }

    /// Configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Delivers `ticket` after the delay. Must be called inside a tokio runtime.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub fn schedule(&mut self, ticket: ComputerTurn) {
        self.cancel();

        let tx = self.tx.clone();
        let delay = self.delay;
        self.in_flight = Some(tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            // The receiver is gone only when the shell is shutting down.
            if tx.send(ticket).is_err() {
                debug!("Computer turn receiver dropped");
            }
        }));
        debug!(?ticket, "Computer turn scheduled");
    }

    /// Aborts the ticket in flight, if any. Returns true if one was aborted.
    #[instrument(skip(self))]
    pub fn cancel(&mut self) -> bool {
        match self.in_flight.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                debug!("Cancelled scheduled computer turn");
                true
            }
            _ => false,
        }
    }

    /// True while a ticket is waiting out its delay.
    pub fn is_pending(&self) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for ComputerMoveScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
