//! Periodic open/closed recheck for the company detail screen.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval_at, Instant};
use tracing::debug;

/// Interval between open-status rechecks.
pub const OPEN_STATUS_PERIOD: Duration = Duration::from_secs(60);

/// Sends a tick message on a fixed period until dropped.
///
/// The ticker task is aborted when the guard goes out of scope, so leaving the
/// owning screen on any path stops the timer.
#[derive(Debug)]
pub struct OpenStatusTicker {
    handle: JoinHandle<()>,
}

impl OpenStatusTicker {
    /// Spawns the ticker. The first tick fires one `period` after spawning.
    #[must_use]
    pub fn spawn<A, F>(period: Duration, tx: mpsc::UnboundedSender<A>, make_tick: F) -> Self
    where
        A: Send + 'static,
        F: Fn() -> A + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                if tx.send(make_tick()).is_err() {
                    debug!("Open status receiver closed, stopping ticker");
                    break;
                }
            }
        });

        Self { handle }
    }

}

impl Drop for OpenStatusTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_on_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _ticker = OpenStatusTicker::spawn(Duration::from_secs(60), tx, || 7u8);

        assert_eq!(rx.recv().await, Some(7));
        assert_eq!(rx.recv().await, Some(7));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_ticker() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ticker = OpenStatusTicker::spawn(Duration::from_secs(60), tx, || ());
        assert!(!ticker.handle.is_finished());

        drop(ticker);

        // The aborted task releases its sender, closing the channel.
        assert_eq!(rx.recv().await, None);
    }
}
