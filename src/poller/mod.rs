//! Background poller
//!
//! Drives a `FeedSource` once per fixed interval for the lifetime of the
//! process. A failed cycle is logged and counted, never propagated; the
//! next attempt happens after the same interval regardless of how many
//! cycles failed in a row.
//!
//! Cancellation is checked before each cycle, races the in-flight fetch and
//! interrupts the interval wait. A fetch aborted this way has not saved
//! anything yet: records are appended only after the body is fully decoded,
//! with no await point in between.

mod shutdown;
mod stats;

pub use shutdown::{termination, ShutdownSignal};
pub use stats::{PollSnapshot, PollStats};

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::fetcher::FeedSource;

pub struct Poller<S> {
    source: S,
    interval: Duration,
    stats: Arc<PollStats>,
}

impl<S: FeedSource> Poller<S> {
    pub fn new(source: S, interval: Duration) -> Self {
        Self {
            source,
            interval,
            stats: Arc::new(PollStats::new()),
        }
    }

    /// Report into an externally shared counter set
    pub fn with_stats(mut self, stats: Arc<PollStats>) -> Self {
        self.stats = stats;
        self
    }

    pub fn stats(&self) -> Arc<PollStats> {
        Arc::clone(&self.stats)
    }

    /// Run until `shutdown` is cancelled
    pub async fn run(self, shutdown: ShutdownSignal) {
        info!(interval_secs = self.interval.as_secs_f64(), "Poller started");

        loop {
            if shutdown.is_cancelled() {
                break;
            }

            self.stats.cycle_started();
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => {
                    debug!("Fetch cycle aborted by shutdown");
                    break;
                }
                result = self.source.fetch_once() => match result {
                    Ok(outcome) => self.stats.cycle_succeeded(outcome.ingested),
                    Err(e) => {
                        self.stats.cycle_failed();
                        warn!(error = %e, status = ?e.status(), "Failed to update events");
                    }
                }
            }

            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        info!("Poller stopped");
    }
}

impl<S: FeedSource + 'static> Poller<S> {
    /// Spawn `run` onto the current runtime
    pub fn spawn(self, shutdown: ShutdownSignal) -> JoinHandle<()> {
        tokio::spawn(self.run(shutdown))
    }
}
