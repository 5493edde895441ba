//! Poller counters

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;

/// Counters updated by the poller, read by the stats endpoint
#[derive(Debug, Default)]
pub struct PollStats {
    attempted: AtomicU64,
    succeeded: AtomicU64,
    failed: AtomicU64,
    ingested: AtomicU64,
    last_success: Mutex<Option<DateTime<Utc>>>,
}

/// Point-in-time copy of `PollStats`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollSnapshot {
    pub cycles_attempted: u64,
    pub cycles_succeeded: u64,
    pub cycles_failed: u64,
    pub records_ingested: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_success: Option<DateTime<Utc>>,
}

impl PollStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn cycle_started(&self) {
        self.attempted.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn cycle_succeeded(&self, ingested: usize) {
        self.succeeded.fetch_add(1, Ordering::SeqCst);
        self.ingested.fetch_add(ingested as u64, Ordering::SeqCst);
        *self.last_success.lock() = Some(Utc::now());
    }

    pub(crate) fn cycle_failed(&self) {
        self.failed.fetch_add(1, Ordering::SeqCst);
    }

    pub fn attempted(&self) -> u64 {
        self.attempted.load(Ordering::SeqCst)
    }

    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> PollSnapshot {
        PollSnapshot {
            cycles_attempted: self.attempted.load(Ordering::SeqCst),
            cycles_succeeded: self.succeeded.load(Ordering::SeqCst),
            cycles_failed: self.failed.load(Ordering::SeqCst),
            records_ingested: self.ingested.load(Ordering::SeqCst),
            last_success: *self.last_success.lock(),
        }
    }
}
