//! Event Store - shared per-type event sequences
//!
//! The EventStore keeps every recognized event in arrival order, keyed by
//! its type. Each `save` takes the write lock for a single append, so
//! readers observe the store at record granularity.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::stats::StoreStats;
use crate::types::{EventRecord, EventType};

/// Thread-safe append-only multimap from event type to records
#[derive(Debug, Default)]
pub struct EventStore {
    events: RwLock<HashMap<EventType, Vec<EventRecord>>>,
}

impl EventStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the sequence for its own `event_type`
    pub fn save(&self, record: EventRecord) {
        self.events
            .write()
            .entry(record.event_type)
            .or_default()
            .push(record);
    }

    /// Snapshot of every record saved under `event_type`, in save order
    ///
    /// Returns an owned copy so callers can iterate without holding the lock.
    pub fn get(&self, event_type: EventType) -> Vec<EventRecord> {
        self.events
            .read()
            .get(&event_type)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of records saved under `event_type`
    pub fn count(&self, event_type: EventType) -> usize {
        self.events.read().get(&event_type).map_or(0, Vec::len)
    }

    /// Total number of records across every type
    pub fn len(&self) -> usize {
        self.events.read().values().map(Vec::len).sum()
    }

    /// Whether nothing has been saved yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Per-type counts taken under a single read lock
    pub fn stats(&self) -> StoreStats {
        let events = self.events.read();
        let mut stats = StoreStats::default();
        for event_type in EventType::ALL {
            let count = events.get(&event_type).map_or(0, Vec::len);
            stats.record(event_type, count);
        }
        stats
    }
}
