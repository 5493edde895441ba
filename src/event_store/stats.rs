//! Event Store Statistics
//!
//! Point-in-time counts of stored events, reported by `GET /api/stats`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::EventType;

/// Statistics about the Event Store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    /// Events stored per type
    pub by_type: BTreeMap<EventType, usize>,
    /// Events stored across all types
    pub total: usize,
}

impl StoreStats {
    pub(crate) fn record(&mut self, event_type: EventType, count: usize) {
        self.by_type.insert(event_type, count);
        self.total += count;
    }
}
