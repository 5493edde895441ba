//! Query result types

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::EventType;

/// Outcome of an average-interval query for one repository
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AverageInterval {
    /// Mean gap in seconds between consecutive pull-request events
    Computed {
        repository: String,
        seconds: f64,
        /// Number of events the mean was computed from
        samples: usize,
    },
    /// Exactly one event is known, no interval exists yet
    InsufficientData { repository: String },
}

impl AverageInterval {
    /// Human-readable summary served by `GET /average`
    pub fn message(&self) -> String {
        match self {
            AverageInterval::Computed { seconds, .. } => {
                format!("Average time: {:?} seconds", seconds)
            }
            AverageInterval::InsufficientData { repository } => format!(
                "Cannot calculate average time for repository {} with less than 2 events",
                repository
            ),
        }
    }

    /// Mean in seconds, if one could be computed
    pub fn seconds(&self) -> Option<f64> {
        match self {
            AverageInterval::Computed { seconds, .. } => Some(*seconds),
            AverageInterval::InsufficientData { .. } => None,
        }
    }
}

/// Per-type event counts inside a trailing window
///
/// Always carries every recognized type, zero when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowCounts {
    counts: BTreeMap<EventType, usize>,
}

impl WindowCounts {
    /// All types present with a count of zero
    pub fn zeroed() -> Self {
        Self {
            counts: EventType::ALL.iter().map(|t| (*t, 0)).collect(),
        }
    }

    pub(crate) fn increment(&mut self, event_type: EventType) {
        *self.counts.entry(event_type).or_insert(0) += 1;
    }

    /// Count for a single type
    pub fn get(&self, event_type: EventType) -> usize {
        self.counts.get(&event_type).copied().unwrap_or(0)
    }

    /// Sum over every type
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate in reporting order
    pub fn iter(&self) -> impl Iterator<Item = (EventType, usize)> + '_ {
        self.counts.iter().map(|(t, c)| (*t, *c))
    }
}

impl Default for WindowCounts {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl fmt::Display for WindowCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(event_type, count)| format!("{}: {}", event_type, count))
            .collect();
        f.write_str(&parts.join(", "))
    }
}
