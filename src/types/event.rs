//! Feed event types
//!
//! This module defines the closed set of event types that are ingested from
//! the remote feed and the typed record kept for each of them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Event types that are ingested from the feed
///
/// Any other `type` value reported by the feed is discarded during fetch.
/// Variant order is the order used when reporting per-type counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventType {
    /// A repository was starred
    WatchEvent,
    /// Activity on a pull request
    PullRequestEvent,
    /// Activity on an issue
    IssuesEvent,
}

impl EventType {
    /// Every recognized event type, in reporting order
    pub const ALL: [EventType; 3] = [
        EventType::WatchEvent,
        EventType::PullRequestEvent,
        EventType::IssuesEvent,
    ];

    /// Name as it appears in the feed's `type` field
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::WatchEvent => "WatchEvent",
            EventType::PullRequestEvent => "PullRequestEvent",
            EventType::IssuesEvent => "IssuesEvent",
        }
    }

    /// Classify a raw feed `type` value, `None` when it is not recognized
    pub fn recognize(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a feed `type` is outside the recognized set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized event type: {0}")]
pub struct UnrecognizedEventType(pub String);

impl FromStr for EventType {
    type Err = UnrecognizedEventType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WatchEvent" => Ok(EventType::WatchEvent),
            "PullRequestEvent" => Ok(EventType::PullRequestEvent),
            "IssuesEvent" => Ok(EventType::IssuesEvent),
            other => Err(UnrecognizedEventType(other.to_string())),
        }
    }
}

/// Repository reference carried by every feed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoRef {
    /// Full name, `owner/repo`
    pub name: String,
    /// Remaining repository fields (id, url, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One event as received from the feed
///
/// Only `type`, `repo.name` and `created_at` are interpreted. Everything
/// else is kept verbatim in `extra` so the record serializes back to the
/// shape the feed delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub repo: RepoRef,
    /// ISO-8601 timestamp, parsed lazily by queries
    pub created_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EventRecord {
    /// Build a record with no pass-through fields
    pub fn new(
        event_type: EventType,
        repo_name: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            event_type,
            repo: RepoRef {
                name: repo_name.into(),
                extra: Map::new(),
            },
            created_at: created_at.into(),
            extra: Map::new(),
        }
    }

    /// Name of the repository this event belongs to
    pub fn repo_name(&self) -> &str {
        &self.repo.name
    }
}
