//! Data types for the feed pulse service
//!
//! This module contains the event records ingested from the feed and the
//! results produced by queries over them.

mod aggregate;
mod event;

pub use aggregate::{AverageInterval, WindowCounts};
pub use event::{EventRecord, EventType, RepoRef, UnrecognizedEventType};

/// Result type for top-level operations (startup, serving)
pub type AppResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
