//! Event Store Module
//!
//! In-memory, append-only storage for recognized feed events:
//! - `EventStore`: per-type sequences, one writer and many readers
//! - `StoreStats`: counts per type for the stats endpoint
//!
//! # Architecture
//!
//! ```text
//! Write Path (poller task):
//! ┌─────────┐    ┌──────────────┐    ┌───────────────────┐
//! │ Fetcher │───►│ save(type,   │───►│ Vec<EventRecord>  │
//! │  cycle  │    │   record)    │    │ for that type     │
//! └─────────┘    └──────────────┘    └───────────────────┘
//!
//! Read Path (request handlers):
//! ┌──────────────┐    ┌──────────────────┐
//! │ QueryService │───►│ get(type) clone  │───► aggregate
//! └──────────────┘    └──────────────────┘
//! ```
//!
//! Nothing is ever evicted; the store lives as long as the process.

mod stats;
mod store;

pub use stats::StoreStats;
pub use store::EventStore;
