//! Feed Pulse
//!
//! Polls a public event feed, keeps the recognized events in memory and
//! serves two aggregates over HTTP.
//!
//! # Features
//!
//! - **Background polling**: fixed-interval fetch with cooperative cancellation
//! - **Thread-Safe store**: one writer, many readers, append only
//! - **Aggregates**: mean pull-request interval per repository, per-type
//!   counts in a trailing window
//!
//! # Modules
//!
//! - `types`: Event records and query results
//! - `event_store`: In-memory per-type event storage
//! - `fetcher`: One fetch cycle against the remote feed
//! - `poller`: Recurring scheduler and shutdown signal
//! - `query`: Aggregates over the store
//! - `api`: Axum router and REST handlers
//! - `config`: Environment configuration
//! - `utils`: Timestamp helpers
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use feed_pulse::{Config, EventStore, Fetcher, Poller, ShutdownSignal};
//!
//! #[tokio::main]
//! async fn main() -> feed_pulse::AppResult<()> {
//!     let config = Config::from_env()?;
//!     let store = Arc::new(EventStore::new());
//!     let fetcher = Fetcher::new(&config.feed, Arc::clone(&store))?;
//!
//!     let shutdown = ShutdownSignal::new();
//!     let poller = Poller::new(fetcher, config.poll_interval).spawn(shutdown.clone());
//!
//!     shutdown.cancel();
//!     poller.await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod event_store;
pub mod fetcher;
pub mod poller;
pub mod query;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use api::{create_router, serve_until, AppState};
pub use config::{Config, ConfigError, FeedConfig};
pub use event_store::{EventStore, StoreStats};
pub use fetcher::{FeedSource, FetchError, FetchOutcome, Fetcher};
pub use poller::{PollStats, Poller, ShutdownSignal};
pub use query::{QueryError, QueryService};
pub use types::{AppResult, AverageInterval, EventRecord, EventType, WindowCounts};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
