//! Shared application state for request handlers

use std::sync::Arc;

use crate::event_store::EventStore;
use crate::poller::PollStats;
use crate::query::QueryService;

pub struct AppState {
    /// The event store, shared with the poller
    pub store: Arc<EventStore>,

    /// Aggregates over `store`
    pub queries: QueryService,

    /// Counters published by the poller
    pub poll_stats: Arc<PollStats>,
}

impl AppState {
    pub fn new(store: Arc<EventStore>, poll_stats: Arc<PollStats>) -> Self {
        Self {
            queries: QueryService::new(Arc::clone(&store)),
            store,
            poll_stats,
        }
    }
}
