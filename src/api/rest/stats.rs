//! Stats endpoint

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::state::AppState;
use crate::event_store::StoreStats;
use crate::poller::PollSnapshot;

/// Response for GET /api/stats
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub store: StoreStats,
    pub poller: PollSnapshot,
}

/// GET /api/stats - Stored counts per type and poller counters
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    Json(StatsResponse {
        store: state.store.stats(),
        poller: state.poll_stats.snapshot(),
    })
}
