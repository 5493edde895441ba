//! Windowed count endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::api::state::AppState;
use crate::query::QueryError;

#[derive(Debug, Deserialize)]
pub struct TotalParams {
    /// Window length in minutes, counted back from now
    pub offset: i64,
}

/// GET /total - `WatchEvent: n, PullRequestEvent: n, IssuesEvent: n`
pub async fn get_total(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TotalParams>,
) -> Result<impl IntoResponse, QueryError> {
    let counts = state.queries.windowed_count(params.offset)?;
    Ok((StatusCode::OK, counts.to_string()))
}
