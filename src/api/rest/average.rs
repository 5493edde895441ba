//! Average interval endpoint

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
pub struct AverageParams {
    /// Full repository name, `owner/repo`
    pub repository: String,
}

/// GET /average - Mean seconds between pull-request events of a repository
pub async fn get_average(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AverageParams>,
) -> Result<impl IntoResponse, QueryError> {
    let result = state.queries.average_interval(&params.repository)?;
    Ok((StatusCode::OK, result.message()))
}
