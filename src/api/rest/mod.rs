//! REST API module for HTTP endpoints
//!
//! - `GET /average?repository=<name>` - Mean gap between pull-request events
//! - `GET /total?offset=<minutes>` - Event counts per type in a trailing window
//! - `GET /api/stats` - Store and poller counters

pub mod average;
pub mod stats;
pub mod total;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::query::QueryError;

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            QueryError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, ApiError::not_found("No repository found"))
            }
            QueryError::MalformedTimestamp { .. } => {
                tracing::error!(error = %self, "Query failed on stored event");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::internal(self.to_string()),
                )
            }
        };
        (status, Json(error)).into_response()
    }
}
