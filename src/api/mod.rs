//! API module for HTTP endpoints
//!
//! This module serves the query surface over the shared event store.

pub mod http;
pub mod rest;
pub mod state;

pub use http::{create_router, serve_until};
pub use state::AppState;
