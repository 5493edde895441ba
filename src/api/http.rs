//! HTTP server setup with Axum

use std::future::Future;
use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use super::rest::{average, stats, total};
use super::state::AppState;
use crate::poller::ShutdownSignal;
use crate::types::AppResult;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - allow all origins, the API is read-only
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Aggregates
        .route("/average", get(average::get_average))
        .route("/total", get(total::get_total))
        // Diagnostics
        .route("/api/stats", get(stats::get_stats))
        .layer(cors)
        .with_state(state)
}

/// Serve `app` on `addr` until `signal` resolves, then stop the poller
///
/// `shutdown` is cancelled and `poller` joined on every exit path, including
/// a failed bind or a server error; that error is returned afterwards.
pub async fn serve_until<F>(
    addr: &str,
    app: Router,
    signal: F,
    shutdown: ShutdownSignal,
    poller: JoinHandle<()>,
) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let served = serve(addr, app, signal).await;
    if let Err(e) = &served {
        error!(error = %e, "HTTP server failed");
    }

    shutdown.cancel();
    poller.await?;
    info!("Poller joined");

    served
}

async fn serve<F>(addr: &str, app: Router, signal: F) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .await?;

    Ok(())
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
