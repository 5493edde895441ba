//! Feed Pulse - Binary Entry Point
//!
//! Starts the poller and the HTTP server, and stops both on SIGINT/SIGTERM.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use feed_pulse::api::{create_router, serve_until, AppState};
use feed_pulse::config::Config;
use feed_pulse::event_store::EventStore;
use feed_pulse::fetcher::Fetcher;
use feed_pulse::poller::{termination, PollStats, Poller, ShutdownSignal};
use feed_pulse::types::AppResult;

#[tokio::main]
async fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("feed_pulse=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    // One store for the whole process, shared by the poller and handlers
    let store = Arc::new(EventStore::new());
    let poll_stats = Arc::new(PollStats::new());

    let fetcher = Fetcher::new(&config.feed, Arc::clone(&store))?;
    info!(url = %fetcher.feed_url(), "Polling event feed");

    let shutdown = ShutdownSignal::new();
    let poller = Poller::new(fetcher, config.poll_interval)
        .with_stats(Arc::clone(&poll_stats))
        .spawn(shutdown.clone());

    let state = Arc::new(AppState::new(store, poll_stats));
    let app = create_router(state);

    serve_until(&config.bind_addr(), app, termination(), shutdown, poller).await?;
    info!("Shutdown complete");

    Ok(())
}
