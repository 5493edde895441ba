//! Feed fetcher
//!
//! One fetch cycle issues a GET against the configured feed, decodes the
//! JSON array, keeps the recognized event types and appends them to the
//! shared `EventStore` in feed order.

mod client;
mod error;

pub use client::{classify, Classified, Fetcher, FetchOutcome};
pub use error::{FetchError, FetchResult};

use async_trait::async_trait;

/// Anything the poller can drive once per interval
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Run one complete fetch cycle
    async fn fetch_once(&self) -> FetchResult<FetchOutcome>;
}

#[async_trait]
impl<T: FeedSource + ?Sized> FeedSource for std::sync::Arc<T> {
    async fn fetch_once(&self) -> FetchResult<FetchOutcome> {
        (**self).fetch_once().await
    }
}
