//! Shared helpers for integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{http::HeaderMap, http::StatusCode, routing::get, Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};

use feed_pulse::config::FeedConfig;

/// Local stand-in for the remote feed
pub struct FeedServer {
    pub url: String,
    pub requests: Arc<Mutex<Vec<HeaderMap>>>,
    pub hits: Arc<AtomicUsize>,
}

impl FeedServer {
    pub fn config(&self) -> FeedConfig {
        FeedConfig {
            url: self.url.clone(),
            user_agent: "feed-pulse-test".to_string(),
            timeout_secs: 5,
        }
    }

    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Serve `body` with `status`, except the first `failures` requests which get a 500
pub async fn spawn_feed(status: StatusCode, body: Value, failures: usize) -> FeedServer {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let hits = Arc::new(AtomicUsize::new(0));

    let handler = {
        let requests = Arc::clone(&requests);
        let hits = Arc::clone(&hits);
        move |headers: HeaderMap| {
            let requests = Arc::clone(&requests);
            let hits = Arc::clone(&hits);
            let body = body.clone();
            async move {
                requests.lock().push(headers);
                let n = hits.fetch_add(1, Ordering::SeqCst);
                if n < failures {
                    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"message": "boom"})))
                } else {
                    (status, Json(body))
                }
            }
        }
    };

    let app = Router::new().route("/events", get(handler));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FeedServer {
        url: format!("http://{}/events", addr),
        requests,
        hits,
    }
}

pub fn feed_event(event_type: &str, repo: &str, created_at: &str) -> Value {
    json!({
        "id": format!("{}-{}", event_type, created_at),
        "type": event_type,
        "actor": {"id": 1, "login": "octocat"},
        "repo": {"id": 42, "name": repo, "url": format!("https://api.github.com/repos/{}", repo)},
        "payload": {},
        "public": true,
        "created_at": created_at
    })
}

/// A feed page with every recognized type plus some that must be dropped
pub fn mixed_feed() -> Value {
    json!([
        feed_event("WatchEvent", "octo/repo", "2024-01-01T00:00:00Z"),
        feed_event("ForkEvent", "octo/repo", "2024-01-01T00:00:05Z"),
        feed_event("PullRequestEvent", "octo/repo", "2024-01-01T00:00:10Z"),
        feed_event("PushEvent", "octo/other", "2024-01-01T00:00:15Z"),
        feed_event("IssuesEvent", "octo/other", "2024-01-01T00:00:20Z"),
        feed_event("PullRequestEvent", "octo/repo", "2024-01-01T00:00:30Z")
    ])
}
