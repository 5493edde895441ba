//! Read-side aggregates over the event store
//!
//! Every query takes a fresh snapshot of the store when it is called.
//! Writes that land while the query runs are simply not seen.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use thiserror::Error;

use crate::event_store::EventStore;
use crate::types::{AverageInterval, EventRecord, EventType, WindowCounts};
use crate::utils::time::{now_utc, parse_utc};

pub type QueryResult<T> = std::result::Result<T, QueryError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("no pull request events recorded for repository {repository}")]
    NotFound { repository: String },

    #[error("malformed created_at timestamp {value:?}: {reason}")]
    MalformedTimestamp { value: String, reason: String },
}

fn created_at(record: &EventRecord) -> QueryResult<DateTime<Utc>> {
    parse_utc(&record.created_at).map_err(|e| QueryError::MalformedTimestamp {
        value: record.created_at.clone(),
        reason: e.to_string(),
    })
}

fn seconds(delta: TimeDelta) -> f64 {
    delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1_000_000_000.0
}

/// Start of the trailing window, clamped to chrono's representable range
///
/// An offset reaching past the earliest instant includes everything; one
/// reaching past the latest instant (negative offsets) excludes everything.
fn window_cutoff(now: DateTime<Utc>, offset_minutes: i64) -> DateTime<Utc> {
    TimeDelta::try_minutes(offset_minutes)
        .and_then(|window| now.checked_sub_signed(window))
        .unwrap_or(if offset_minutes >= 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
}

/// Aggregates computed on demand from the shared store
#[derive(Clone)]
pub struct QueryService {
    store: Arc<EventStore>,
}

impl QueryService {
    pub fn new(store: Arc<EventStore>) -> Self {
        Self { store }
    }

    /// Mean time between consecutive pull-request events of `repository`
    ///
    /// Timestamps are sorted before differencing, so arrival order does not
    /// matter. One event yields `InsufficientData`; none is `NotFound`.
    pub fn average_interval(&self, repository: &str) -> QueryResult<AverageInterval> {
        let events: Vec<EventRecord> = self
            .store
            .get(EventType::PullRequestEvent)
            .into_iter()
            .filter(|event| event.repo_name() == repository)
            .collect();

        if events.is_empty() {
            return Err(QueryError::NotFound {
                repository: repository.to_string(),
            });
        }

        if events.len() < 2 {
            return Ok(AverageInterval::InsufficientData {
                repository: repository.to_string(),
            });
        }

        let mut times = events
            .iter()
            .map(created_at)
            .collect::<QueryResult<Vec<_>>>()?;
        times.sort();

        let intervals: Vec<f64> = times.windows(2).map(|w| seconds(w[1] - w[0])).collect();
        let mean = intervals.iter().sum::<f64>() / intervals.len() as f64;

        Ok(AverageInterval::Computed {
            repository: repository.to_string(),
            seconds: mean,
            samples: times.len(),
        })
    }

    /// Events per type created within the last `offset_minutes` minutes
    pub fn windowed_count(&self, offset_minutes: i64) -> QueryResult<WindowCounts> {
        self.windowed_count_at(offset_minutes, now_utc())
    }

    /// Same as `windowed_count`, measured from a fixed `now`
    pub fn windowed_count_at(
        &self,
        offset_minutes: i64,
        now: DateTime<Utc>,
    ) -> QueryResult<WindowCounts> {
        let cutoff = window_cutoff(now, offset_minutes);

        let mut counts = WindowCounts::zeroed();
        for event_type in EventType::ALL {
            for event in self.store.get(event_type) {
                if created_at(&event)? >= cutoff {
                    counts.increment(event_type);
                }
            }
        }

        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn service_with(events: &[(EventType, &str, &str)]) -> QueryService {
        let store = Arc::new(EventStore::new());
        for (event_type, repo, created_at) in events {
            store.save(EventRecord::new(*event_type, *repo, *created_at));
        }
        QueryService::new(store)
    }

    #[test]
    fn test_average_not_found() {
        let service = service_with(&[(EventType::WatchEvent, "octo/repo", "2024-01-01T00:00:00Z")]);
        let err = service.average_interval("octo/repo").unwrap_err();
        assert_eq!(
            err,
            QueryError::NotFound {
                repository: "octo/repo".to_string()
            }
        );
    }

    #[test]
    fn test_average_single_event_is_insufficient() {
        let service = service_with(&[(
            EventType::PullRequestEvent,
            "octo/repo",
            "2024-01-01T00:00:00Z",
        )]);
        let result = service.average_interval("octo/repo").unwrap();
        assert!(matches!(result, AverageInterval::InsufficientData { .. }));
    }

    #[test]
    fn test_average_sorts_out_of_order_arrivals() {
        let service = service_with(&[
            (EventType::PullRequestEvent, "octo/repo", "2024-01-01T00:00:30Z"),
            (EventType::PullRequestEvent, "octo/repo", "2024-01-01T00:00:00Z"),
            (EventType::PullRequestEvent, "other/repo", "2024-01-01T05:00:00Z"),
            (EventType::PullRequestEvent, "octo/repo", "2024-01-01T00:00:10Z"),
        ]);

        let result = service.average_interval("octo/repo").unwrap();
        assert_eq!(result.seconds(), Some(15.0));
        assert!(matches!(result, AverageInterval::Computed { samples: 3, .. }));
    }

    #[test]
    fn test_average_keeps_sub_second_precision() {
        let service = service_with(&[
            (EventType::PullRequestEvent, "octo/repo", "2024-01-01T00:00:00Z"),
            (EventType::PullRequestEvent, "octo/repo", "2024-01-01T00:00:01.500Z"),
        ]);
        assert_eq!(service.average_interval("octo/repo").unwrap().seconds(), Some(1.5));
    }

    #[test]
    fn test_average_equal_timestamps_is_zero() {
        let service = service_with(&[
            (EventType::PullRequestEvent, "octo/repo", "2024-01-01T00:00:00Z"),
            (EventType::PullRequestEvent, "octo/repo", "2024-01-01T00:00:00Z"),
        ]);
        assert_eq!(service.average_interval("octo/repo").unwrap().seconds(), Some(0.0));
    }

    #[test]
    fn test_average_malformed_timestamp_fails() {
        let service = service_with(&[
            (EventType::PullRequestEvent, "octo/repo", "2024-01-01T00:00:00Z"),
            (EventType::PullRequestEvent, "octo/repo", "not-a-date"),
        ]);
        let err = service.average_interval("octo/repo").unwrap_err();
        assert!(matches!(err, QueryError::MalformedTimestamp { ref value, .. } if value == "not-a-date"));
    }

    #[test]
    fn test_window_excludes_everything() {
        let service = service_with(&[
            (EventType::WatchEvent, "a/b", "2024-01-01T00:00:00Z"),
            (EventType::IssuesEvent, "a/b", "2024-01-01T00:10:00Z"),
        ]);
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();

        let counts = service.windowed_count_at(5, now).unwrap();
        assert_eq!(counts, WindowCounts::zeroed());
    }

    #[test]
    fn test_window_includes_everything() {
        let service = service_with(&[
            (EventType::WatchEvent, "a/b", "2024-01-01T00:00:00Z"),
            (EventType::WatchEvent, "a/b", "2024-01-01T01:00:00Z"),
            (EventType::PullRequestEvent, "a/b", "2024-01-01T02:00:00Z"),
            (EventType::IssuesEvent, "a/b", "2024-01-01T03:00:00Z"),
        ]);
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();

        let counts = service.windowed_count_at(24 * 60, now).unwrap();
        assert_eq!(counts.get(EventType::WatchEvent), 2);
        assert_eq!(counts.get(EventType::PullRequestEvent), 1);
        assert_eq!(counts.get(EventType::IssuesEvent), 1);
    }

    #[test]
    fn test_window_cutoff_is_inclusive() {
        let service = service_with(&[
            (EventType::IssuesEvent, "a/b", "2024-01-01T11:50:00Z"),
            (EventType::IssuesEvent, "a/b", "2024-01-01T11:49:59Z"),
        ]);
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();

        let counts = service.windowed_count_at(10, now).unwrap();
        assert_eq!(counts.get(EventType::IssuesEvent), 1);
    }

    #[test]
    fn test_window_huge_offset_includes_everything() {
        let service = service_with(&[
            (EventType::WatchEvent, "a/b", "2024-01-01T00:00:00Z"),
            (EventType::IssuesEvent, "a/b", "1970-01-01T00:00:00Z"),
        ]);

        for offset in [200_000_000_000, i64::MAX] {
            let counts = service.windowed_count(offset).unwrap();
            assert_eq!(counts.get(EventType::WatchEvent), 1);
            assert_eq!(counts.get(EventType::IssuesEvent), 1);
            assert_eq!(counts.get(EventType::PullRequestEvent), 0);
        }
    }

    #[test]
    fn test_window_huge_negative_offset_excludes_everything() {
        let service = service_with(&[(EventType::WatchEvent, "a/b", "2024-01-01T00:00:00Z")]);

        for offset in [-200_000_000_000, i64::MIN] {
            assert_eq!(service.windowed_count(offset).unwrap(), WindowCounts::zeroed());
        }
    }

    #[test]
    fn test_window_cutoff_saturates() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(window_cutoff(now, i64::MAX), DateTime::<Utc>::MIN_UTC);
        assert_eq!(window_cutoff(now, i64::MIN), DateTime::<Utc>::MAX_UTC);
        assert_eq!(
            window_cutoff(now, 30),
            Utc.with_ymd_and_hms(2024, 1, 1, 11, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_window_malformed_timestamp_fails() {
        let service = service_with(&[(EventType::WatchEvent, "a/b", "2024-13-45")]);
        assert!(matches!(
            service.windowed_count(10),
            Err(QueryError::MalformedTimestamp { .. })
        ));
    }
}
