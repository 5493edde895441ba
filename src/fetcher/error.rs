use thiserror::Error;

pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Failure of a single fetch cycle
///
/// Every variant is detected before any record is saved, so a failed cycle
/// leaves the store untouched.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("feed returned status {status}")]
    Status { status: u16 },

    #[error("feed body is not a JSON array of events: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// HTTP status reported by the feed, if the failure carried one
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status } => Some(*status),
            FetchError::Transport(err) => err.status().map(|s| s.as_u16()),
            FetchError::Decode(_) => None,
        }
    }
}
