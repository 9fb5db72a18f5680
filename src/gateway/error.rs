//! Fetch failures.
//!
//! The store only distinguishes "fetch failed"; the variants exist so the
//! message shown to the user and the log line say what actually went wrong.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Catalog responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Request timeout after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Fetch worker is not running")]
    WorkerUnavailable,
}

impl FetchError {
    /// Short, stable category for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Client(_) => "client",
            FetchError::Transport { .. } => "transport",
            FetchError::Status { .. } => "status",
            FetchError::Decode(_) => "decode",
            FetchError::Timeout { .. } => "timeout",
            FetchError::WorkerUnavailable => "worker_unavailable",
        }
    }
}
