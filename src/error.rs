//! Error types for the FPL watchlist

use thiserror::Error;


pub type Result<T> = std::result::Result<T, WatchlistError>;

#[derive(Error, Debug)]
pub enum WatchlistError {
    #[error("Invalid {kind}: {value:?}")]
    InvalidArgument { kind: &'static str, value: String },

    #[error("Invalid watchlist entry {id}: {reason}")]
    InvalidEntry { id: u64, reason: String },

    #[error("Player {id} is already on the watchlist")]
    DuplicatePlayer { id: u64 },

    #[error("Invalid countdown value: {value}")]
    InvalidCountdown { value: String },

    #[error("API health check failed with status {status}")]
    HealthCheck { status: u16 },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WatchlistError {
    pub(crate) fn invalid_entry(id: u64, reason: impl Into<String>) -> Self {
        WatchlistError::InvalidEntry {
            id,
            reason: reason.into(),
        }
    }
}
