//! Error types.

use std::io;

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single round trip to the question store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request never completed.
    #[error("could not reach the question store: {0}")]
    Transport(#[source] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("question store responded with {status}")]
    Status { status: StatusCode },

    /// The store answered but the body was not what we expected.
    #[error("question store sent an unreadable response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl StoreError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            StoreError::Status { status } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

/// Configuration problems detected at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base URL {url:?}: {reason}")]
    BaseUrl { url: String, reason: String },
}

/// Error type for running the admin console.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
