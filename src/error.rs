use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single repository search request.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search API returned {status}")]
    Status { status: StatusCode },
    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A prompt line that is neither search text nor a known command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid page number '{0}'")]
    InvalidPage(String),
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
}
