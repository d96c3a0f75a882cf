//! Gallery errors.

use thiserror::Error;

/// Errors raised by the gallery reducer.
#[derive(Debug, Error, PartialEq)]
pub enum GalleryError {
    #[error("Event '{event}' requires a {expected} payload")]
    MissingPayload {
        event: &'static str,
        expected: &'static str,
    },
}

/// Errors raised by the photo feed collaborator.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Invalid feed URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Feed request failed: {0}")]
    Request(String),

    #[error("Feed body could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid gallery config: {0}")]
    Config(String),
}
