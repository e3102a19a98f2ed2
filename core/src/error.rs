//! Error types for the TikHub client.
//!
//! # Design
//! A 422 is not an error here: it is a parsed [`HttpValidationError`] returned
//! as data. `UnexpectedStatus` only surfaces when the client is configured to
//! raise on statuses it has no model for. Transport failures keep the
//! underlying client's error type so callers can inspect timeouts and
//! connection errors directly.
//!
//! [`HttpValidationError`]: crate::models::HttpValidationError

use bytes::Bytes;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a status other than 200 or 422 and the client
    /// has `raise_on_unexpected_status` set.
    #[error("unexpected status code {status}: {}", String::from_utf8_lossy(.content))]
    UnexpectedStatus { status: u16, content: Bytes },

    /// A 200 or 422 body did not match its model, or a wire mapping was
    /// missing a required field.
    #[error("deserialization failed: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Transport error from the async client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport error from the blocking client.
    #[error("HTTP error: {0}")]
    Blocking(#[from] ureq::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Status code carried by the error, if the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::UnexpectedStatus { status, .. } => Some(*status),
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            ApiError::Blocking(ureq::Error::StatusCode(status)) => Some(*status),
            _ => None,
        }
    }
}
