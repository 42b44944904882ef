//! Error types for object fetch operations.

use thiserror::Error;

/// Result type for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors surfaced by URI parsing, endpoint resolution, and fetches.
///
/// Only "does not exist" gets its own class; every other collaborator
/// failure is propagated as [`FetchError::Other`] without retries.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The input is not syntactically a URI
    #[error("invalid object URI {uri:?}: {reason}")]
    InvalidUri { uri: String, reason: String },

    /// The addressed bucket or object key does not exist
    #[error("object does not exist: {key}")]
    NotFound { key: String },

    /// Rejected fetcher configuration
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Rejected byte-range request
    #[error("invalid byte range: {message}")]
    InvalidRange { message: String },

    /// The caller cancelled an in-flight fetch
    #[error("fetch cancelled")]
    Cancelled,

    /// Any other storage failure (network, permissions, malformed range
    /// as reported by the service, ...)
    #[error("storage error: {0}")]
    Other(String),
}

impl FetchError {
    /// Check if the error means the bucket or key is absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }

    /// Check if a later retry by the caller could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, FetchError::Other(_) | FetchError::Cancelled)
    }

    /// Not-found error for a bucket whose region could not be discovered
    pub(crate) fn bucket_not_found(bucket: &str) -> Self {
        FetchError::NotFound {
            key: format!("bucket/{}", bucket),
        }
    }
}
