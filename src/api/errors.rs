//! API client errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by every [`crate::api::StorefrontApi`] operation.
///
/// Neither kind is retried; callers (the screen controllers) are the
/// sole error boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed: DNS, connection, or decode failure.
    #[error("http transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status. Only the status
    /// text is carried; no structured error body is parsed.
    #[error("api request failed: {status}")]
    Status {
        /// The non-success HTTP status.
        status: StatusCode,
    },
}
