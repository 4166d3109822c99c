//! Errors raised by the outbound HTTP calls.

use thiserror::Error;

/// Result type for folio network operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the contact form and feed requests.
#[derive(Error, Debug)]
pub enum Error {
    /// The request never produced a usable response (offline, CORS, bad JSON).
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("Server responded with {0}")]
    Status(u16),

    /// The feed proxy answered but reported a status other than `ok`.
    #[error("Failed to get RSS feed (status: {0})")]
    FeedStatus(String),
}
