//! Error types for `InnerTube` operations

use thiserror::Error;

/// Result type for `InnerTube` operations
pub type InnertubeResult<T> = Result<T, InnertubeError>;

/// Errors that can occur while talking to `InnerTube`
#[derive(Error, Debug)]
pub enum InnertubeError {
    /// The HTTP client could not be built
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Transport failure (DNS, TLS, timeout, connection reset)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Session bootstrap failed
    #[error("Session error: {0}")]
    Session(String),

    /// The requested channel does not exist
    #[error("Channel not found: {0}")]
    ChannelNotFound(String),

    /// Upstream returned an error payload
    #[error("InnerTube API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by upstream
        status: u16,
        /// Message extracted from the upstream error object
        message: String,
    },

    /// Upstream returned something that is not JSON
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Any other failure, displayed verbatim
    #[error("{0}")]
    Other(String),
}
