//! API Error Types
//!
//! Failure classification for backend calls. Raw errors are logged at
//! the call site for diagnostics; users only ever see catalog messages.

use thiserror::Error;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request could not be constructed (body serialization failed)
    #[error("Request error: {0}")]
    Request(String),

    /// Request never reached the server or the connection dropped
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Response body could not be decoded into the expected type
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
