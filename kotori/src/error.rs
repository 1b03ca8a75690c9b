//! Unified error types for the kotori client.

use std::path::PathBuf;

/// Result type alias for kotori operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the kotori client.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The client was constructed with an unusable configuration,
    /// e.g. an empty API key.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A local file required for an upload does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// I/O failure while reading a local file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Connection-level or timeout failure from the HTTP transport.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with an error status or an embedded error object.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Human-readable message from the service's error payload,
        /// or a generic fallback when none was present.
        message: String,
    },

    /// The response body could not be decoded as a JSON object.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// HTTP status code carried by this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
