//! Error types for the power HAL access layer.
//!
//! Everything here is a transport-level failure: the remote endpoint was
//! unreachable, died mid-call, or produced a reply this side cannot use.
//! A domain-valid "not supported" answer is not an error — it travels as a
//! successful call carrying `false` and surfaces as
//! [`HalResult::Unsupported`](crate::HalResult::Unsupported).

use std::net::SocketAddr;
use thiserror::Error;

/// Main error type for power HAL operations.
#[derive(Debug, Error)]
pub enum PowerHalError {
    /// The connection to the power service could not be established or broke
    /// mid-call.
    #[error("Connection to power service at {addr} lost")]
    ConnectionLost { addr: SocketAddr },

    /// The power service reported a fault instead of answering.
    #[error("Power service fault: {message}")]
    Remote { message: String },

    /// A reply could not be decoded.
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// A wire-level constraint was violated (reply shape, UTF-8).
    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },

    /// Socket-level failure.
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

/// Result type alias for power HAL operations.
pub type Result<T> = std::result::Result<T, PowerHalError>;

impl From<std::io::Error> for PowerHalError {
    fn from(err: std::io::Error) -> Self {
        PowerHalError::Io {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for PowerHalError {
    fn from(err: serde_json::Error) -> Self {
        PowerHalError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}
