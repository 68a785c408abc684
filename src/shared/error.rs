//! Shared Error Types
//!
//! Errors raised by the transport layer and surfaced through the
//! synchronization controller.
//!
//! # Error Categories
//!
//! - `Network` - connectivity failures and non-success HTTP responses
//! - `Validation` - a message payload rejected by the server (or by the
//!   client before it is sent)
//! - `Serialization` - a response body that could not be decoded
//!
//! # Usage
//!
//! ```rust
//! use chatdesk::shared::error::SyncError;
//!
//! let error = SyncError::validation("image messages need a media URL");
//! assert!(!error.is_network());
//! ```
use thiserror::Error;

/// Errors produced while talking to the messaging server
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// Transport or connectivity failure, or a non-success response
    #[error("Network error: {message}")]
    Network {
        /// Human-readable error message
        message: String,
        /// HTTP status code, when the server answered
        status: Option<u16>,
    },

    /// Payload shape rejected before or by the server
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// Response body could not be decoded
    #[error("Serialization error: {message}")]
    Serialization {
        /// Human-readable error message
        message: String,
    },
}

impl SyncError {
    /// Create a network error without an HTTP status
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            status: None,
        }
    }

    /// Create a network error for a non-success HTTP status
    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            status: Some(status),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// HTTP status attached to the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::serialization(format!("Failed to parse response: {}", err));
        }
        match err.status() {
            Some(status) => Self::http_status(status.as_u16(), err.to_string()),
            None => Self::network(err.to_string()),
        }
    }
}
