//! Domain error types
//!
//! This module defines the error taxonomy surfaced by the adapter layer.
//! Errors never expose third-party HTTP client types; transport failures are
//! converted at the boundary.

use std::fmt;
use thiserror::Error;

/// Main error type for the adapter layer
///
/// Every service operation returns this error. Nothing in the adapter layer
/// swallows or retries a failure: the caller sees each error exactly once.
#[derive(Debug, Error)]
pub enum ClinicError {
    /// Configuration-related errors, including transport use in mock mode
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Non-success HTTP response
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// A value failed schema validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The caller cancelled the operation before it completed
    #[error("Request cancelled")]
    Cancelled,

    /// Network/connection errors
    #[error("Connection error: {0}")]
    Connection(String),

    /// Response body could not be decoded as JSON
    #[error("Decode error: {0}")]
    Decode(String),

    /// Lookup miss against fixture data
    #[error("Not found: {0}")]
    NotFound(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl ClinicError {
    /// HTTP status code, if this error came from a non-success response
    pub fn status(&self) -> Option<u16> {
        match self {
            ClinicError::Http(e) => Some(e.status),
            _ => None,
        }
    }

    /// Whether the error was caused by caller-initiated cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ClinicError::Cancelled)
    }
}

/// Non-2xx response from the backend
///
/// The body is captured on a best-effort basis: if reading it fails the
/// error still carries the status with an empty body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{status} {status_text}: {body}")]
pub struct HttpError {
    /// Numeric status code
    pub status: u16,

    /// Standard reason phrase for `status` (e.g. `Not Found`), not the
    /// phrase the server sent; empty for non-standard codes
    pub status_text: String,

    /// Response body text
    pub body: String,
}

impl HttpError {
    /// Creates a new HTTP error
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    /// Whether the status is in the 5xx range
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}

/// Schema mismatch on a required field
///
/// `path` is a dotted and indexed location relative to the parsed value,
/// such as `[1].id` for the second element of a list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationError {
    /// Location of the offending value
    pub path: String,

    /// Human readable reason
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

impl From<reqwest::Error> for ClinicError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClinicError::Decode(err.to_string())
        } else {
            ClinicError::Connection(err.to_string())
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ClinicError {
    fn from(err: std::io::Error) -> Self {
        ClinicError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ClinicError {
    fn from(err: serde_json::Error) -> Self {
        ClinicError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ClinicError {
    fn from(err: toml::de::Error) -> Self {
        ClinicError::Configuration(format!("TOML parse error: {err}"))
    }
}
