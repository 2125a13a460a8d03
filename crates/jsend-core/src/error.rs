// Rust guideline compliant 2026-10-19

//! Error types for JSend envelope construction and writing.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for JSend operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Stable error kinds for callers that branch on failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The envelope could not be encoded as JSON.
    Serialization,
    /// The response sink rejected a header, status or body write.
    Write,
    /// Configuration values failed validation.
    InvalidConfig,
}

/// Error types for JSend operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The assembled envelope or its payload could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The underlying response sink failed. The IO error is passed through unchanged.
    #[error("Write error: {0}")]
    Write(#[from] std::io::Error),

    /// Invalid configuration file or environment override.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Returns the stable kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Serialization(_) => ErrorKind::Serialization,
            Error::Write(_) => ErrorKind::Write,
            Error::InvalidConfig(_) => ErrorKind::InvalidConfig,
        }
    }
}
