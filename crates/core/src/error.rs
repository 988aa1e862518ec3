//! Error types for ocp-core
//!
//! Provides a unified error type covering the four failure classes of a
//! transfer: resolution, open, mid-copy, and asynchronous upload failures.

use thiserror::Error;

/// Result type alias for ocp-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which end of a transfer an open failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Destination,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Source => write!(f, "source"),
            Side::Destination => write!(f, "destination"),
        }
    }
}

/// Error types for ocp-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed remote location string
    #[error("Invalid location: {0}")]
    Resolution(String),

    /// Source or destination could not be opened
    #[error("Cannot open {side} {location}: {reason}")]
    Open {
        side: Side,
        location: String,
        reason: String,
    },

    /// Read/write failure mid-copy
    #[error("Transfer failed: {0}")]
    Transfer(String),

    /// Failure reported by the bridge's upload task
    #[error("Upload failed: {0}")]
    Upload(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Remote store error
    #[error("Store error: {0}")]
    Store(String),
}

impl Error {
    /// Build an Open error for the given side and location
    pub fn open(side: Side, location: impl std::fmt::Display, reason: impl ToString) -> Self {
        Error::Open {
            side,
            location: location.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Resolution("a:nocontainer".into());
        assert_eq!(err.to_string(), "Invalid location: a:nocontainer");

        let err = Error::open(Side::Source, "a:bucket/key", "no such key");
        assert_eq!(
            err.to_string(),
            "Cannot open source a:bucket/key: no such key"
        );

        let err = Error::open(Side::Destination, "/tmp/out", "permission denied");
        assert!(err.to_string().starts_with("Cannot open destination"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
