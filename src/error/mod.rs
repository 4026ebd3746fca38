//! Error handling and diagnostics
//!
//! The scanner itself never fails: unrecognised characters become
//! [`TokenKind::Illegal`](crate::TokenKind::Illegal) tokens. The errors here
//! belong to the layers around it (reading input, applying configuration,
//! and hosts that choose to reject illegal characters).

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type alias for scanner host operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors raised around a scan
#[derive(Debug, Error)]
pub enum ScanError {
    /// The input could not be read
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Illegal characters were found and the host asked to reject them
    #[error("found {count} illegal character(s)")]
    IllegalCharacters { count: usize },
}

impl ScanError {
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn illegal_characters(count: usize) -> Self {
        Self::IllegalCharacters { count }
    }

    /// Get the error kind as a string
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Io { .. } => "I/O Error",
            Self::IllegalCharacters { .. } => "Scan Error",
        }
    }
}

/// Invalid scanner configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown range keyword '{0}' (expected 'btwn' or 'through')")]
    UnknownRangeKeyword(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = ScanError::io(
            "data.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.kind(), "I/O Error");
        assert_eq!(err.to_string(), "failed to read 'data.txt': no such file");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_illegal_characters_display() {
        let err = ScanError::illegal_characters(3);
        assert_eq!(err.kind(), "Scan Error");
        assert_eq!(err.to_string(), "found 3 illegal character(s)");
    }
}
