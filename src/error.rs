//! Centralized error handling for sysdash
//!
//! These errors never reach the renderer: every probe collapses them to the
//! "unknown" sentinel at its public boundary.

use std::fmt;
use std::io;

/// Custom error type for sysdash operations
#[derive(Debug)]
pub enum SysdashError {
    /// I/O errors (file reading, command execution)
    Io(io::Error),
    /// Parsing errors (invalid data format)
    Parse(String),
    /// Configuration errors
    #[allow(dead_code)]
    Config(String),
    /// Probe errors (expected line/column/key not found)
    Detection(String),
}

impl fmt::Display for SysdashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SysdashError::Io(err) => write!(f, "I/O error: {}", err),
            SysdashError::Parse(msg) => write!(f, "Parse error: {}", msg),
            SysdashError::Config(msg) => write!(f, "Config error: {}", msg),
            SysdashError::Detection(msg) => write!(f, "Detection error: {}", msg),
        }
    }
}

impl std::error::Error for SysdashError {}

impl From<io::Error> for SysdashError {
    fn from(error: io::Error) -> Self {
        SysdashError::Io(error)
    }
}

/// Type alias for Results in sysdash
pub type Result<T> = std::result::Result<T, SysdashError>;
