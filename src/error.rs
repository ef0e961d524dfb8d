//! Centralized error handling for swiftstatus

use std::io;

/// Custom error type for swiftstatus operations
#[derive(Debug, thiserror::Error)]
pub enum SwiftstatusError {
    /// I/O errors (file reading, command execution, writing the status line)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Parsing errors (invalid data format)
    #[error("Parse error: {0}")]
    Parse(String),
    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
    /// System detection errors
    #[error("Detection error: {0}")]
    Detection(String),
    /// Format string errors (bad conversion, missing argument)
    #[error("Format error: {0}")]
    Format(String),
    /// Rendered fragment would not fit its buffer
    #[error("Output would exceed {limit} bytes")]
    Overflow { limit: usize },
}

/// Type alias for Results in swiftstatus
pub type Result<T> = std::result::Result<T, SwiftstatusError>;
