//! CLI error type.

use thiserror::Error;

/// Errors surfaced by the `attendance` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Failure inside the accounting libraries.
    #[error(transparent)]
    Attendance(#[from] att_core::Error),

    /// I/O failure, e.g. starting the async runtime.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Bad command-line input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
