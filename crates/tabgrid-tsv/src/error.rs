//! TSV error types

use thiserror::Error;

/// Result type for TSV operations
pub type TsvResult<T> = std::result::Result<T, TsvError>;

/// Errors that can occur while writing TSV output
#[derive(Debug, Error)]
pub enum TsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Output was not valid UTF-8
    #[error("Output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] tabgrid_core::Error),
}
