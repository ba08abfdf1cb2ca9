//! Error types for tabgrid-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tabgrid-core
#[derive(Debug, Error)]
pub enum Error {
    /// Row index 0 passed to a write (rows start at 1)
    #[error("Row index must be >= 1 (column {col})")]
    ZeroRow { col: u32 },

    /// Column index 0 passed to a write (columns start at 1)
    #[error("Column index must be >= 1 (row {row})")]
    ZeroColumn { row: u32 },

    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Column label with no letters or with characters outside A-Z
    #[error("Invalid column label: {0:?}")]
    InvalidColumnLabel(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
