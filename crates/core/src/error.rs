//! Backend error types
//!
//! Errors reported by a [`Store`](crate::Store) implementation. The encoding
//! layer forwards them verbatim; it never inspects or rewrites them.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for backend operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Error types reported by a backend store
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error (file operations, network, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Store is not open
    #[error("Database is not open")]
    NotOpen,

    /// The backend does not implement the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(&'static str),

    /// Data corruption detected
    #[error("Data corruption: {0}")]
    Corruption(String),

    /// Any other backend failure
    #[error("{0}")]
    Storage(String),
}

impl StoreError {
    /// Backend failure with a free-form message
    pub fn storage(message: impl Into<String>) -> Self {
        StoreError::Storage(message.into())
    }
}
