//! Object storage errors.

use thiserror::Error;

/// Errors that can occur when talking to object storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// HTTP request failed.
    #[error("Storage request failed: {0}")]
    Request(String),

    /// Storage returned a non-success status.
    #[error("Storage API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The object name could not be turned into a URL.
    #[error("Invalid object name: {0}")]
    InvalidName(String),
}
