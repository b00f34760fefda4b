//! Storage errors.

use cotiza_shared::AppError;
use thiserror::Error;

/// Errors from logo storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Provider misconfiguration.
    #[error("storage configuration error: {0}")]
    Configuration(String),

    /// Content type is not an accepted image format.
    #[error("unsupported logo content type: {0}")]
    UnsupportedContentType(String),

    /// Upload exceeds the size limit.
    #[error("logo exceeds maximum size of {limit} bytes")]
    TooLarge {
        /// Maximum accepted size in bytes.
        limit: usize,
    },

    /// Asset does not exist.
    #[error("logo not found: {0}")]
    NotFound(String),

    /// Backend failure.
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::UnsupportedContentType(_) | StorageError::TooLarge { .. } => {
                Self::InvalidInput(err.to_string())
            }
            StorageError::NotFound(_) => Self::NotFound(err.to_string()),
            StorageError::Configuration(_) | StorageError::Backend(_) => {
                Self::Internal(err.to_string())
            }
        }
    }
}
