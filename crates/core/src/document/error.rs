//! Document assembly errors.

use cotiza_shared::AppError;
use thiserror::Error;

/// Errors from document assembly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    /// Client name missing or blank.
    #[error("client name is required")]
    MissingClientName,
}

impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
