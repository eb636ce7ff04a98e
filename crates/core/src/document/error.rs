//! Document error types.

use realty_shared::AppError;
use thiserror::Error;

use crate::storage::StorageError;

/// Document operation errors.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Document not found, or owned by another agency.
    #[error("document not found: {0}")]
    NotFound(i32),

    /// The upload carried no usable filename.
    #[error("missing filename")]
    MissingFilename,

    /// Storage operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Repository operation failed.
    #[error("repository error: {0}")]
    Repository(String),
}

impl DocumentError {
    /// Create a repository error.
    #[must_use]
    pub fn repository(msg: impl Into<String>) -> Self {
        Self::Repository(msg.into())
    }
}

impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::NotFound(_) => Self::not_found("Document"),
            DocumentError::MissingFilename => Self::Validation(err.to_string()),
            DocumentError::Storage(inner) => inner.into(),
            DocumentError::Repository(msg) => Self::Database(msg),
        }
    }
}
