//! Repository error type shared by the write paths that can conflict.

use realty_core::calendar::WindowError;
use realty_shared::AppError;
use sea_orm::{DbErr, SqlErr};

/// Errors returned by repository writes.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// A unique key is already taken.
    #[error("{0}")]
    Conflict(String),

    /// Event window ends before it starts.
    #[error(transparent)]
    InvalidWindow(#[from] WindowError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl RepositoryError {
    /// Maps a unique-constraint violation to `Conflict`, anything else to `Database`.
    pub(crate) fn from_insert(err: DbErr, conflict: impl FnOnce() -> String) -> Self {
        if is_unique_violation(&err) {
            Self::Conflict(conflict())
        } else {
            Self::Database(err)
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Conflict(msg) => Self::Conflict(msg),
            RepositoryError::InvalidWindow(e) => e.into(),
            RepositoryError::Database(e) => {
                tracing::error!(error = %e, "database error");
                Self::Database(e.to_string())
            }
        }
    }
}

/// Returns true if `err` is a unique-constraint violation.
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
