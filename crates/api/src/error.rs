//! JSON error responses.
//!
//! Every failure leaves a handler as `{"error": <code>, "message": <text>}`
//! with the status taken from [`AppError::status_code`]. Internal errors are
//! logged and their details replaced by a generic message.

use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use realty_core::auth::AccessError;
use realty_core::calendar::WindowError;
use realty_core::document::DocumentError;
use realty_core::storage::StorageError;
use realty_db::RepositoryError;
use realty_shared::AppError;
use sea_orm::DbErr;
use serde_json::json;

/// An error returned by an API handler.
#[derive(Debug)]
pub struct ApiError {
    error: AppError,
    code: &'static str,
}

impl ApiError {
    /// Wraps an application error, using its default code.
    #[must_use]
    pub fn new(error: AppError) -> Self {
        let code = error.error_code();
        Self { error, code }
    }

    /// Wraps an application error under a more specific code.
    #[must_use]
    pub const fn with_code(error: AppError, code: &'static str) -> Self {
        Self { error, code }
    }

    /// Shorthand for a not-found error on a named entity.
    #[must_use]
    pub fn not_found(entity: &str) -> Self {
        Self::new(AppError::not_found(entity))
    }

    /// Shorthand for a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(AppError::Validation(message.into()))
    }

    /// Machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// The wrapped application error.
    #[must_use]
    pub const fn inner(&self) -> &AppError {
        &self.error
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.error.fmt(f)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.error.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = if self.error.is_internal() {
            tracing::error!(error = %self.error, "request failed");
            "An internal error occurred".to_string()
        } else {
            self.error.to_string()
        };

        (
            status,
            Json(json!({ "error": self.code, "message": message })),
        )
            .into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self::new(error)
    }
}

impl From<AccessError> for ApiError {
    fn from(err: AccessError) -> Self {
        let code = match err {
            AccessError::Unauthenticated => "unauthorized",
            AccessError::Inactive => "inactive_account",
            AccessError::InsufficientRole { .. } => "insufficient_role",
        };
        Self::with_code(err.into(), code)
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        Self::new(AppError::Database(err.to_string()))
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        Self::new(err.into())
    }
}

impl From<DocumentError> for ApiError {
    fn from(err: DocumentError) -> Self {
        Self::new(err.into())
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        Self::new(err.into())
    }
}

impl From<WindowError> for ApiError {
    fn from(err: WindowError) -> Self {
        Self::new(err.into())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::new(AppError::PayloadTooLarge(err.body_text()))
        } else {
            Self::validation(err.body_text())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use realty_core::auth::RealtorRole;
    use rstest::rstest;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[rstest]
    #[case(AccessError::Unauthenticated, StatusCode::UNAUTHORIZED, "unauthorized")]
    #[case(AccessError::Inactive, StatusCode::FORBIDDEN, "inactive_account")]
    #[case(
        AccessError::InsufficientRole { required: RealtorRole::Admin },
        StatusCode::FORBIDDEN,
        "insufficient_role"
    )]
    #[tokio::test]
    async fn test_access_errors(
        #[case] err: AccessError,
        #[case] status: StatusCode,
        #[case] code: &str,
    ) {
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), status);
        assert_eq!(body_json(response).await["error"], code);
    }

    #[tokio::test]
    async fn test_internal_details_hidden() {
        let response = ApiError::from(DbErr::Custom("relation missing".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "internal_error");
        assert!(!body["message"].as_str().unwrap().contains("relation"));
    }

    #[tokio::test]
    async fn test_conflict_message_kept() {
        let err = RepositoryError::Conflict("Email already registered".into());
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = body_json(response).await;
        assert_eq!(body["error"], "conflict");
        assert_eq!(body["message"], "Conflict: Email already registered");
    }
}
