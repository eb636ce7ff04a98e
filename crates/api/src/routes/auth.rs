//! Token issuance and the current-realtor endpoint.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use tracing::info;

use crate::{AppState, error::ApiError, middleware::CurrentRealtor};
use realty_db::{RealtorRepository, entities::realtors};
use realty_shared::{AppError, TokenRequest, TokenResponse};

/// Creates the public auth routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/token", post(issue_token))
}

/// Creates the auth routes that need an authenticated realtor.
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/users/me", get(me))
}

/// POST /token - Exchange email and password for an access token.
///
/// The active flag is not checked here; an inactive realtor gets a token
/// but every protected route answers 403.
async fn issue_token(
    State(state): State<AppState>,
    Json(payload): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let realtor = RealtorRepository::new((*state.db).clone())
        .authenticate(&payload.email, &payload.password)
        .await?
        .ok_or_else(|| {
            info!(email = %payload.email, "failed login attempt");
            ApiError::with_code(
                AppError::Unauthorized("Incorrect email or password".into()),
                "invalid_credentials",
            )
        })?;

    let access_token = state
        .jwt_service
        .generate_access_token(&realtor.email)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    info!(realtor_id = realtor.id, "realtor logged in");

    Ok(Json(TokenResponse::bearer(
        access_token,
        state.jwt_service.access_token_expires_in(),
    )))
}

/// GET /users/me - The authenticated realtor.
async fn me(current: CurrentRealtor) -> Json<realtors::Model> {
    Json(current.0)
}
