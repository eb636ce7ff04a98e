//! Realtor routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::Deserialize;
use tracing::info;

use crate::{AppState, error::ApiError, middleware::CurrentRealtor};
use realty_core::auth::{AccessError, RealtorRole, RoleRequirement, hash_password};
use realty_db::{CreateRealtorInput, RealtorRepository, entities::realtors};
use realty_shared::AppError;

/// Creates the realtor routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/realtors", post(create_realtor))
        .route("/realtors/{realtor_id}", get(get_realtor))
}

/// Request body for creating a realtor.
#[derive(Debug, Deserialize)]
pub struct CreateRealtorRequest {
    /// Login email; must be unique.
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Plaintext password.
    pub password: String,
    /// Role to grant; at most the caller's own.
    #[serde(default)]
    pub role: RealtorRole,
}

/// POST /realtors - Add a realtor to the caller's agency.
///
/// Requires manager or above. The caller cannot grant a role above its own.
async fn create_realtor(
    State(state): State<AppState>,
    current: CurrentRealtor,
    Json(payload): Json<CreateRealtorRequest>,
) -> Result<(StatusCode, Json<realtors::Model>), ApiError> {
    current.require(RoleRequirement::AtLeast(RealtorRole::Manager))?;
    if !current.role().at_least(payload.role) {
        return Err(AccessError::InsufficientRole {
            required: payload.role,
        }
        .into());
    }

    let email = payload.email.trim().to_string();
    if email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::validation("email and password are required"));
    }

    let password_hash =
        hash_password(&payload.password).map_err(|e| AppError::Internal(e.to_string()))?;

    let realtor = RealtorRepository::new((*state.db).clone())
        .create(CreateRealtorInput {
            email,
            full_name: payload.full_name,
            password_hash,
            role: payload.role,
            agency_id: current.agency_id(),
        })
        .await?;

    info!(
        realtor_id = realtor.id,
        created_by = current.id(),
        role = %payload.role,
        "realtor added to agency"
    );
    Ok((StatusCode::CREATED, Json(realtor)))
}

/// GET /realtors/{realtor_id} - A realtor by ID.
async fn get_realtor(
    State(state): State<AppState>,
    _current: CurrentRealtor,
    Path(realtor_id): Path<i32>,
) -> Result<Json<realtors::Model>, ApiError> {
    RealtorRepository::new((*state.db).clone())
        .find_by_id(realtor_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Realtor"))
}
