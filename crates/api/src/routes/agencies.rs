//! Agency routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError, middleware::CurrentRealtor};
use realty_core::stats::AgencyStats;
use realty_db::{AgencyRepository, StatsRepository, entities::realtors};

/// Creates the public agency routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/agencies", post(create_agency))
}

/// Creates the agency routes that need an authenticated realtor.
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/agencies/{agency_id}", get(get_agency))
        .route("/agencies/{agency_id}/stats", get(get_agency_stats))
}

/// Request body for creating an agency.
#[derive(Debug, Deserialize)]
pub struct CreateAgencyRequest {
    /// Agency name; must be unique.
    pub name: String,
}

/// An agency together with its realtors.
#[derive(Debug, Serialize)]
pub struct AgencyResponse {
    /// Agency ID.
    pub id: i32,
    /// Agency name.
    pub name: String,
    /// Created at.
    pub created_at: DateTime<FixedOffset>,
    /// Realtors of the agency.
    pub realtors: Vec<realtors::Model>,
}

/// POST /agencies - Create an agency.
async fn create_agency(
    State(state): State<AppState>,
    Json(payload): Json<CreateAgencyRequest>,
) -> Result<(StatusCode, Json<AgencyResponse>), ApiError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(ApiError::validation("name must not be empty"));
    }

    let agency = AgencyRepository::new((*state.db).clone())
        .create(name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AgencyResponse {
            id: agency.id,
            name: agency.name,
            created_at: agency.created_at,
            realtors: Vec::new(),
        }),
    ))
}

/// GET /agencies/{agency_id} - An agency with its realtors.
async fn get_agency(
    State(state): State<AppState>,
    _current: CurrentRealtor,
    Path(agency_id): Path<i32>,
) -> Result<Json<AgencyResponse>, ApiError> {
    let repo = AgencyRepository::new((*state.db).clone());
    let agency = repo
        .find_by_id(agency_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Agency"))?;
    let realtors = repo.realtors(agency_id).await?;

    Ok(Json(AgencyResponse {
        id: agency.id,
        name: agency.name,
        created_at: agency.created_at,
        realtors,
    }))
}

/// GET /agencies/{agency_id}/stats - Listing counts and sales for an agency.
async fn get_agency_stats(
    State(state): State<AppState>,
    _current: CurrentRealtor,
    Path(agency_id): Path<i32>,
) -> Result<Json<AgencyStats>, ApiError> {
    StatsRepository::new((*state.db).clone())
        .agency_stats(agency_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Agency"))
}
