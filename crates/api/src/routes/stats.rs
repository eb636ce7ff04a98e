//! Realtor statistics routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{AppState, error::ApiError, middleware::CurrentRealtor};
use realty_core::stats::RealtorStats;
use realty_db::StatsRepository;

/// Creates the stats routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/stats/me", get(my_stats))
        .route("/stats/realtors/{realtor_id}", get(realtor_stats))
}

async fn fetch(state: &AppState, realtor_id: i32) -> Result<Json<RealtorStats>, ApiError> {
    StatsRepository::new((*state.db).clone())
        .realtor_stats(realtor_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Realtor"))
}

/// GET /stats/me - The caller's listing counts and sales.
async fn my_stats(
    State(state): State<AppState>,
    current: CurrentRealtor,
) -> Result<Json<RealtorStats>, ApiError> {
    fetch(&state, current.id()).await
}

/// GET /stats/realtors/{realtor_id} - A realtor's listing counts and sales.
async fn realtor_stats(
    State(state): State<AppState>,
    _current: CurrentRealtor,
    Path(realtor_id): Path<i32>,
) -> Result<Json<RealtorStats>, ApiError> {
    fetch(&state, realtor_id).await
}
