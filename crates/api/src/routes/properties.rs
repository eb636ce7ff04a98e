//! Property listing routes.
//!
//! Updates go through the audited mutation path: one history row per changed
//! field and, on a status change, a notification to every realtor of the
//! listing's agency.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use tracing::info;

use crate::{AppState, error::ApiError, middleware::CurrentRealtor};
use realty_core::property::{NewProperty, PropertyPatch};
use realty_db::{
    HistoryRepository, PropertyRepository,
    entities::{properties, property_history},
};
use realty_shared::types::ListWindow;

/// Creates the property routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/properties", get(list_properties).post(create_property))
        .route(
            "/properties/{property_id}",
            get(get_property).patch(update_property),
        )
        .route("/properties/{property_id}/history", get(get_history))
}

/// GET /properties - List listings.
async fn list_properties(
    State(state): State<AppState>,
    _current: CurrentRealtor,
    Query(window): Query<ListWindow>,
) -> Result<Json<Vec<properties::Model>>, ApiError> {
    let listings = PropertyRepository::new((*state.db).clone())
        .list(window)
        .await?;
    Ok(Json(listings))
}

/// POST /properties - Create a listing in the caller's agency.
async fn create_property(
    State(state): State<AppState>,
    current: CurrentRealtor,
    Json(payload): Json<NewProperty>,
) -> Result<(StatusCode, Json<properties::Model>), ApiError> {
    if payload.title.trim().is_empty() {
        return Err(ApiError::validation("title must not be empty"));
    }
    if payload.price < 0 {
        return Err(ApiError::validation("price must not be negative"));
    }

    let property = PropertyRepository::new((*state.db).clone())
        .create(&payload, current.agency_id(), current.id())
        .await?;

    Ok((StatusCode::CREATED, Json(property)))
}

/// GET /properties/{property_id} - A listing by ID.
async fn get_property(
    State(state): State<AppState>,
    _current: CurrentRealtor,
    Path(property_id): Path<i32>,
) -> Result<Json<properties::Model>, ApiError> {
    PropertyRepository::new((*state.db).clone())
        .find_by_id(property_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Property"))
}

/// PATCH /properties/{property_id} - Apply a partial update.
///
/// Absent fields are left alone; `null` clears a nullable field.
async fn update_property(
    State(state): State<AppState>,
    current: CurrentRealtor,
    Path(property_id): Path<i32>,
    Json(patch): Json<PropertyPatch>,
) -> Result<Json<properties::Model>, ApiError> {
    if patch.title.as_ref().is_some_and(|t| t.trim().is_empty()) {
        return Err(ApiError::validation("title must not be empty"));
    }
    if patch.price.is_some_and(|p| p < 0) {
        return Err(ApiError::validation("price must not be negative"));
    }

    let updated = PropertyRepository::new((*state.db).clone())
        .update(property_id, &patch, current.id())
        .await?
        .ok_or_else(|| ApiError::not_found("Property"))?;

    info!(property_id, actor_id = current.id(), status = ?updated.status, "property patched");
    Ok(Json(updated))
}

/// GET /properties/{property_id}/history - Audit trail of a listing, oldest first.
async fn get_history(
    State(state): State<AppState>,
    _current: CurrentRealtor,
    Path(property_id): Path<i32>,
) -> Result<Json<Vec<property_history::Model>>, ApiError> {
    if PropertyRepository::new((*state.db).clone())
        .find_by_id(property_id)
        .await?
        .is_none()
    {
        return Err(ApiError::not_found("Property"));
    }

    let rows = HistoryRepository::new((*state.db).clone())
        .list_for_property(property_id)
        .await?;
    Ok(Json(rows))
}
