//! Calendar routes. Every event is visible only to the realtor who owns it.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::{AppState, error::ApiError, middleware::CurrentRealtor};
use realty_core::calendar::{CalendarEventPatch, NewCalendarEvent};
use realty_db::{CalendarRepository, PropertyRepository, entities::calendar_events};
use realty_shared::types::ListWindow;

/// Creates the calendar routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/calendar", get(list_events).post(create_event))
        .route(
            "/calendar/{event_id}",
            get(get_event).put(update_event).delete(delete_event),
        )
}

async fn ensure_property(state: &AppState, property_id: i32) -> Result<(), ApiError> {
    PropertyRepository::new((*state.db).clone())
        .find_by_id(property_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| ApiError::not_found("Property"))
}

/// POST /calendar - Create an event owned by the caller.
async fn create_event(
    State(state): State<AppState>,
    current: CurrentRealtor,
    Json(payload): Json<NewCalendarEvent>,
) -> Result<(StatusCode, Json<calendar_events::Model>), ApiError> {
    payload.window()?;
    ensure_property(&state, payload.property_id).await?;

    let event = CalendarRepository::new((*state.db).clone())
        .create(current.id(), &payload)
        .await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /calendar - The caller's events by start time.
async fn list_events(
    State(state): State<AppState>,
    current: CurrentRealtor,
    Query(window): Query<ListWindow>,
) -> Result<Json<Vec<calendar_events::Model>>, ApiError> {
    let events = CalendarRepository::new((*state.db).clone())
        .list(current.id(), window)
        .await?;
    Ok(Json(events))
}

/// GET /calendar/{event_id} - One of the caller's events.
async fn get_event(
    State(state): State<AppState>,
    current: CurrentRealtor,
    Path(event_id): Path<i32>,
) -> Result<Json<calendar_events::Model>, ApiError> {
    CalendarRepository::new((*state.db).clone())
        .find(event_id, current.id())
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Calendar event"))
}

/// PUT /calendar/{event_id} - Replace the provided fields of one of the caller's events.
async fn update_event(
    State(state): State<AppState>,
    current: CurrentRealtor,
    Path(event_id): Path<i32>,
    Json(patch): Json<CalendarEventPatch>,
) -> Result<Json<calendar_events::Model>, ApiError> {
    if let Some(property_id) = patch.property_id {
        ensure_property(&state, property_id).await?;
    }

    CalendarRepository::new((*state.db).clone())
        .update(event_id, current.id(), &patch)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Calendar event"))
}

/// DELETE /calendar/{event_id} - Delete one of the caller's events.
async fn delete_event(
    State(state): State<AppState>,
    current: CurrentRealtor,
    Path(event_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if CalendarRepository::new((*state.db).clone())
        .delete(event_id, current.id())
        .await?
    {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Calendar event"))
    }
}
