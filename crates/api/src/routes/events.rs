//! Training event routes.
//!
//! Only admins create events; any realtor may register, at most once.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use crate::{AppState, error::ApiError, middleware::CurrentRealtor};
use realty_core::auth::{RealtorRole, RoleRequirement};
use realty_db::{
    CreateTrainingEventInput, RegistrationOutcome, TrainingRepository,
    entities::{event_registrations, training_events},
};
use realty_shared::types::ListWindow;

/// Creates the training event routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route("/events/{event_id}", get(get_event))
        .route("/events/{event_id}/register", post(register))
        .route("/events/{event_id}/registrations", get(list_registrations))
}

/// Request body for creating a training event.
#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    /// Title.
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Speaker or organizer.
    pub speaker: String,
    /// Start time.
    pub start_time: DateTime<Utc>,
    /// End time.
    pub end_time: DateTime<Utc>,
    /// Held online.
    #[serde(default)]
    pub is_online: bool,
    /// Stream or webinar link.
    #[serde(default)]
    pub link: Option<String>,
}

impl From<CreateEventRequest> for CreateTrainingEventInput {
    fn from(req: CreateEventRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            speaker: req.speaker,
            start_time: req.start_time,
            end_time: req.end_time,
            is_online: req.is_online,
            link: req.link,
        }
    }
}

async fn find_event(state: &AppState, event_id: i32) -> Result<training_events::Model, ApiError> {
    TrainingRepository::new((*state.db).clone())
        .find(event_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Event"))
}

/// POST /events - Create a training event. Admin only.
async fn create_event(
    State(state): State<AppState>,
    current: CurrentRealtor,
    Json(payload): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<training_events::Model>), ApiError> {
    current.require(RoleRequirement::Exactly(RealtorRole::Admin))?;

    let event = TrainingRepository::new((*state.db).clone())
        .create(payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /events - Training events by start time.
async fn list_events(
    State(state): State<AppState>,
    _current: CurrentRealtor,
    Query(window): Query<ListWindow>,
) -> Result<Json<Vec<training_events::Model>>, ApiError> {
    let events = TrainingRepository::new((*state.db).clone())
        .list(window)
        .await?;
    Ok(Json(events))
}

/// GET /events/{event_id} - A training event.
async fn get_event(
    State(state): State<AppState>,
    _current: CurrentRealtor,
    Path(event_id): Path<i32>,
) -> Result<Json<training_events::Model>, ApiError> {
    find_event(&state, event_id).await.map(Json)
}

/// POST /events/{event_id}/register - Register the caller.
///
/// A repeat registration answers 200 with `already_registered` and writes
/// nothing.
async fn register(
    State(state): State<AppState>,
    current: CurrentRealtor,
    Path(event_id): Path<i32>,
) -> Result<Response, ApiError> {
    find_event(&state, event_id).await?;

    let outcome = TrainingRepository::new((*state.db).clone())
        .register(event_id, current.id())
        .await?;

    Ok(match outcome {
        RegistrationOutcome::Registered(registration) => (
            StatusCode::CREATED,
            Json(json!({ "status": "registered", "registration": registration })),
        )
            .into_response(),
        RegistrationOutcome::AlreadyRegistered => (
            StatusCode::OK,
            Json(json!({ "status": "already_registered" })),
        )
            .into_response(),
    })
}

/// GET /events/{event_id}/registrations - Registrations of an event.
async fn list_registrations(
    State(state): State<AppState>,
    _current: CurrentRealtor,
    Path(event_id): Path<i32>,
) -> Result<Json<Vec<event_registrations::Model>>, ApiError> {
    find_event(&state, event_id).await?;

    let registrations = TrainingRepository::new((*state.db).clone())
        .registrations(event_id)
        .await?;
    Ok(Json(registrations))
}
