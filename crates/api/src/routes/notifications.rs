//! Notification inbox routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use serde::Deserialize;

use crate::{AppState, error::ApiError, middleware::CurrentRealtor};
use realty_db::{NotificationRepository, entities::notifications};

/// Creates the notification routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(list_notifications))
        .route("/notifications/{notification_id}/read", post(mark_read))
}

/// Query parameters for listing notifications.
#[derive(Debug, Default, Deserialize)]
pub struct NotificationQuery {
    /// Only return unread notifications.
    #[serde(default)]
    pub unread_only: bool,
}

/// GET /notifications - The caller's notifications, newest first.
async fn list_notifications(
    State(state): State<AppState>,
    current: CurrentRealtor,
    Query(query): Query<NotificationQuery>,
) -> Result<Json<Vec<notifications::Model>>, ApiError> {
    let inbox = NotificationRepository::new((*state.db).clone())
        .list(current.id(), query.unread_only)
        .await?;
    Ok(Json(inbox))
}

/// POST /notifications/{notification_id}/read - Mark one of the caller's notifications read.
async fn mark_read(
    State(state): State<AppState>,
    current: CurrentRealtor,
    Path(notification_id): Path<i32>,
) -> Result<Json<notifications::Model>, ApiError> {
    NotificationRepository::new((*state.db).clone())
        .mark_read(notification_id, current.id())
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Notification"))
}
