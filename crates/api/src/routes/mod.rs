//! API route definitions.

use axum::{Router, extract::DefaultBodyLimit, middleware};

use crate::{AppState, middleware::auth::auth_middleware};

pub mod agencies;
pub mod auth;
pub mod calendar;
pub mod documents;
pub mod events;
pub mod health;
pub mod notifications;
pub mod properties;
pub mod realtors;
pub mod stats;

/// Room for multipart framing on top of the largest accepted file.
const MULTIPART_OVERHEAD: u64 = 64 * 1024;

/// Creates the API router with protected routes that need state for middleware.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    let body_limit = usize::try_from(
        state
            .storage
            .config()
            .max_file_size
            .saturating_add(MULTIPART_OVERHEAD),
    )
    .unwrap_or(usize::MAX);

    // Protected routes that require authentication
    let protected_routes = Router::new()
        .merge(auth::protected_routes())
        .merge(agencies::protected_routes())
        .merge(realtors::routes())
        .merge(properties::routes())
        .merge(notifications::routes())
        .merge(calendar::routes())
        .merge(documents::routes().layer(DefaultBodyLimit::max(body_limit)))
        .merge(stats::routes())
        .merge(events::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Combine public and protected routes
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(agencies::routes())
        .merge(protected_routes)
}
