//! Authentication middleware and the current-realtor extractor.
//!
//! The middleware resolves the bearer token to a realtor row and rejects
//! inactive accounts; handlers then apply their own role requirement through
//! [`CurrentRealtor::require`]. Both steps go through the same access gate,
//! so the checks always run in the order identity, active flag, role.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use realty_core::auth::{AccessError, Principal, RealtorRole, RoleRequirement, check_access};
use realty_db::{RealtorRepository, entities::realtors};
use realty_shared::{AppError, JwtError};

use crate::{AppState, error::ApiError};

/// Extracts the bearer token from the Authorization header.
fn extract_bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
}

/// Authentication middleware for protected routes.
///
/// This middleware:
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Validates the token and loads the realtor named by its subject
/// 3. Rejects inactive accounts
/// 4. Stores the realtor in request extensions for handlers to access
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    match authenticate(&state, request.headers()).await {
        Ok(realtor) => {
            request.extensions_mut().insert(realtor);
            next.run(request).await
        }
        Err(e) => e.into_response(),
    }
}

async fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<CurrentRealtor, ApiError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let Some(token) = auth_header.and_then(extract_bearer_token) else {
        return Err(ApiError::with_code(
            AppError::Unauthorized("Authorization header with Bearer token is required".into()),
            "missing_token",
        ));
    };

    let claims = state.jwt_service.validate_token(token).map_err(|e| match e {
        JwtError::Expired => {
            ApiError::with_code(AppError::Unauthorized("Token has expired".into()), "token_expired")
        }
        _ => ApiError::with_code(
            AppError::Unauthorized("Invalid or malformed token".into()),
            "invalid_token",
        ),
    })?;

    let realtor = RealtorRepository::new((*state.db).clone())
        .find_by_email(claims.email())
        .await?
        .ok_or(AccessError::Unauthenticated)?;

    let current = CurrentRealtor(realtor);
    check_access(Some(&current.principal()), RoleRequirement::Authenticated)?;
    Ok(current)
}

/// The realtor behind the current request.
///
/// Only available on routes behind [`auth_middleware`].
#[derive(Debug, Clone)]
pub struct CurrentRealtor(pub realtors::Model);

impl CurrentRealtor {
    /// Realtor ID.
    #[must_use]
    pub fn id(&self) -> i32 {
        self.0.id
    }

    /// The realtor's agency.
    #[must_use]
    pub fn agency_id(&self) -> i32 {
        self.0.agency_id
    }

    /// The realtor's role.
    #[must_use]
    pub fn role(&self) -> RealtorRole {
        self.0.role.into()
    }

    /// The gate's view of this realtor.
    #[must_use]
    pub fn principal(&self) -> Principal {
        self.0.principal()
    }

    /// Checks a role requirement against this realtor.
    ///
    /// # Errors
    ///
    /// Returns a 403 error if the account is inactive or the role does not
    /// satisfy `requirement`.
    pub fn require(&self, requirement: RoleRequirement) -> Result<(), ApiError> {
        check_access(Some(&self.principal()), requirement).map_err(ApiError::from)
    }

    /// The underlying realtor row.
    #[must_use]
    pub fn model(&self) -> &realtors::Model {
        &self.0
    }
}

impl<S> FromRequestParts<S> for CurrentRealtor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Self>()
            .cloned()
            .ok_or_else(|| AccessError::Unauthenticated.into())
    }
}
