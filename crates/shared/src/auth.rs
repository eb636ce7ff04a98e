//! Token claims and authentication payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JWT claims for access tokens.
///
/// The subject is the realtor's email; the token carries no role, the role
/// is re-read from the database on every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (realtor email).
    pub sub: String,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a realtor.
    #[must_use]
    pub fn new(email: &str, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: email.to_string(),
            iat: Utc::now().timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the email the token was issued for.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.sub
    }
}

/// Credentials exchanged for an access token.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRequest {
    /// Realtor email. `username` is accepted for OAuth2-style clients.
    #[serde(alias = "username")]
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// Issued access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Access token.
    pub access_token: String,
    /// Always `bearer`.
    pub token_type: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

impl TokenResponse {
    /// Creates a bearer token response.
    #[must_use]
    pub fn bearer(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            expires_in,
        }
    }
}
