//! Request middleware.

pub mod auth;

pub use auth::{CurrentRealtor, auth_middleware};
