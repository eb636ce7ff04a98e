//! Core business logic for RealtyPro.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//!
//! # Modules
//!
//! - `auth` - Roles, the access gate, and password hashing
//! - `property` - Listing status, partial updates, and the change diff
//! - `calendar` - Calendar event types and time window checks
//! - `stats` - Sales tallies for realtors and agencies
//! - `storage` - Object storage for uploaded documents
//! - `document` - Document upload/delete orchestration over storage

pub mod auth;
pub mod calendar;
pub mod document;
pub mod property;
pub mod stats;
pub mod storage;
