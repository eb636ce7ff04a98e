//! `SeaORM` entities, one module per table.

#![allow(missing_docs)]

pub mod agencies;
pub mod calendar_events;
pub mod documents;
pub mod event_registrations;
pub mod notifications;
pub mod properties;
pub mod property_history;
pub mod realtors;
pub mod sea_orm_active_enums;
pub mod training_events;
