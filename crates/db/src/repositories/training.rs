//! Training events and realtor registrations.

use chrono::{DateTime, Utc};
use realty_core::calendar::TimeWindow;
use realty_shared::types::ListWindow;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use super::error::{RepositoryError, is_unique_violation};
use crate::entities::{event_registrations, training_events};

/// Input for creating a training event.
#[derive(Debug, Clone)]
pub struct CreateTrainingEventInput {
    /// Title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Speaker or organizer.
    pub speaker: String,
    /// Start time.
    pub start_time: DateTime<Utc>,
    /// End time.
    pub end_time: DateTime<Utc>,
    /// Whether the event is held online.
    pub is_online: bool,
    /// Stream or webinar link.
    pub link: Option<String>,
}

/// Result of a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// A new registration row was written.
    Registered(event_registrations::Model),
    /// The realtor was already registered; nothing was written.
    AlreadyRegistered,
}

/// Training event repository.
#[derive(Debug, Clone)]
pub struct TrainingRepository {
    db: DatabaseConnection,
}

impl TrainingRepository {
    /// Creates a new training repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a training event.
    ///
    /// # Errors
    ///
    /// Returns `InvalidWindow` if the event ends before it starts.
    pub async fn create(
        &self,
        input: CreateTrainingEventInput,
    ) -> Result<training_events::Model, RepositoryError> {
        let window = TimeWindow::new(input.start_time, input.end_time)?;

        let event = training_events::ActiveModel {
            title: Set(input.title),
            description: Set(input.description),
            speaker: Set(input.speaker),
            start_time: Set(window.start().into()),
            end_time: Set(window.end().into()),
            is_online: Set(input.is_online),
            link: Set(input.link),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        tracing::info!(event_id = event.id, title = %event.title, "training event created");
        Ok(event)
    }

    /// Lists training events by start time.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, window: ListWindow) -> Result<Vec<training_events::Model>, DbErr> {
        training_events::Entity::find()
            .order_by_asc(training_events::Column::StartTime)
            .order_by_asc(training_events::Column::Id)
            .offset(window.offset())
            .limit(window.limit())
            .all(&self.db)
            .await
    }

    /// Finds a training event by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find(&self, id: i32) -> Result<Option<training_events::Model>, DbErr> {
        training_events::Entity::find_by_id(id).one(&self.db).await
    }

    /// Registers a realtor for an event, at most once.
    ///
    /// An existing registration is checked first; the unique index on
    /// `(event_id, realtor_id)` catches a concurrent duplicate.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query or insert fails.
    pub async fn register(
        &self,
        event_id: i32,
        realtor_id: i32,
    ) -> Result<RegistrationOutcome, DbErr> {
        let existing = event_registrations::Entity::find()
            .filter(event_registrations::Column::EventId.eq(event_id))
            .filter(event_registrations::Column::RealtorId.eq(realtor_id))
            .count(&self.db)
            .await?;
        if existing > 0 {
            return Ok(RegistrationOutcome::AlreadyRegistered);
        }

        let inserted = event_registrations::ActiveModel {
            event_id: Set(event_id),
            realtor_id: Set(realtor_id),
            registered_at: Set(Utc::now().into()),
            ..Default::default()
        }
        .insert(&self.db)
        .await;

        match inserted {
            Ok(registration) => {
                tracing::info!(event_id, realtor_id, "realtor registered for event");
                Ok(RegistrationOutcome::Registered(registration))
            }
            Err(e) if is_unique_violation(&e) => Ok(RegistrationOutcome::AlreadyRegistered),
            Err(e) => Err(e),
        }
    }

    /// Lists an event's registrations in registration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn registrations(
        &self,
        event_id: i32,
    ) -> Result<Vec<event_registrations::Model>, DbErr> {
        event_registrations::Entity::find()
            .filter(event_registrations::Column::EventId.eq(event_id))
            .order_by_asc(event_registrations::Column::Id)
            .all(&self.db)
            .await
    }
}
