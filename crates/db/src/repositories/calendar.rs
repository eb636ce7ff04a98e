//! Calendar event repository. Every operation is scoped to the owning realtor.

use realty_core::calendar::{CalendarEventPatch, NewCalendarEvent};
use realty_shared::types::ListWindow;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, sea_query::SimpleExpr,
};

use super::error::RepositoryError;
use crate::entities::calendar_events;

/// Calendar event repository.
#[derive(Debug, Clone)]
pub struct CalendarRepository {
    db: DatabaseConnection,
}

fn owned(id: i32, realtor_id: i32) -> SimpleExpr {
    calendar_events::Column::Id
        .eq(id)
        .and(calendar_events::Column::RealtorId.eq(realtor_id))
}

impl CalendarRepository {
    /// Creates a new calendar repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an event owned by `realtor_id`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidWindow` if the event ends before it starts.
    pub async fn create(
        &self,
        realtor_id: i32,
        input: &NewCalendarEvent,
    ) -> Result<calendar_events::Model, RepositoryError> {
        let window = input.window()?;

        let event = calendar_events::ActiveModel {
            property_id: Set(input.property_id),
            realtor_id: Set(realtor_id),
            event_type: Set(input.event_type.into()),
            title: Set(input.title.clone()),
            description: Set(input.description.clone()),
            start_time: Set(window.start().into()),
            end_time: Set(window.end().into()),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        tracing::info!(event_id = event.id, realtor_id, "calendar event created");
        Ok(event)
    }

    /// Lists a realtor's events by start time.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        realtor_id: i32,
        window: ListWindow,
    ) -> Result<Vec<calendar_events::Model>, DbErr> {
        calendar_events::Entity::find()
            .filter(calendar_events::Column::RealtorId.eq(realtor_id))
            .order_by_asc(calendar_events::Column::StartTime)
            .order_by_asc(calendar_events::Column::Id)
            .offset(window.offset())
            .limit(window.limit())
            .all(&self.db)
            .await
    }

    /// Finds an event if it belongs to `realtor_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find(
        &self,
        id: i32,
        realtor_id: i32,
    ) -> Result<Option<calendar_events::Model>, DbErr> {
        calendar_events::Entity::find()
            .filter(owned(id, realtor_id))
            .one(&self.db)
            .await
    }

    /// Applies the provided fields to an event owned by `realtor_id`.
    ///
    /// The write is filtered on both id and owner. Returns `None` if no such
    /// event exists for this realtor, including one deleted mid-update.
    ///
    /// # Errors
    ///
    /// Returns `InvalidWindow` if the resulting event would end before it starts.
    pub async fn update(
        &self,
        id: i32,
        realtor_id: i32,
        patch: &CalendarEventPatch,
    ) -> Result<Option<calendar_events::Model>, RepositoryError> {
        let Some(current) = self.find(id, realtor_id).await? else {
            return Ok(None);
        };

        let window = patch.window(
            current.start_time.with_timezone(&chrono::Utc),
            current.end_time.with_timezone(&chrono::Utc),
        )?;

        let mut changes = <calendar_events::ActiveModel as sea_orm::ActiveModelTrait>::default();
        if let Some(property_id) = patch.property_id {
            changes.property_id = Set(property_id);
        }
        if let Some(event_type) = patch.event_type {
            changes.event_type = Set(event_type.into());
        }
        if let Some(title) = &patch.title {
            changes.title = Set(title.clone());
        }
        if let Some(description) = &patch.description {
            changes.description = Set(description.clone());
        }
        if patch.start_time.is_some() {
            changes.start_time = Set(window.start().into());
        }
        if patch.end_time.is_some() {
            changes.end_time = Set(window.end().into());
        }

        if !changes.is_changed() {
            return Ok(Some(current));
        }

        let result = calendar_events::Entity::update_many()
            .set(changes)
            .filter(owned(id, realtor_id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        let updated = self.find(id, realtor_id).await?;
        if updated.is_some() {
            tracing::info!(event_id = id, realtor_id, "calendar event updated");
        }
        Ok(updated)
    }

    /// Deletes an event owned by `realtor_id`; returns false if none matched.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: i32, realtor_id: i32) -> Result<bool, DbErr> {
        let result = calendar_events::Entity::delete_many()
            .filter(owned(id, realtor_id))
            .exec(&self.db)
            .await?;

        if result.rows_affected > 0 {
            tracing::info!(event_id = id, realtor_id, "calendar event deleted");
        }
        Ok(result.rows_affected > 0)
    }
}
