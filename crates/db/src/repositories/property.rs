//! Property repository: listing CRUD plus the audited update path.
//!
//! Creation and update each run in a single transaction together with
//! the history rows and notifications they produce.

use realty_core::property::{
    CREATE_ACTION, NewProperty, PropertyPatch, creation_record, plan_update, status_message,
};
use realty_shared::types::ListWindow;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};

use super::history::HistoryRepository;
use super::notification::NotificationRepository;
use crate::entities::properties;

/// Property repository.
#[derive(Debug, Clone)]
pub struct PropertyRepository {
    db: DatabaseConnection,
}

impl PropertyRepository {
    /// Creates a new property repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a listing and its `create` history row.
    ///
    /// # Errors
    ///
    /// Returns an error if either insert fails; nothing is written then.
    pub async fn create(
        &self,
        input: &NewProperty,
        agency_id: i32,
        realtor_id: i32,
    ) -> Result<properties::Model, DbErr> {
        let record = creation_record(input).map_err(|e| DbErr::Custom(e.to_string()))?;

        let txn = self.db.begin().await?;

        let property = properties::ActiveModel {
            title: Set(input.title.clone()),
            description: Set(input.description.clone()),
            price: Set(input.price),
            address: Set(input.address.clone()),
            latitude: Set(input.latitude),
            longitude: Set(input.longitude),
            status: Set(input.status.into()),
            agency_id: Set(agency_id),
            realtor_id: Set(realtor_id),
            created_at: Set(chrono::Utc::now().into()),
            updated_at: Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        HistoryRepository::record_with(
            &txn,
            property.id,
            realtor_id,
            CREATE_ACTION,
            None,
            Some(record),
        )
        .await?;

        txn.commit().await?;

        tracing::info!(
            property_id = property.id,
            agency_id,
            realtor_id,
            "property created"
        );
        Ok(property)
    }

    /// Finds a listing by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<properties::Model>, DbErr> {
        properties::Entity::find_by_id(id).one(&self.db).await
    }

    /// Lists listings in ID order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, window: ListWindow) -> Result<Vec<properties::Model>, DbErr> {
        properties::Entity::find()
            .order_by_asc(properties::Column::Id)
            .offset(window.offset())
            .limit(window.limit())
            .all(&self.db)
            .await
    }

    /// Applies a partial update on behalf of `actor_id`.
    ///
    /// Writes one history row per field whose value changed and, when the
    /// status moved, one notification per realtor of the listing's agency.
    /// Returns `None` if the listing does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if any write fails; the whole update is rolled back.
    pub async fn update(
        &self,
        id: i32,
        patch: &PropertyPatch,
        actor_id: i32,
    ) -> Result<Option<properties::Model>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(current) = properties::Entity::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };

        let plan = plan_update(&current.state(), patch);
        let next = &plan.next;

        let mut active: properties::ActiveModel = current.into();
        if patch.title.is_some() {
            active.title = Set(next.title.clone());
        }
        if patch.description.is_some() {
            active.description = Set(next.description.clone());
        }
        if patch.price.is_some() {
            active.price = Set(next.price);
        }
        if patch.address.is_some() {
            active.address = Set(next.address.clone());
        }
        if patch.latitude.is_some() {
            active.latitude = Set(next.latitude);
        }
        if patch.longitude.is_some() {
            active.longitude = Set(next.longitude);
        }
        if patch.status.is_some() {
            active.status = Set(next.status.into());
        }
        active.updated_at = Set(Some(chrono::Utc::now().into()));

        let updated = active.update(&txn).await?;

        for change in &plan.changes {
            HistoryRepository::record_with(
                &txn,
                id,
                actor_id,
                &change.action(),
                change.old_value.clone(),
                change.new_value.clone(),
            )
            .await?;
        }

        let notified = match plan.status_transition {
            Some(transition) => {
                let message = status_message(&updated.title, transition.to);
                NotificationRepository::notify_agency_with(&txn, updated.agency_id, &message)
                    .await?
                    .len()
            }
            None => 0,
        };

        txn.commit().await?;

        tracing::info!(
            property_id = id,
            actor_id,
            changes = plan.changes.len(),
            notified,
            "property updated"
        );
        Ok(Some(updated))
    }
}
