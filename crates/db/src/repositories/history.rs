//! Property history repository. Rows are only ever appended.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::property_history;

/// Property history repository.
#[derive(Debug, Clone)]
pub struct HistoryRepository {
    db: DatabaseConnection,
}

impl HistoryRepository {
    /// Creates a new history repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends one history row.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn record(
        &self,
        property_id: i32,
        realtor_id: i32,
        action: &str,
        old_value: Option<String>,
        new_value: Option<String>,
    ) -> Result<property_history::Model, DbErr> {
        Self::record_with(&self.db, property_id, realtor_id, action, old_value, new_value).await
    }

    /// Appends one history row on `conn`, which may be an open transaction.
    pub(crate) async fn record_with<C: ConnectionTrait>(
        conn: &C,
        property_id: i32,
        realtor_id: i32,
        action: &str,
        old_value: Option<String>,
        new_value: Option<String>,
    ) -> Result<property_history::Model, DbErr> {
        property_history::ActiveModel {
            property_id: Set(property_id),
            realtor_id: Set(realtor_id),
            action: Set(action.to_string()),
            old_value: Set(old_value),
            new_value: Set(new_value),
            timestamp: Set(chrono::Utc::now().into()),
            ..Default::default()
        }
        .insert(conn)
        .await
    }

    /// Lists a property's history in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_for_property(
        &self,
        property_id: i32,
    ) -> Result<Vec<property_history::Model>, DbErr> {
        property_history::Entity::find()
            .filter(property_history::Column::PropertyId.eq(property_id))
            .order_by_asc(property_history::Column::Id)
            .all(&self.db)
            .await
    }
}
