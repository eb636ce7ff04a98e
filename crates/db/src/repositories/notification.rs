//! Notification repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, sea_query::Expr,
};

use crate::entities::{notifications, realtors};

/// Notification repository.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    db: DatabaseConnection,
}

impl NotificationRepository {
    /// Creates a new notification repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an unread notification for one realtor.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        realtor_id: i32,
        message: &str,
    ) -> Result<notifications::Model, DbErr> {
        Self::create_with(&self.db, realtor_id, message).await
    }

    async fn create_with<C: ConnectionTrait>(
        conn: &C,
        realtor_id: i32,
        message: &str,
    ) -> Result<notifications::Model, DbErr> {
        notifications::ActiveModel {
            realtor_id: Set(realtor_id),
            message: Set(message.to_string()),
            is_read: Set(false),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        }
        .insert(conn)
        .await
    }

    /// Sends `message` to every realtor of an agency.
    ///
    /// # Errors
    ///
    /// Returns an error if a query or insert fails.
    pub async fn notify_agency(
        &self,
        agency_id: i32,
        message: &str,
    ) -> Result<Vec<notifications::Model>, DbErr> {
        Self::notify_agency_with(&self.db, agency_id, message).await
    }

    /// Sends `message` to every realtor of an agency on `conn`.
    pub(crate) async fn notify_agency_with<C: ConnectionTrait>(
        conn: &C,
        agency_id: i32,
        message: &str,
    ) -> Result<Vec<notifications::Model>, DbErr> {
        let recipients = realtors::Entity::find()
            .filter(realtors::Column::AgencyId.eq(agency_id))
            .order_by_asc(realtors::Column::Id)
            .all(conn)
            .await?;

        let mut sent = Vec::with_capacity(recipients.len());
        for realtor in recipients {
            sent.push(Self::create_with(conn, realtor.id, message).await?);
        }
        Ok(sent)
    }

    /// Lists a realtor's notifications, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        realtor_id: i32,
        unread_only: bool,
    ) -> Result<Vec<notifications::Model>, DbErr> {
        let mut query =
            notifications::Entity::find().filter(notifications::Column::RealtorId.eq(realtor_id));
        if unread_only {
            query = query.filter(notifications::Column::IsRead.eq(false));
        }

        query
            .order_by_desc(notifications::Column::CreatedAt)
            .order_by_desc(notifications::Column::Id)
            .all(&self.db)
            .await
    }

    /// Marks a notification read if it belongs to `realtor_id`.
    ///
    /// A notification owned by someone else is reported as `None`, the same
    /// as a missing one.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn mark_read(
        &self,
        id: i32,
        realtor_id: i32,
    ) -> Result<Option<notifications::Model>, DbErr> {
        let owned = notifications::Column::Id
            .eq(id)
            .and(notifications::Column::RealtorId.eq(realtor_id));

        let result = notifications::Entity::update_many()
            .col_expr(notifications::Column::IsRead, Expr::value(true))
            .filter(owned.clone())
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        notifications::Entity::find().filter(owned).one(&self.db).await
    }
}
