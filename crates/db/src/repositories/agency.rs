//! Agency repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use super::error::RepositoryError;
use crate::entities::{agencies, realtors};

/// Agency repository.
#[derive(Debug, Clone)]
pub struct AgencyRepository {
    db: DatabaseConnection,
}

impl AgencyRepository {
    /// Creates a new agency repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an agency.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if the name is taken.
    pub async fn create(&self, name: &str) -> Result<agencies::Model, RepositoryError> {
        if self.name_exists(name).await? {
            return Err(RepositoryError::Conflict(format!(
                "Agency '{name}' already registered"
            )));
        }

        let agency = agencies::ActiveModel {
            name: Set(name.to_string()),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        let agency = agency.insert(&self.db).await.map_err(|e| {
            RepositoryError::from_insert(e, || format!("Agency '{name}' already registered"))
        })?;

        tracing::info!(agency_id = agency.id, name = %agency.name, "agency created");
        Ok(agency)
    }

    /// Finds an agency by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<agencies::Model>, DbErr> {
        agencies::Entity::find_by_id(id).one(&self.db).await
    }

    /// Finds an agency by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<agencies::Model>, DbErr> {
        agencies::Entity::find()
            .filter(agencies::Column::Name.eq(name))
            .one(&self.db)
            .await
    }

    /// Checks if an agency name is taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = agencies::Entity::find()
            .filter(agencies::Column::Name.eq(name))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists the realtors of an agency, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn realtors(&self, agency_id: i32) -> Result<Vec<realtors::Model>, DbErr> {
        realtors::Entity::find()
            .filter(realtors::Column::AgencyId.eq(agency_id))
            .order_by_asc(realtors::Column::Id)
            .all(&self.db)
            .await
    }
}
