//! Realtor repository for database operations.

use realty_core::auth::{RealtorRole, verify_password};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};

use super::error::RepositoryError;
use crate::entities::realtors;

/// Input for creating a realtor.
#[derive(Debug, Clone)]
pub struct CreateRealtorInput {
    /// Login email, unique across the platform.
    pub email: String,
    /// Display name.
    pub full_name: Option<String>,
    /// Argon2id PHC string.
    pub password_hash: String,
    /// Role granted.
    pub role: RealtorRole,
    /// Agency the realtor joins.
    pub agency_id: i32,
}

/// Realtor repository.
#[derive(Debug, Clone)]
pub struct RealtorRepository {
    db: DatabaseConnection,
}

impl RealtorRepository {
    /// Creates a new realtor repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an active realtor.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if the email is already registered.
    pub async fn create(&self, input: CreateRealtorInput) -> Result<realtors::Model, RepositoryError> {
        if self.email_exists(&input.email).await? {
            return Err(RepositoryError::Conflict("Email already registered".to_string()));
        }

        let realtor = realtors::ActiveModel {
            email: Set(input.email),
            full_name: Set(input.full_name),
            hashed_password: Set(input.password_hash),
            is_active: Set(true),
            role: Set(input.role.into()),
            agency_id: Set(input.agency_id),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        let realtor = realtor
            .insert(&self.db)
            .await
            .map_err(|e| RepositoryError::from_insert(e, || "Email already registered".to_string()))?;

        tracing::info!(
            realtor_id = realtor.id,
            agency_id = realtor.agency_id,
            role = ?realtor.role,
            "realtor created"
        );
        Ok(realtor)
    }

    /// Finds a realtor by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<realtors::Model>, DbErr> {
        realtors::Entity::find_by_id(id).one(&self.db).await
    }

    /// Finds a realtor by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<realtors::Model>, DbErr> {
        realtors::Entity::find()
            .filter(realtors::Column::Email.eq(email))
            .one(&self.db)
            .await
    }

    /// Checks if an email is already registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = realtors::Entity::find()
            .filter(realtors::Column::Email.eq(email))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    /// Returns the realtor if `password` matches the stored hash.
    ///
    /// The email is trimmed the same way it is on registration. Unknown
    /// email, wrong password and an unreadable hash all yield `None`.
    /// The active flag is not checked here.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<realtors::Model>, DbErr> {
        let Some(realtor) = self.find_by_email(email.trim()).await? else {
            return Ok(None);
        };

        match verify_password(password, &realtor.hashed_password) {
            Ok(true) => Ok(Some(realtor)),
            Ok(false) => Ok(None),
            Err(e) => {
                tracing::warn!(realtor_id = realtor.id, error = %e, "stored password hash unusable");
                Ok(None)
            }
        }
    }
}
