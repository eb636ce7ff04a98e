//! Shared fixtures for repository integration tests.
//!
//! Each test gets its own in-memory SQLite database migrated with the real
//! `Migrator`. The pool holds a single connection so the database lives as
//! long as the test.

#![allow(dead_code)]

use realty_core::auth::RealtorRole;
use realty_core::property::{NewProperty, PropertyStatus};
use realty_db::entities::{agencies, properties, realtors};
use realty_db::migration::{Migrator, MigratorTrait};
use realty_db::{AgencyRepository, CreateRealtorInput, PropertyRepository, RealtorRepository};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Opens a fresh migrated database.
pub async fn setup_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

pub async fn create_agency(db: &DatabaseConnection, name: &str) -> agencies::Model {
    AgencyRepository::new(db.clone())
        .create(name)
        .await
        .expect("Failed to create agency")
}

pub async fn create_realtor(
    db: &DatabaseConnection,
    agency_id: i32,
    email: &str,
    role: RealtorRole,
) -> realtors::Model {
    RealtorRepository::new(db.clone())
        .create(CreateRealtorInput {
            email: email.to_string(),
            full_name: Some(format!("Realtor {email}")),
            password_hash: "$argon2id$test_hash".to_string(),
            role,
            agency_id,
        })
        .await
        .expect("Failed to create realtor")
}

pub fn listing(title: &str, price: i64, status: PropertyStatus) -> NewProperty {
    NewProperty {
        title: title.to_string(),
        description: None,
        price,
        address: "1 Main St".to_string(),
        latitude: None,
        longitude: None,
        status,
    }
}

pub async fn create_property(
    db: &DatabaseConnection,
    realtor: &realtors::Model,
    title: &str,
    price: i64,
    status: PropertyStatus,
) -> properties::Model {
    PropertyRepository::new(db.clone())
        .create(&listing(title, price, status), realtor.agency_id, realtor.id)
        .await
        .expect("Failed to create property")
}
