//! Database migrations.
//!
//! Migrations are managed using sea-orm-migration and written with the
//! schema builder, so the same set runs on Postgres and on the SQLite
//! databases used in tests.

pub use sea_orm_migration::prelude::*;

mod m20260301_000001_agencies_realtors;
mod m20260301_000002_properties;
mod m20260301_000003_activity;

/// Migrator for running database migrations.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_agencies_realtors::Migration),
            Box::new(m20260301_000002_properties::Migration),
            Box::new(m20260301_000003_activity::Migration),
        ]
    }
}
