//! Bootstraps the platform administrator.
//!
//! Ensures the "SuperAdmin Agency" exists and holds an admin account. Safe to
//! run repeatedly; existing rows are left untouched.
//!
//! Credentials come from `SUPERUSER_EMAIL` and `SUPERUSER_PASSWORD`.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use realty_core::auth::{RealtorRole, hash_password};
use realty_db::{AgencyRepository, CreateRealtorInput, RealtorRepository};
use realty_shared::AppConfig;
use sea_orm::DatabaseConnection;
use tracing::info;

const SUPERADMIN_AGENCY: &str = "SuperAdmin Agency";
const DEFAULT_EMAIL: &str = "superuser@example.com";
const DEFAULT_PASSWORD: &str = "superuser";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seeder=info,realty_db=info".into()),
        )
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let db = realty_db::connect_with(&config.database)
        .await
        .context("Failed to connect to database")?;

    let email = std::env::var("SUPERUSER_EMAIL").unwrap_or_else(|_| DEFAULT_EMAIL.to_string());
    let password =
        std::env::var("SUPERUSER_PASSWORD").unwrap_or_else(|_| DEFAULT_PASSWORD.to_string());

    let agency_id = seed_agency(&db).await?;
    seed_superuser(&db, agency_id, &email, &password).await?;

    info!("Seeding complete");
    Ok(())
}

async fn seed_agency(db: &DatabaseConnection) -> anyhow::Result<i32> {
    let repo = AgencyRepository::new(db.clone());
    if let Some(agency) = repo.find_by_name(SUPERADMIN_AGENCY).await? {
        info!(agency_id = agency.id, "SuperAdmin agency already exists, skipping");
        return Ok(agency.id);
    }

    let agency = repo.create(SUPERADMIN_AGENCY).await?;
    info!(agency_id = agency.id, "Created SuperAdmin agency");
    Ok(agency.id)
}

async fn seed_superuser(
    db: &DatabaseConnection,
    agency_id: i32,
    email: &str,
    password: &str,
) -> anyhow::Result<()> {
    let repo = RealtorRepository::new(db.clone());
    if repo.email_exists(email).await? {
        info!(email, "Superuser already exists, skipping");
        return Ok(());
    }

    let password_hash = hash_password(password)?;
    let realtor = repo
        .create(CreateRealtorInput {
            email: email.to_string(),
            full_name: Some("Super User".to_string()),
            password_hash,
            role: RealtorRole::Admin,
            agency_id,
        })
        .await?;

    info!(realtor_id = realtor.id, email, "Created superuser");
    Ok(())
}
