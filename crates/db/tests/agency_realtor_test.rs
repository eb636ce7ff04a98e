//! Integration tests for agency and realtor repositories.

mod common;

use common::{create_agency, create_realtor, setup_db};
use realty_core::auth::{RealtorRole, hash_password};
use realty_db::entities::sea_orm_active_enums;
use realty_db::{AgencyRepository, CreateRealtorInput, RealtorRepository, RepositoryError};

#[tokio::test]
async fn test_duplicate_agency_name_conflicts() {
    let db = setup_db().await;
    let repo = AgencyRepository::new(db.clone());

    let acme = repo.create("Acme").await.expect("Failed to create agency");
    assert!(repo.name_exists("Acme").await.expect("query"));
    assert!(!repo.name_exists("Other").await.expect("query"));

    let err = repo.create("Acme").await.expect_err("duplicate must fail");
    assert!(matches!(err, RepositoryError::Conflict(_)));

    let found = repo
        .find_by_name("Acme")
        .await
        .expect("query")
        .expect("agency exists");
    assert_eq!(found.id, acme.id);
}

#[tokio::test]
async fn test_agency_lists_its_realtors() {
    let db = setup_db().await;
    let acme = create_agency(&db, "Acme").await;
    let other = create_agency(&db, "Other").await;
    create_realtor(&db, acme.id, "ann@acme.test", RealtorRole::Realtor).await;
    create_realtor(&db, acme.id, "max@acme.test", RealtorRole::Manager).await;
    create_realtor(&db, other.id, "bob@other.test", RealtorRole::Realtor).await;

    let members = AgencyRepository::new(db.clone())
        .realtors(acme.id)
        .await
        .expect("Failed to list realtors");
    let emails: Vec<&str> = members.iter().map(|r| r.email.as_str()).collect();
    assert_eq!(emails, vec!["ann@acme.test", "max@acme.test"]);
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let db = setup_db().await;
    let acme = create_agency(&db, "Acme").await;
    let created = create_realtor(&db, acme.id, "ann@acme.test", RealtorRole::Manager).await;
    assert!(created.is_active);
    assert_eq!(created.role, sea_orm_active_enums::RealtorRole::Manager);

    let err = RealtorRepository::new(db.clone())
        .create(CreateRealtorInput {
            email: "ann@acme.test".to_string(),
            full_name: None,
            password_hash: "$argon2id$other".to_string(),
            role: RealtorRole::Realtor,
            agency_id: acme.id,
        })
        .await
        .expect_err("duplicate must fail");
    assert!(matches!(err, RepositoryError::Conflict(_)));
}

#[tokio::test]
async fn test_authenticate() {
    let db = setup_db().await;
    let acme = create_agency(&db, "Acme").await;
    let repo = RealtorRepository::new(db.clone());
    repo.create(CreateRealtorInput {
        email: "ann@acme.test".to_string(),
        full_name: Some("Ann".to_string()),
        password_hash: hash_password("correct horse").expect("hash"),
        role: RealtorRole::Realtor,
        agency_id: acme.id,
    })
    .await
    .expect("Failed to create realtor");

    let ok = repo
        .authenticate("ann@acme.test", "correct horse")
        .await
        .expect("query");
    assert_eq!(ok.map(|r| r.email), Some("ann@acme.test".to_string()));

    let padded = repo
        .authenticate("  ann@acme.test ", "correct horse")
        .await
        .expect("query");
    assert_eq!(padded.map(|r| r.email), Some("ann@acme.test".to_string()));

    assert!(
        repo.authenticate("ann@acme.test", "wrong")
            .await
            .expect("query")
            .is_none()
    );
    assert!(
        repo.authenticate("nobody@acme.test", "correct horse")
            .await
            .expect("query")
            .is_none()
    );
}

#[tokio::test]
async fn test_unreadable_hash_fails_closed() {
    let db = setup_db().await;
    let acme = create_agency(&db, "Acme").await;
    create_realtor(&db, acme.id, "ann@acme.test", RealtorRole::Realtor).await;

    let result = RealtorRepository::new(db.clone())
        .authenticate("ann@acme.test", "anything")
        .await
        .expect("query");
    assert!(result.is_none());
}
