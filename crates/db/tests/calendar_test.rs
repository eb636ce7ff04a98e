//! Integration tests for realtor-scoped calendar events.

mod common;

use chrono::{DateTime, TimeZone, Utc};
use common::{create_agency, create_property, create_realtor, setup_db};
use realty_core::auth::RealtorRole;
use realty_core::calendar::{CalendarEventPatch, CalendarEventType, NewCalendarEvent};
use realty_core::property::PropertyStatus;
use realty_db::entities::sea_orm_active_enums;
use realty_db::{CalendarRepository, RepositoryError};
use realty_shared::types::ListWindow;

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, hour, 0, 0)
        .single()
        .expect("valid time")
}

fn viewing(property_id: i32, title: &str, start: u32, end: u32) -> NewCalendarEvent {
    NewCalendarEvent {
        property_id,
        event_type: CalendarEventType::Viewing,
        title: title.to_string(),
        description: None,
        start_time: at(start),
        end_time: at(end),
    }
}

#[tokio::test]
async fn test_events_are_scoped_to_owner() {
    let db = setup_db().await;
    let acme = create_agency(&db, "Acme").await;
    let ann = create_realtor(&db, acme.id, "ann@acme.test", RealtorRole::Realtor).await;
    let bob = create_realtor(&db, acme.id, "bob@acme.test", RealtorRole::Realtor).await;
    let loft = create_property(&db, &ann, "Loft", 1000, PropertyStatus::ForSale).await;

    let repo = CalendarRepository::new(db.clone());
    let event = repo
        .create(ann.id, &viewing(loft.id, "Showing", 10, 11))
        .await
        .expect("Failed to create event");
    assert_eq!(event.event_type, sea_orm_active_enums::CalendarEventType::Viewing);

    assert!(repo.find(event.id, bob.id).await.expect("query").is_none());
    assert!(
        repo.list(bob.id, ListWindow::default())
            .await
            .expect("query")
            .is_empty()
    );

    let patch = CalendarEventPatch {
        title: Some("Hijacked".to_string()),
        ..CalendarEventPatch::default()
    };
    assert!(
        repo.update(event.id, bob.id, &patch)
            .await
            .expect("update")
            .is_none()
    );
    assert!(!repo.delete(event.id, bob.id).await.expect("delete"));

    let kept = repo
        .find(event.id, ann.id)
        .await
        .expect("query")
        .expect("owner sees event");
    assert_eq!(kept.title, "Showing");

    assert!(repo.delete(event.id, ann.id).await.expect("delete"));
    assert!(repo.find(event.id, ann.id).await.expect("query").is_none());
}

#[tokio::test]
async fn test_list_orders_by_start() {
    let db = setup_db().await;
    let acme = create_agency(&db, "Acme").await;
    let ann = create_realtor(&db, acme.id, "ann@acme.test", RealtorRole::Realtor).await;
    let loft = create_property(&db, &ann, "Loft", 1000, PropertyStatus::ForSale).await;

    let repo = CalendarRepository::new(db.clone());
    repo.create(ann.id, &viewing(loft.id, "Late", 15, 16))
        .await
        .expect("create");
    repo.create(ann.id, &viewing(loft.id, "Early", 9, 10))
        .await
        .expect("create");

    let titles: Vec<String> = repo
        .list(ann.id, ListWindow::default())
        .await
        .expect("query")
        .into_iter()
        .map(|e| e.title)
        .collect();
    assert_eq!(titles, vec!["Early", "Late"]);
}

#[tokio::test]
async fn test_window_is_validated() {
    let db = setup_db().await;
    let acme = create_agency(&db, "Acme").await;
    let ann = create_realtor(&db, acme.id, "ann@acme.test", RealtorRole::Realtor).await;
    let loft = create_property(&db, &ann, "Loft", 1000, PropertyStatus::ForSale).await;

    let repo = CalendarRepository::new(db.clone());
    let err = repo
        .create(ann.id, &viewing(loft.id, "Backwards", 11, 10))
        .await
        .expect_err("end before start");
    assert!(matches!(err, RepositoryError::InvalidWindow(_)));

    let event = repo
        .create(ann.id, &viewing(loft.id, "Showing", 10, 11))
        .await
        .expect("create");
    let patch = CalendarEventPatch {
        end_time: Some(at(9)),
        ..CalendarEventPatch::default()
    };
    let err = repo
        .update(event.id, ann.id, &patch)
        .await
        .expect_err("merged window is backwards");
    assert!(matches!(err, RepositoryError::InvalidWindow(_)));

    let patch = CalendarEventPatch {
        event_type: Some(CalendarEventType::Deal),
        end_time: Some(at(12)),
        description: Some(Some("Bring keys".to_string())),
        ..CalendarEventPatch::default()
    };
    let updated = repo
        .update(event.id, ann.id, &patch)
        .await
        .expect("update")
        .expect("owner sees event");
    assert_eq!(updated.event_type, sea_orm_active_enums::CalendarEventType::Deal);
    assert_eq!(updated.end_time.with_timezone(&Utc), at(12));
    assert_eq!(updated.start_time.with_timezone(&Utc), at(10));
    assert_eq!(updated.description.as_deref(), Some("Bring keys"));
}

#[tokio::test]
async fn test_update_by_non_owner_changes_nothing() {
    let db = setup_db().await;
    let acme = create_agency(&db, "Acme").await;
    let ann = create_realtor(&db, acme.id, "ann@acme.test", RealtorRole::Realtor).await;
    let bob = create_realtor(&db, acme.id, "bob@acme.test", RealtorRole::Admin).await;
    let loft = create_property(&db, &ann, "Loft", 1000, PropertyStatus::ForSale).await;

    let repo = CalendarRepository::new(db.clone());
    let before = repo
        .create(ann.id, &viewing(loft.id, "Showing", 10, 11))
        .await
        .expect("create");

    let patch = CalendarEventPatch {
        event_type: Some(CalendarEventType::Other),
        title: Some("Moved".to_string()),
        description: Some(Some("Cancelled".to_string())),
        start_time: Some(at(7)),
        end_time: Some(at(8)),
        ..CalendarEventPatch::default()
    };
    let result = repo.update(before.id, bob.id, &patch).await.expect("update");
    assert!(result.is_none());

    let after = repo
        .find(before.id, ann.id)
        .await
        .expect("query")
        .expect("owner sees event");
    assert_eq!(after.title, "Showing");
    assert_eq!(after.event_type, sea_orm_active_enums::CalendarEventType::Viewing);
    assert_eq!(after.description, None);
    assert_eq!(after.start_time.with_timezone(&Utc), at(10));
    assert_eq!(after.end_time.with_timezone(&Utc), at(11));
}

#[tokio::test]
async fn test_update_of_deleted_event_is_none() {
    let db = setup_db().await;
    let acme = create_agency(&db, "Acme").await;
    let ann = create_realtor(&db, acme.id, "ann@acme.test", RealtorRole::Realtor).await;
    let loft = create_property(&db, &ann, "Loft", 1000, PropertyStatus::ForSale).await;

    let repo = CalendarRepository::new(db.clone());
    let event = repo
        .create(ann.id, &viewing(loft.id, "Showing", 10, 11))
        .await
        .expect("create");
    assert!(repo.delete(event.id, ann.id).await.expect("delete"));

    let patch = CalendarEventPatch {
        title: Some("Renamed".to_string()),
        ..CalendarEventPatch::default()
    };
    assert!(
        repo.update(event.id, ann.id, &patch)
            .await
            .expect("update")
            .is_none()
    );
}

#[tokio::test]
async fn test_empty_patch_returns_event_unchanged() {
    let db = setup_db().await;
    let acme = create_agency(&db, "Acme").await;
    let ann = create_realtor(&db, acme.id, "ann@acme.test", RealtorRole::Realtor).await;
    let loft = create_property(&db, &ann, "Loft", 1000, PropertyStatus::ForSale).await;

    let repo = CalendarRepository::new(db.clone());
    let event = repo
        .create(ann.id, &viewing(loft.id, "Showing", 10, 11))
        .await
        .expect("create");

    let same = repo
        .update(event.id, ann.id, &CalendarEventPatch::default())
        .await
        .expect("update")
        .expect("owner sees event");
    assert_eq!(same.id, event.id);
    assert_eq!(same.title, "Showing");
    assert_eq!(same.start_time.with_timezone(&Utc), at(10));
    assert_eq!(same.end_time.with_timezone(&Utc), at(11));
}
