//! Event service behavior against in-memory SQLite

mod common;

use campus_core::services::events::{self, EventFilter, MediaLinkInput, UpdateEvent};
use campus_core::{CoreError, PageParams};
use campus_db::entities::event::EventStatus;
use campus_db::entities::participant_category;
use campus_db::entities::user::UserRole;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, Set};

use common::{create_user, db, event_input, principal};

fn page() -> PageParams {
    PageParams::new(None, None, 10)
}

#[tokio::test]
async fn curators_only_see_their_own_events() {
    let db = db().await;
    let alice = create_user(&db, "alice@campus.test", UserRole::Curator).await;
    let bob = create_user(&db, "bob@campus.test", UserRole::Curator).await;
    let today = Utc::now().date_naive();

    let alice_event = events::create(&db, &principal(&alice), event_input("Alice event", today))
        .await
        .unwrap();
    events::create(&db, &principal(&bob), event_input("Bob event", today))
        .await
        .unwrap();

    let visible = events::list(&db, &principal(&alice), &EventFilter::default(), page())
        .await
        .unwrap();
    assert_eq!(visible.total_items, 1);
    assert_eq!(visible.items[0].title, "Alice event");

    // The other curator's event reads as absent, not forbidden
    let result = events::get(&db, &principal(&bob), alice_event.event.id).await;
    assert!(matches!(result, Err(CoreError::NotFound(_))));
}

#[tokio::test]
async fn admin_sees_every_event() {
    let db = db().await;
    let admin = create_user(&db, "admin@campus.test", UserRole::Administrator).await;
    let curator = create_user(&db, "c@campus.test", UserRole::Curator).await;
    let today = Utc::now().date_naive();

    events::create(&db, &principal(&curator), event_input("One", today))
        .await
        .unwrap();
    events::create(&db, &principal(&admin), event_input("Two", today))
        .await
        .unwrap();

    let visible = events::list(&db, &principal(&admin), &EventFilter::default(), page())
        .await
        .unwrap();
    assert_eq!(visible.total_items, 2);
}

#[tokio::test]
async fn description_shorter_than_100_chars_is_rejected() {
    let db = db().await;
    let curator = create_user(&db, "c@campus.test", UserRole::Curator).await;
    let today = Utc::now().date_naive();

    let mut input = event_input("Short description", today);
    input.description = "d".repeat(99);
    let result = events::create(&db, &principal(&curator), input).await;
    assert!(matches!(result, Err(CoreError::Validation { .. })));

    let mut input = event_input("Exactly at the floor", today);
    input.description = "d".repeat(100);
    assert!(events::create(&db, &principal(&curator), input).await.is_ok());
}

#[tokio::test]
async fn creator_may_hold_but_not_revert() {
    let db = db().await;
    let curator = create_user(&db, "c@campus.test", UserRole::Curator).await;
    let today = Utc::now().date_naive();

    let created = events::create(&db, &principal(&curator), event_input("Evt", today))
        .await
        .unwrap();
    let id = created.event.id;

    let held = events::update_status(&db, &principal(&curator), id, EventStatus::Held)
        .await
        .unwrap();
    assert_eq!(held.status, EventStatus::Held);

    let result = events::update_status(&db, &principal(&curator), id, EventStatus::Planned).await;
    assert!(matches!(result, Err(CoreError::Forbidden(_))));

    // Rejected transition leaves the row untouched
    let after = events::get(&db, &principal(&curator), id).await.unwrap();
    assert_eq!(after.event.status, EventStatus::Held);
}

#[tokio::test]
async fn admin_may_revert_status() {
    let db = db().await;
    let admin = create_user(&db, "admin@campus.test", UserRole::Administrator).await;
    let curator = create_user(&db, "c@campus.test", UserRole::Curator).await;
    let today = Utc::now().date_naive();

    let created = events::create(&db, &principal(&curator), event_input("Evt", today))
        .await
        .unwrap();
    events::update_status(&db, &principal(&curator), created.event.id, EventStatus::Held)
        .await
        .unwrap();

    let reverted =
        events::update_status(&db, &principal(&admin), created.event.id, EventStatus::Planned)
            .await
            .unwrap();
    assert_eq!(reverted.status, EventStatus::Planned);
}

#[tokio::test]
async fn media_links_reconcile_by_id() {
    let db = db().await;
    let curator = create_user(&db, "c@campus.test", UserRole::Curator).await;
    let today = Utc::now().date_naive();

    let mut input = event_input("With links", today);
    input.media_links = vec![
        MediaLinkInput {
            id: None,
            url: "https://example.org/a".to_string(),
        },
        MediaLinkInput {
            id: None,
            url: "https://example.org/b".to_string(),
        },
    ];
    let created = events::create(&db, &principal(&curator), input).await.unwrap();
    assert_eq!(created.media_links.len(), 2);

    let link_a = created
        .media_links
        .iter()
        .find(|l| l.url.ends_with("/a"))
        .unwrap()
        .clone();

    // Keep a by id, drop b, add c
    let update = UpdateEvent {
        media_links: Some(vec![
            MediaLinkInput {
                id: Some(link_a.id),
                url: link_a.url.clone(),
            },
            MediaLinkInput {
                id: None,
                url: "https://example.org/c".to_string(),
            },
        ]),
        ..Default::default()
    };
    let updated = events::update(&db, &principal(&curator), created.event.id, update)
        .await
        .unwrap();

    assert_eq!(updated.media_links.len(), 2);
    assert!(updated.media_links.iter().any(|l| l.id == link_a.id));
    assert!(updated.media_links.iter().any(|l| l.url.ends_with("/c")));
    assert!(!updated.media_links.iter().any(|l| l.url.ends_with("/b")));
}

#[tokio::test]
async fn category_list_replaces_wholesale() {
    let db = db().await;
    let curator = create_user(&db, "c@campus.test", UserRole::Curator).await;
    let today = Utc::now().date_naive();

    let mut category_ids = Vec::new();
    for name in ["Students", "Staff"] {
        let cat = participant_category::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();
        category_ids.push(cat.id);
    }

    let mut input = event_input("Categorized", today);
    input.category_ids = category_ids.clone();
    let created = events::create(&db, &principal(&curator), input).await.unwrap();
    assert_eq!(created.category_ids.len(), 2);

    // An explicitly empty list clears the association set
    let update = UpdateEvent {
        category_ids: Some(Vec::new()),
        ..Default::default()
    };
    let updated = events::update(&db, &principal(&curator), created.event.id, update)
        .await
        .unwrap();
    assert!(updated.category_ids.is_empty());
}

#[tokio::test]
async fn delete_is_admin_only() {
    let db = db().await;
    let admin = create_user(&db, "admin@campus.test", UserRole::Administrator).await;
    let curator = create_user(&db, "c@campus.test", UserRole::Curator).await;
    let today = Utc::now().date_naive();

    let created = events::create(&db, &principal(&curator), event_input("Doomed", today))
        .await
        .unwrap();

    let result = events::delete(&db, &principal(&curator), created.event.id).await;
    assert!(matches!(result, Err(CoreError::Forbidden(_))));

    events::delete(&db, &principal(&admin), created.event.id)
        .await
        .unwrap();
    let result = events::get(&db, &principal(&admin), created.event.id).await;
    assert!(matches!(result, Err(CoreError::NotFound(_))));
}

#[tokio::test]
async fn title_filter_narrows_listing() {
    let db = db().await;
    let curator = create_user(&db, "c@campus.test", UserRole::Curator).await;
    let today = Utc::now().date_naive();

    events::create(&db, &principal(&curator), event_input("Science fair", today))
        .await
        .unwrap();
    events::create(&db, &principal(&curator), event_input("Sports day", today))
        .await
        .unwrap();

    let filter = EventFilter {
        title: Some("Science".to_string()),
        ..Default::default()
    };
    let found = events::list(&db, &principal(&curator), &filter, page())
        .await
        .unwrap();
    assert_eq!(found.total_items, 1);
    assert_eq!(found.items[0].title, "Science fair");
}
