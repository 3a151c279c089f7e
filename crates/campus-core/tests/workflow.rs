//! End-to-end service scenario: register, log in, bulk-assign, verify
//! ownership scoping of the assigned events

mod common;

use campus_core::services::assign::{self, EventTemplate};
use campus_core::services::events::{self, EventFilter};
use campus_core::services::{auth, reports};
use campus_core::{CoreError, PageParams, Principal};
use campus_db::entities::user::UserRole;
use chrono::Utc;

use common::{create_user, db, principal};

const JWT_SECRET: &[u8] = b"workflow-test-secret";

fn template(title: &str) -> EventTemplate {
    EventTemplate {
        title: title.to_string(),
        direction_id: None,
        level_id: None,
        format_id: None,
        start_date: Utc::now().date_naive(),
        end_date: None,
        location: None,
        address: None,
        participants_count: None,
        has_foreigners: false,
        foreigners_count: None,
        has_minors: false,
        minors_count: None,
        description: "d".repeat(120),
        responsible_full_name: None,
        responsible_phone: None,
        responsible_email: None,
        funding_amount: None,
        category_ids: Vec::new(),
        funding_source_ids: Vec::new(),
        media_links: Vec::new(),
        event_media: Vec::new(),
        invited_guests: Vec::new(),
    }
}

#[tokio::test]
async fn register_login_assign_and_owner_visibility() {
    let db = db().await;
    let admin = create_user(&db, "admin@campus.test", UserRole::Administrator).await;

    // Open registration always yields a curator
    let registered = auth::register(
        &db,
        auth::RegisterInput {
            email: "new.curator@campus.test".to_string(),
            password: "secret1".to_string(),
            full_name: "New Curator".to_string(),
            phone: Some("+100200300".to_string()),
            position: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(registered.role, UserRole::Curator);

    let session = auth::login(&db, JWT_SECRET, "new.curator@campus.test", "secret1")
        .await
        .unwrap();
    assert!(!session.token.is_empty());
    let curator = Principal::new(session.user.id, session.user.role);

    let outcome = assign::assign_event(
        &db,
        &principal(&admin),
        vec![session.user.id],
        template("Assigned orientation"),
    )
    .await
    .unwrap();
    assert_eq!(outcome.created.len(), 1);
    assert!(outcome.failed.is_empty());

    // The target curator owns the event and can see it
    let visible = events::list(
        &db,
        &curator,
        &EventFilter::default(),
        PageParams::new(None, None, 10),
    )
    .await
    .unwrap();
    assert_eq!(visible.total_items, 1);
    assert_eq!(visible.items[0].title, "Assigned orientation");
    assert_eq!(visible.items[0].created_by_user_id, session.user.id);

    // Responsible fields defaulted from the curator profile
    assert_eq!(visible.items[0].responsible_full_name, "New Curator");
    assert_eq!(
        visible.items[0].responsible_phone.as_deref(),
        Some("+100200300")
    );

    // A different curator sees nothing
    let outsider = create_user(&db, "other@campus.test", UserRole::Curator).await;
    let hidden = events::list(
        &db,
        &principal(&outsider),
        &EventFilter::default(),
        PageParams::new(None, None, 10),
    )
    .await
    .unwrap();
    assert_eq!(hidden.total_items, 0);
}

#[tokio::test]
async fn assignment_rejects_invalid_targets_wholesale() {
    let db = db().await;
    let admin = create_user(&db, "admin@campus.test", UserRole::Administrator).await;
    let curator = create_user(&db, "c@campus.test", UserRole::Curator).await;

    // One good target, one nonexistent, one with the wrong role
    let result = assign::assign_event(
        &db,
        &principal(&admin),
        vec![curator.id, 9999, admin.id],
        template("Never created"),
    )
    .await;
    assert!(matches!(result, Err(CoreError::Validation { .. })));

    // Nothing created, not even for the valid target
    let events = events::list(
        &db,
        &principal(&admin),
        &EventFilter::default(),
        PageParams::new(None, None, 10),
    )
    .await
    .unwrap();
    assert_eq!(events.total_items, 0);
}

#[tokio::test]
async fn assignment_collects_per_target_failures_without_aborting() {
    let db = db().await;
    let admin = create_user(&db, "admin@campus.test", UserRole::Administrator).await;
    let curator = create_user(&db, "c@campus.test", UserRole::Curator).await;

    // Valid target, but the template fails creation for every curator
    let mut bad = template("Doomed");
    bad.description = "too short".to_string();

    let outcome = assign::assign_event(&db, &principal(&admin), vec![curator.id], bad)
        .await
        .unwrap();

    assert!(outcome.created.is_empty());
    assert_eq!(outcome.failed.len(), 1);
    assert_eq!(outcome.failed[0].curator_user_id, curator.id);

    let events = events::list(
        &db,
        &principal(&admin),
        &EventFilter::default(),
        PageParams::new(None, None, 10),
    )
    .await
    .unwrap();
    assert_eq!(events.total_items, 0);
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let db = db().await;

    let input = auth::RegisterInput {
        email: "dup@campus.test".to_string(),
        password: "secret1".to_string(),
        full_name: "Dup".to_string(),
        phone: None,
        position: None,
    };
    auth::register(&db, input.clone()).await.unwrap();

    let result = auth::register(&db, input).await;
    assert!(matches!(result, Err(CoreError::Conflict(_))));
}

#[tokio::test]
async fn inactive_accounts_cannot_log_in() {
    let db = db().await;
    let admin = create_user(&db, "admin@campus.test", UserRole::Administrator).await;

    let registered = auth::register(
        &db,
        auth::RegisterInput {
            email: "locked@campus.test".to_string(),
            password: "secret1".to_string(),
            full_name: "Locked Out".to_string(),
            phone: None,
            position: None,
        },
    )
    .await
    .unwrap();

    campus_core::services::users::update(
        &db,
        &principal(&admin),
        registered.id,
        campus_core::services::users::UpdateUser {
            is_active: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let result = auth::login(&db, JWT_SECRET, "locked@campus.test", "secret1").await;
    assert!(matches!(result, Err(CoreError::Unauthorized(_))));
}

#[tokio::test]
async fn report_stats_are_caller_scoped() {
    let db = db().await;
    let alice = create_user(&db, "alice@campus.test", UserRole::Curator).await;
    let bob = create_user(&db, "bob@campus.test", UserRole::Curator).await;
    let admin = create_user(&db, "admin@campus.test", UserRole::Administrator).await;

    let today = Utc::now().date_naive();
    let file_report = |owner: Principal, title: &str| {
        let title = title.to_string();
        let db = db.clone();
        async move {
            reports::create(
                &db,
                &owner,
                reports::CreateReport {
                    title,
                    report_date: today,
                    location: None,
                    direction: None,
                    guest_info: None,
                    foreigners_count: None,
                    minors_count: None,
                    duration_hours: None,
                    media_refs: None,
                    event_id: None,
                    participant_student_ids: Vec::new(),
                },
            )
            .await
            .unwrap()
        }
    };

    file_report(principal(&alice), "Alice report").await;
    file_report(principal(&bob), "Bob one").await;
    file_report(principal(&bob), "Bob two").await;

    let alice_stats = reports::stats(&db, &principal(&alice), None).await.unwrap();
    assert_eq!(alice_stats.total_reports, 1);

    let admin_stats = reports::stats(&db, &principal(&admin), None).await.unwrap();
    assert_eq!(admin_stats.total_reports, 3);

    let filtered = reports::stats(&db, &principal(&admin), Some(bob.id))
        .await
        .unwrap();
    assert_eq!(filtered.total_reports, 2);
}
