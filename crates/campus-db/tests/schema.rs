//! Schema-level behavior: migrations apply cleanly, cascades and SET NULL
//! policies hold, unique constraints fire

use campus_db::entities::event::EventStatus;
use campus_db::entities::user::UserRole;
use campus_db::entities::{
    curator_report, direction, event, media_link, prelude::*, student, student_group, user,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, Set,
};

async fn db() -> DatabaseConnection {
    let db = campus_db::connect("sqlite::memory:").await.unwrap();
    campus_db::migrate(&db).await.unwrap();
    db
}

async fn insert_user(db: &DatabaseConnection, email: &str) -> user::Model {
    let now = Utc::now();
    user::ActiveModel {
        email: Set(email.to_string()),
        password_hash: Set("hash".to_string()),
        full_name: Set("Test User".to_string()),
        phone: Set(None),
        position: Set(None),
        role: Set(UserRole::Curator),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

async fn insert_event(db: &DatabaseConnection, creator: i32) -> event::Model {
    let now = Utc::now();
    event::ActiveModel {
        title: Set("Event".to_string()),
        start_date: Set(now.date_naive()),
        has_foreigners: Set(false),
        has_minors: Set(false),
        description: Set("d".repeat(120)),
        responsible_full_name: Set("Responsible".to_string()),
        status: Set(EventStatus::Planned),
        created_by_user_id: Set(creator),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

#[tokio::test]
async fn migrations_apply_on_a_fresh_database() {
    let db = db().await;
    // A trivial query against a late-created table proves the schema is up
    let count = Document::find().count(&db).await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn deleting_a_group_cascades_to_students() {
    let db = db().await;
    let group = student_group::ActiveModel {
        name: Set("G-1".to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    student::ActiveModel {
        full_name: Set("Student".to_string()),
        group_id: Set(group.id),
        is_active: Set(true),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    StudentGroup::delete_by_id(group.id).exec(&db).await.unwrap();

    let remaining = Student::find().count(&db).await.unwrap();
    assert_eq!(remaining, 0);
}

#[tokio::test]
async fn deleting_an_event_cascades_to_children_but_not_reports() {
    let db = db().await;
    let curator = insert_user(&db, "c@campus.test").await;
    let event = insert_event(&db, curator.id).await;

    media_link::ActiveModel {
        event_id: Set(event.id),
        url: Set("https://example.org/post".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    let report = curator_report::ActiveModel {
        curator_user_id: Set(curator.id),
        title: Set("Report".to_string()),
        report_date: Set(Utc::now().date_naive()),
        event_id: Set(Some(event.id)),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    Event::delete_by_id(event.id).exec(&db).await.unwrap();

    assert_eq!(MediaLink::find().count(&db).await.unwrap(), 0);

    // The report survives with its event reference nulled
    let surviving = CuratorReport::find_by_id(report.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(surviving.event_id, None);
}

#[tokio::test]
async fn deleting_a_curator_nulls_their_groups() {
    let db = db().await;
    let curator = insert_user(&db, "c@campus.test").await;

    let group = student_group::ActiveModel {
        name: Set("G-1".to_string()),
        curator_user_id: Set(Some(curator.id)),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    User::delete_by_id(curator.id).exec(&db).await.unwrap();

    let surviving = StudentGroup::find_by_id(group.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(surviving.curator_user_id, None);
}

#[tokio::test]
async fn user_email_is_unique() {
    let db = db().await;
    insert_user(&db, "same@campus.test").await;

    let now = Utc::now();
    let result = user::ActiveModel {
        email: Set("same@campus.test".to_string()),
        password_hash: Set("hash".to_string()),
        full_name: Set("Other".to_string()),
        role: Set(UserRole::Curator),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&db)
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn lookups_navigate_back_to_their_events() {
    let db = db().await;
    let curator = insert_user(&db, "c@campus.test").await;

    let dir = direction::ActiveModel {
        name: Set("Culture".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    let event = insert_event(&db, curator.id).await;
    let mut active: event::ActiveModel = event.into();
    active.direction_id = Set(Some(dir.id));
    let event = active.update(&db).await.unwrap();

    let related = dir.find_related(Event).all(&db).await.unwrap();
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].id, event.id);
}

#[tokio::test]
async fn event_status_round_trips_through_its_wire_strings() {
    let db = db().await;
    let curator = insert_user(&db, "c@campus.test").await;
    let event = insert_event(&db, curator.id).await;

    let mut active: event::ActiveModel = event.into();
    active.status = Set(EventStatus::Cancelled);
    let cancelled = active.update(&db).await.unwrap();

    let found = Event::find()
        .filter(event::Column::Status.eq(EventStatus::Cancelled))
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, cancelled.id);

    let json = serde_json::to_value(&found).unwrap();
    assert_eq!(json["status"], "Not held (Cancelled)");
}
