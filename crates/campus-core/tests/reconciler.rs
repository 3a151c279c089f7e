//! Background sweep behavior: overdue cancellation and minor-tag sync

mod common;

use campus_core::reconciler::{cancel_overdue_events, sync_minor_tags, MinorTagSummary};
use campus_core::services::events;
use campus_db::entities::event::EventStatus;
use campus_db::entities::student_tag::MINOR_TAG_NAME;
use campus_db::entities::user::UserRole;
use chrono::{Duration, Months, Utc};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use common::{create_group, create_student, create_tag, create_user, db, event_input, principal};

#[tokio::test]
async fn overdue_planned_events_are_cancelled_once() {
    let db = db().await;
    let curator = create_user(&db, "c@campus.test", UserRole::Curator).await;
    let today = Utc::now().date_naive();

    // Open-ended event that started ten days ago: overdue
    let overdue = events::create(
        &db,
        &principal(&curator),
        event_input("Stale", today - Duration::days(10)),
    )
    .await
    .unwrap();

    // Ended yesterday: inside the grace window
    let mut recent_input = event_input("Recent", today - Duration::days(5));
    recent_input.end_date = Some(today - Duration::days(1));
    let recent = events::create(&db, &principal(&curator), recent_input)
        .await
        .unwrap();

    // Old but already Held: not the sweep's business
    let held = events::create(
        &db,
        &principal(&curator),
        event_input("Done", today - Duration::days(30)),
    )
    .await
    .unwrap();
    events::update_status(&db, &principal(&curator), held.event.id, EventStatus::Held)
        .await
        .unwrap();

    assert_eq!(cancel_overdue_events(&db).await.unwrap(), 1);

    let check = |id| campus_db::entities::prelude::Event::find_by_id(id).one(&db);
    assert_eq!(
        check(overdue.event.id).await.unwrap().unwrap().status,
        EventStatus::Cancelled
    );
    assert_eq!(
        check(recent.event.id).await.unwrap().unwrap().status,
        EventStatus::Planned
    );
    assert_eq!(
        check(held.event.id).await.unwrap().unwrap().status,
        EventStatus::Held
    );

    // Idempotent: the second pass finds nothing left to cancel
    assert_eq!(cancel_overdue_events(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn end_date_takes_precedence_over_start_date() {
    let db = db().await;
    let curator = create_user(&db, "c@campus.test", UserRole::Curator).await;
    let today = Utc::now().date_naive();

    // Started long ago but still running (end date in the future)
    let mut input = event_input("Long running", today - Duration::days(60));
    input.end_date = Some(today + Duration::days(1));
    events::create(&db, &principal(&curator), input).await.unwrap();

    assert_eq!(cancel_overdue_events(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn minor_tag_follows_the_18th_birthday() {
    let db = db().await;
    create_tag(&db, MINOR_TAG_NAME).await;
    let group = create_group(&db, "G-1", None).await;

    let today = Utc::now().date_naive();
    let eighteen_today = today.checked_sub_months(Months::new(12 * 18)).unwrap();
    let seventeen_and_364 = eighteen_today + Duration::days(1);

    let adult = create_student(&db, group.id, "Adult Today", Some(eighteen_today)).await;
    let minor = create_student(&db, group.id, "Still Minor", Some(seventeen_and_364)).await;
    create_student(&db, group.id, "No Birth Date", None).await;

    let summary = sync_minor_tags(&db).await.unwrap();
    assert_eq!(
        summary,
        MinorTagSummary {
            tagged: 1,
            untagged: 0,
            failed: 0
        }
    );

    let assignments = campus_db::entities::prelude::StudentTagAssignment::find()
        .all(&db)
        .await
        .unwrap();
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].student_id, minor.id);
    assert_ne!(assignments[0].student_id, adult.id);

    // Second pass changes nothing
    let summary = sync_minor_tags(&db).await.unwrap();
    assert_eq!(summary, MinorTagSummary::default());
}

#[tokio::test]
async fn aged_out_students_lose_the_tag() {
    let db = db().await;
    let tag = create_tag(&db, MINOR_TAG_NAME).await;
    let group = create_group(&db, "G-1", None).await;

    let today = Utc::now().date_naive();
    let twenty = today.checked_sub_months(Months::new(12 * 20)).unwrap();
    let adult = create_student(&db, group.id, "Grown Up", Some(twenty)).await;

    // Stale assignment left over from years ago
    use sea_orm::{ActiveModelTrait, Set};
    campus_db::entities::student_tag_assignment::ActiveModel {
        student_id: Set(adult.id),
        tag_id: Set(tag.id),
        assigned_at: Set(today - Duration::days(1000)),
        notes: Set(None),
    }
    .insert(&db)
    .await
    .unwrap();

    let summary = sync_minor_tags(&db).await.unwrap();
    assert_eq!(summary.untagged, 1);

    let remaining = campus_db::entities::prelude::StudentTagAssignment::find()
        .filter(campus_db::entities::student_tag_assignment::Column::StudentId.eq(adult.id))
        .count(&db)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}

#[tokio::test]
async fn missing_minor_tag_skips_the_sweep() {
    let db = db().await;
    let group = create_group(&db, "G-1", None).await;

    let today = Utc::now().date_naive();
    let ten_years_old = today.checked_sub_months(Months::new(120)).unwrap();
    create_student(&db, group.id, "Young", Some(ten_years_old)).await;

    // No tag named "Minor" exists; the sweep must not invent one
    let summary = sync_minor_tags(&db).await.unwrap();
    assert_eq!(summary, MinorTagSummary::default());

    let assignments = campus_db::entities::prelude::StudentTagAssignment::find()
        .count(&db)
        .await
        .unwrap();
    assert_eq!(assignments, 0);
}
