//! Student and group scoping / mutation rules

mod common;

use campus_core::services::students::{self, CreateStudent, StudentFilter, UpdateStudent};
use campus_core::{CoreError, PageParams};
use campus_db::entities::user::UserRole;
use sea_orm::{EntityTrait, PaginatorTrait};

use common::{create_group, create_student, create_tag, create_user, db, principal};

fn page() -> PageParams {
    PageParams::new(None, None, 10)
}

fn student_input(group_id: i32, name: &str) -> CreateStudent {
    CreateStudent {
        full_name: name.to_string(),
        birth_date: None,
        group_id,
        phone: None,
        email: None,
        card_number: None,
        is_active: true,
        tag_ids: None,
    }
}

#[tokio::test]
async fn groupless_curator_gets_an_empty_page() {
    let db = db().await;
    let curator = create_user(&db, "c@campus.test", UserRole::Curator).await;

    let group = create_group(&db, "IT-101", None).await;
    create_student(&db, group.id, "Somebody Else", None).await;

    let result = students::list(&db, &principal(&curator), &StudentFilter::default(), page())
        .await
        .unwrap();
    assert_eq!(result.total_items, 0);
    assert!(result.items.is_empty());
}

#[tokio::test]
async fn curator_sees_only_students_of_owned_groups() {
    let db = db().await;
    let alice = create_user(&db, "alice@campus.test", UserRole::Curator).await;
    let bob = create_user(&db, "bob@campus.test", UserRole::Curator).await;

    let alice_group = create_group(&db, "A-1", Some(alice.id)).await;
    let bob_group = create_group(&db, "B-1", Some(bob.id)).await;
    let mine = create_student(&db, alice_group.id, "Mine", None).await;
    let theirs = create_student(&db, bob_group.id, "Theirs", None).await;

    let listed = students::list(&db, &principal(&alice), &StudentFilter::default(), page())
        .await
        .unwrap();
    assert_eq!(listed.total_items, 1);
    assert_eq!(listed.items[0].id, mine.id);

    let result = students::get(&db, &principal(&alice), theirs.id).await;
    assert!(matches!(result, Err(CoreError::NotFound(_))));
}

#[tokio::test]
async fn curator_cannot_mutate_students() {
    let db = db().await;
    let curator = create_user(&db, "c@campus.test", UserRole::Curator).await;
    let group = create_group(&db, "G-1", Some(curator.id)).await;

    let result = students::create(&db, &principal(&curator), student_input(group.id, "New")).await;
    assert!(matches!(result, Err(CoreError::Forbidden(_))));
}

#[tokio::test]
async fn unknown_group_is_not_found() {
    let db = db().await;
    let admin = create_user(&db, "admin@campus.test", UserRole::Administrator).await;

    let result = students::create(&db, &principal(&admin), student_input(999, "Orphan")).await;
    assert!(matches!(result, Err(CoreError::NotFound(_))));
}

#[tokio::test]
async fn invalid_tag_ids_reject_the_whole_write() {
    let db = db().await;
    let admin = create_user(&db, "admin@campus.test", UserRole::Administrator).await;
    let group = create_group(&db, "G-1", None).await;
    let real = create_tag(&db, "Athlete").await;

    let mut input = student_input(group.id, "Tagged");
    input.tag_ids = Some(vec![real.id, 4242]);
    let result = students::create(&db, &principal(&admin), input).await;
    assert!(matches!(result, Err(CoreError::Validation { .. })));

    // Nothing was applied
    let count = campus_db::entities::prelude::Student::find()
        .count(&db)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn tag_list_replaces_the_assignment_set() {
    let db = db().await;
    let admin = create_user(&db, "admin@campus.test", UserRole::Administrator).await;
    let group = create_group(&db, "G-1", None).await;
    let athlete = create_tag(&db, "Athlete").await;
    let volunteer = create_tag(&db, "Volunteer").await;

    let mut input = student_input(group.id, "Switcher");
    input.tag_ids = Some(vec![athlete.id]);
    let created = students::create(&db, &principal(&admin), input).await.unwrap();
    assert_eq!(created.tags.len(), 1);
    assert_eq!(created.tags[0].name, "Athlete");

    let update = UpdateStudent {
        tag_ids: Some(vec![volunteer.id]),
        ..Default::default()
    };
    let updated = students::update(&db, &principal(&admin), created.student.id, update)
        .await
        .unwrap();
    assert_eq!(updated.tags.len(), 1);
    assert_eq!(updated.tags[0].name, "Volunteer");
}

#[tokio::test]
async fn duplicate_email_maps_to_conflict() {
    let db = db().await;
    let admin = create_user(&db, "admin@campus.test", UserRole::Administrator).await;
    let group = create_group(&db, "G-1", None).await;

    let mut first = student_input(group.id, "First");
    first.email = Some("same@student.test".to_string());
    students::create(&db, &principal(&admin), first).await.unwrap();

    let mut second = student_input(group.id, "Second");
    second.email = Some("same@student.test".to_string());
    let result = students::create(&db, &principal(&admin), second).await;
    assert!(matches!(result, Err(CoreError::Conflict(_))));
}
