//! Shared fixtures for service-level tests against in-memory SQLite

use campus_core::services::events::CreateEvent;
use campus_core::Principal;
use campus_db::entities::user::UserRole;
use campus_db::entities::{student, student_group, student_tag, user};
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

pub async fn db() -> DatabaseConnection {
    let db = campus_db::connect("sqlite::memory:")
        .await
        .expect("connect to in-memory sqlite");
    campus_db::migrate(&db).await.expect("run migrations");
    db
}

pub async fn create_user(db: &DatabaseConnection, email: &str, role: UserRole) -> user::Model {
    let now = Utc::now();
    user::ActiveModel {
        email: Set(email.to_string()),
        password_hash: Set("$argon2id$unused".to_string()),
        full_name: Set(format!("User {email}")),
        phone: Set(None),
        position: Set(None),
        role: Set(role),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert user")
}

pub fn principal(user: &user::Model) -> Principal {
    Principal::new(user.id, user.role)
}

pub async fn create_group(
    db: &DatabaseConnection,
    name: &str,
    curator_user_id: Option<i32>,
) -> student_group::Model {
    student_group::ActiveModel {
        name: Set(name.to_string()),
        curator_user_id: Set(curator_user_id),
        faculty: Set(None),
        admission_year: Set(None),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert group")
}

pub async fn create_student(
    db: &DatabaseConnection,
    group_id: i32,
    full_name: &str,
    birth_date: Option<NaiveDate>,
) -> student::Model {
    student::ActiveModel {
        full_name: Set(full_name.to_string()),
        birth_date: Set(birth_date),
        group_id: Set(group_id),
        phone: Set(None),
        email: Set(None),
        card_number: Set(None),
        is_active: Set(true),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert student")
}

pub async fn create_tag(db: &DatabaseConnection, name: &str) -> student_tag::Model {
    student_tag::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert tag")
}

/// Minimal valid event input with a description that clears the floor.
pub fn event_input(title: &str, start_date: NaiveDate) -> CreateEvent {
    CreateEvent {
        title: title.to_string(),
        direction_id: None,
        level_id: None,
        format_id: None,
        start_date,
        end_date: None,
        location: None,
        address: None,
        participants_count: None,
        has_foreigners: false,
        foreigners_count: None,
        has_minors: false,
        minors_count: None,
        description: "d".repeat(120),
        responsible_full_name: "Responsible Person".to_string(),
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
