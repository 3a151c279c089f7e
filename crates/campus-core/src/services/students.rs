//! Student roster service
//!
//! Reads are ownership-scoped through the group's curator; mutations are
//! administrator-only. Tag assignments are a replace-set: a provided
//! `tag_ids` list swaps the whole set, and one unresolvable id rejects the
//! entire write.

use campus_db::entities::{prelude::*, student, student_tag, student_tag_assignment};
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::collections::HashSet;
use tracing::info;

use crate::error::{CoreError, FieldError};
use crate::pagination::{paginate, Page, PageParams};
use crate::scope::{self, Principal, Scope};

#[derive(Debug, Clone, Default)]
pub struct StudentFilter {
    pub group_id: Option<i32>,
    pub search: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct CreateStudent {
    pub full_name: String,
    pub birth_date: Option<NaiveDate>,
    pub group_id: i32,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub card_number: Option<String>,
    pub is_active: bool,
    pub tag_ids: Option<Vec<i32>>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateStudent {
    pub full_name: Option<String>,
    pub birth_date: Option<Option<NaiveDate>>,
    pub group_id: Option<i32>,
    pub phone: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub card_number: Option<Option<String>>,
    pub is_active: Option<bool>,
    pub tag_ids: Option<Vec<i32>>,
}

/// Student row plus its resolved tags
#[derive(Debug, Clone)]
pub struct StudentDetails {
    pub student: student::Model,
    pub tags: Vec<student_tag::Model>,
}

pub async fn list(
    db: &DatabaseConnection,
    principal: &Principal,
    filter: &StudentFilter,
    params: PageParams,
) -> Result<Page<student::Model>, CoreError> {
    let scope = scope::students(db, principal, filter.group_id).await?;
    if matches!(scope, Scope::Nothing) {
        return Ok(Page::empty(params));
    }

    let mut cond = Condition::all();
    if let Some(ref needle) = filter.search {
        cond = cond.add(student::Column::FullName.contains(needle));
    }
    if let Some(active) = filter.is_active {
        cond = cond.add(student::Column::IsActive.eq(active));
    }
    // The admin group filter lives in the scope already; nothing extra here.

    let select = Student::find()
        .filter(scope.into_condition(cond))
        .order_by_asc(student::Column::FullName)
        .order_by_asc(student::Column::Id);

    paginate(select, db, params).await
}

pub async fn get(
    db: &DatabaseConnection,
    principal: &Principal,
    id: i32,
) -> Result<StudentDetails, CoreError> {
    let student = find_visible(db, principal, id).await?;
    let tags = load_tags(db, student.id).await?;
    Ok(StudentDetails { student, tags })
}

async fn find_visible<C: ConnectionTrait>(
    db: &C,
    principal: &Principal,
    id: i32,
) -> Result<student::Model, CoreError> {
    let student = Student::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| CoreError::not_found(format!("student {id} not found")))?;

    if !principal.is_admin() {
        let owned = scope::owned_group_ids(db, principal).await?;
        if !owned.contains(&student.group_id) {
            return Err(CoreError::not_found(format!("student {id} not found")));
        }
    }

    Ok(student)
}

async fn load_tags<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
) -> Result<Vec<student_tag::Model>, CoreError> {
    let tag_ids: Vec<i32> = StudentTagAssignment::find()
        .filter(student_tag_assignment::Column::StudentId.eq(student_id))
        .all(db)
        .await?
        .into_iter()
        .map(|row| row.tag_id)
        .collect();

    if tag_ids.is_empty() {
        return Ok(Vec::new());
    }

    Ok(StudentTag::find()
        .filter(student_tag::Column::Id.is_in(tag_ids))
        .order_by_asc(student_tag::Column::Name)
        .all(db)
        .await?)
}

/// Every provided tag id must resolve, or nothing is applied.
async fn check_tag_ids<C: ConnectionTrait>(db: &C, tag_ids: &[i32]) -> Result<(), CoreError> {
    if tag_ids.is_empty() {
        return Ok(());
    }
    let known: HashSet<i32> = StudentTag::find()
        .filter(student_tag::Column::Id.is_in(tag_ids.to_vec()))
        .all(db)
        .await?
        .into_iter()
        .map(|tag| tag.id)
        .collect();
    let missing: Vec<String> = tag_ids
        .iter()
        .filter(|id| !known.contains(id))
        .map(|id| id.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(CoreError::validation_fields(
            "student validation failed",
            vec![FieldError::new(
                "tagIds",
                format!("unknown tag ids: {}", missing.join(", ")),
            )],
        ));
    }
    Ok(())
}

async fn check_group_exists<C: ConnectionTrait>(db: &C, group_id: i32) -> Result<(), CoreError> {
    StudentGroup::find_by_id(group_id)
        .one(db)
        .await?
        .ok_or_else(|| CoreError::not_found(format!("student group {group_id} not found")))?;
    Ok(())
}

async fn replace_tags<C: ConnectionTrait>(
    txn: &C,
    student_id: i32,
    tag_ids: &[i32],
) -> Result<(), CoreError> {
    StudentTagAssignment::delete_many()
        .filter(student_tag_assignment::Column::StudentId.eq(student_id))
        .exec(txn)
        .await?;
    if !tag_ids.is_empty() {
        let today = Utc::now().date_naive();
        StudentTagAssignment::insert_many(tag_ids.iter().map(|&tag_id| {
            student_tag_assignment::ActiveModel {
                student_id: Set(student_id),
                tag_id: Set(tag_id),
                assigned_at: Set(today),
                notes: Set(None),
            }
        }))
        .exec(txn)
        .await?;
    }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    principal: &Principal,
    input: CreateStudent,
) -> Result<StudentDetails, CoreError> {
    principal.require_admin()?;

    if input.full_name.trim().is_empty() {
        return Err(CoreError::validation_fields(
            "student validation failed",
            vec![FieldError::new("fullName", "full name must not be empty")],
        ));
    }
    check_group_exists(db, input.group_id).await?;
    if let Some(ref tag_ids) = input.tag_ids {
        check_tag_ids(db, tag_ids).await?;
    }

    let student = db
        .transaction::<_, student::Model, CoreError>(|txn| {
            Box::pin(async move {
                let student = student::ActiveModel {
                    full_name: Set(input.full_name),
                    birth_date: Set(input.birth_date),
                    group_id: Set(input.group_id),
                    phone: Set(input.phone),
                    email: Set(input.email),
                    card_number: Set(input.card_number),
                    is_active: Set(input.is_active),
                    created_at: Set(Utc::now()),
                    ..Default::default()
                }
                .insert(txn)
                .await
                .map_err(|e| CoreError::on_unique(e, "email or card number already in use"))?;

                if let Some(ref tag_ids) = input.tag_ids {
                    replace_tags(txn, student.id, tag_ids).await?;
                }

                Ok(student)
            })
        })
        .await
        .map_err(CoreError::from)?;

    info!(student_id = student.id, "student created");
    let tags = load_tags(db, student.id).await?;
    Ok(StudentDetails { student, tags })
}

pub async fn update(
    db: &DatabaseConnection,
    principal: &Principal,
    id: i32,
    input: UpdateStudent,
) -> Result<StudentDetails, CoreError> {
    principal.require_admin()?;

    let existing = Student::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| CoreError::not_found(format!("student {id} not found")))?;

    if let Some(group_id) = input.group_id {
        check_group_exists(db, group_id).await?;
    }
    if let Some(ref tag_ids) = input.tag_ids {
        check_tag_ids(db, tag_ids).await?;
    }

    let student = db
        .transaction::<_, student::Model, CoreError>(|txn| {
            Box::pin(async move {
                let mut active: student::ActiveModel = existing.into();

                if let Some(full_name) = input.full_name {
                    active.full_name = Set(full_name);
                }
                if let Some(birth_date) = input.birth_date {
                    active.birth_date = Set(birth_date);
                }
                if let Some(group_id) = input.group_id {
                    active.group_id = Set(group_id);
                }
                if let Some(phone) = input.phone {
                    active.phone = Set(phone);
                }
                if let Some(email) = input.email {
                    active.email = Set(email);
                }
                if let Some(card_number) = input.card_number {
                    active.card_number = Set(card_number);
                }
                if let Some(is_active) = input.is_active {
                    active.is_active = Set(is_active);
                }

                let student = active
                    .update(txn)
                    .await
                    .map_err(|e| CoreError::on_unique(e, "email or card number already in use"))?;

                if let Some(ref tag_ids) = input.tag_ids {
                    replace_tags(txn, student.id, tag_ids).await?;
                }

                Ok(student)
            })
        })
        .await
        .map_err(CoreError::from)?;

    let tags = load_tags(db, student.id).await?;
    Ok(StudentDetails { student, tags })
}

pub async fn delete(
    db: &DatabaseConnection,
    principal: &Principal,
    id: i32,
) -> Result<(), CoreError> {
    principal.require_admin()?;

    let result = Student::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(CoreError::not_found(format!("student {id} not found")));
    }

    info!(student_id = id, "student deleted");
    Ok(())
}
