//! Student group service
//!
//! Reads are ownership-scoped; mutations are administrator-only.
//! Deleting a group cascades to its students.

use campus_db::entities::{prelude::*, student, student_group, user::UserRole};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

use crate::error::{CoreError, FieldError};
use crate::pagination::{paginate, Page, PageParams};
use crate::scope::{self, Principal};

#[derive(Debug, Clone, Default)]
pub struct GroupFilter {
    pub curator_id: Option<i32>,
    pub search: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateGroup {
    pub name: String,
    pub curator_user_id: Option<i32>,
    pub faculty: Option<String>,
    pub admission_year: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateGroup {
    pub name: Option<String>,
    pub curator_user_id: Option<Option<i32>>,
    pub faculty: Option<Option<String>>,
    pub admission_year: Option<Option<i32>>,
}

/// Group row plus its student count
#[derive(Debug, Clone)]
pub struct GroupDetails {
    pub group: student_group::Model,
    pub student_count: u64,
}

pub async fn list(
    db: &DatabaseConnection,
    principal: &Principal,
    filter: &GroupFilter,
    params: PageParams,
) -> Result<Page<student_group::Model>, CoreError> {
    let mut cond = Condition::all();
    if let Some(ref needle) = filter.search {
        cond = cond.add(student_group::Column::Name.contains(needle));
    }

    let select = StudentGroup::find()
        .filter(scope::groups(principal, filter.curator_id).into_condition(cond))
        .order_by_asc(student_group::Column::Name);

    paginate(select, db, params).await
}

pub async fn get(
    db: &DatabaseConnection,
    principal: &Principal,
    id: i32,
) -> Result<GroupDetails, CoreError> {
    let group = StudentGroup::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| CoreError::not_found(format!("student group {id} not found")))?;

    if !principal.is_admin() && group.curator_user_id != Some(principal.id) {
        return Err(CoreError::not_found(format!("student group {id} not found")));
    }

    let student_count = Student::find()
        .filter(student::Column::GroupId.eq(group.id))
        .count(db)
        .await?;

    Ok(GroupDetails {
        group,
        student_count,
    })
}

/// An assigned curator must be an existing user with the curator role.
async fn check_curator<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<(), CoreError> {
    let user = User::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or_else(|| CoreError::not_found(format!("user {user_id} not found")))?;
    if user.role != UserRole::Curator {
        return Err(CoreError::validation_fields(
            "group validation failed",
            vec![FieldError::new(
                "curatorUserId",
                format!("user {user_id} is not a curator"),
            )],
        ));
    }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    principal: &Principal,
    input: CreateGroup,
) -> Result<student_group::Model, CoreError> {
    principal.require_admin()?;

    if input.name.trim().is_empty() {
        return Err(CoreError::validation_fields(
            "group validation failed",
            vec![FieldError::new("name", "name must not be empty")],
        ));
    }
    if let Some(curator_id) = input.curator_user_id {
        check_curator(db, curator_id).await?;
    }

    let group = student_group::ActiveModel {
        name: Set(input.name),
        curator_user_id: Set(input.curator_user_id),
        faculty: Set(input.faculty),
        admission_year: Set(input.admission_year),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| CoreError::on_unique(e, "group name already in use"))?;

    info!(group_id = group.id, "student group created");
    Ok(group)
}

pub async fn update(
    db: &DatabaseConnection,
    principal: &Principal,
    id: i32,
    input: UpdateGroup,
) -> Result<student_group::Model, CoreError> {
    principal.require_admin()?;

    let existing = StudentGroup::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| CoreError::not_found(format!("student group {id} not found")))?;

    if let Some(Some(curator_id)) = input.curator_user_id {
        check_curator(db, curator_id).await?;
    }

    let mut active: student_group::ActiveModel = existing.into();
    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(curator_user_id) = input.curator_user_id {
        active.curator_user_id = Set(curator_user_id);
    }
    if let Some(faculty) = input.faculty {
        active.faculty = Set(faculty);
    }
    if let Some(admission_year) = input.admission_year {
        active.admission_year = Set(admission_year);
    }

    let group = active
        .update(db)
        .await
        .map_err(|e| CoreError::on_unique(e, "group name already in use"))?;

    Ok(group)
}

/// Delete a group and, by cascade, every student in it.
pub async fn delete(
    db: &DatabaseConnection,
    principal: &Principal,
    id: i32,
) -> Result<(), CoreError> {
    principal.require_admin()?;

    let result = StudentGroup::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(CoreError::not_found(format!("student group {id} not found")));
    }

    info!(group_id = id, "student group deleted");
    Ok(())
}
