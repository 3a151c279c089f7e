//! User account administration
//!
//! Administrator-only. An administrator cannot strip their own role,
//! deactivate themselves, or delete their own account.

use campus_db::entities::{prelude::*, user, user::UserRole};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::info;

use crate::error::{CoreError, FieldError};
use crate::pagination::{paginate, Page, PageParams};
use crate::scope::Principal;

#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub full_name: Option<String>,
    pub phone: Option<Option<String>>,
    pub position: Option<Option<String>>,
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
}

pub async fn list(
    db: &DatabaseConnection,
    principal: &Principal,
    filter: &UserFilter,
    params: PageParams,
) -> Result<Page<user::Model>, CoreError> {
    principal.require_admin()?;

    let mut cond = Condition::all();
    if let Some(role) = filter.role {
        cond = cond.add(user::Column::Role.eq(role));
    }
    if let Some(active) = filter.is_active {
        cond = cond.add(user::Column::IsActive.eq(active));
    }
    if let Some(ref needle) = filter.search {
        cond = cond.add(
            Condition::any()
                .add(user::Column::FullName.contains(needle))
                .add(user::Column::Email.contains(needle)),
        );
    }

    let select = User::find()
        .filter(cond)
        .order_by_asc(user::Column::FullName)
        .order_by_asc(user::Column::Id);

    paginate(select, db, params).await
}

pub async fn get(
    db: &DatabaseConnection,
    principal: &Principal,
    id: i32,
) -> Result<user::Model, CoreError> {
    principal.require_admin()?;

    User::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| CoreError::not_found(format!("user {id} not found")))
}

pub async fn update(
    db: &DatabaseConnection,
    principal: &Principal,
    id: i32,
    input: UpdateUser,
) -> Result<user::Model, CoreError> {
    principal.require_admin()?;

    if id == principal.id {
        if matches!(input.role, Some(role) if role != UserRole::Administrator) {
            return Err(CoreError::validation_fields(
                "user validation failed",
                vec![FieldError::new("role", "cannot change your own role")],
            ));
        }
        if input.is_active == Some(false) {
            return Err(CoreError::validation_fields(
                "user validation failed",
                vec![FieldError::new("isActive", "cannot deactivate yourself")],
            ));
        }
    }

    let existing = User::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| CoreError::not_found(format!("user {id} not found")))?;

    let mut active: user::ActiveModel = existing.into();
    if let Some(full_name) = input.full_name {
        active.full_name = Set(full_name);
    }
    if let Some(phone) = input.phone {
        active.phone = Set(phone);
    }
    if let Some(position) = input.position {
        active.position = Set(position);
    }
    if let Some(role) = input.role {
        active.role = Set(role);
    }
    if let Some(is_active) = input.is_active {
        active.is_active = Set(is_active);
    }
    active.updated_at = Set(Utc::now());

    let user = active.update(db).await?;
    info!(user_id = user.id, "user updated");
    Ok(user)
}

pub async fn delete(
    db: &DatabaseConnection,
    principal: &Principal,
    id: i32,
) -> Result<(), CoreError> {
    principal.require_admin()?;

    if id == principal.id {
        return Err(CoreError::validation("cannot delete your own account"));
    }

    let result = User::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(CoreError::not_found(format!("user {id} not found")));
    }

    info!(user_id = id, "user deleted");
    Ok(())
}
