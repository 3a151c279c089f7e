use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use campus_core::services::users::{self, UserFilter};
use campus_core::{PageParams, Principal};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::*;
use crate::AppState;

const DEFAULT_LIMIT: u64 = 20;

/// List user accounts (administrator only)
#[utoipa::path(
    get,
    path = "/api/users",
    params(UserQuery),
    responses(
        (status = 200, description = "Page of users", body = UserList),
        (status = 403, description = "Administrator role required", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Query(query): Query<UserQuery>,
) -> Result<Json<UserList>, ApiError> {
    let params = PageParams::new(query.page, query.limit, DEFAULT_LIMIT);
    let filter = UserFilter {
        role: query.role,
        is_active: query.is_active,
        search: query.search,
    };
    let page = users::list(&state.db, &principal, &filter, params).await?;
    Ok(Json(page.into()))
}

/// Get one user account (administrator only)
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User", body = UserBody),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<Json<UserBody>, ApiError> {
    let user = users::get(&state.db, &principal, id).await?;
    Ok(Json(user.into()))
}

/// Update a user account (administrator only)
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserBody),
        (status = 400, description = "Self-protection rule violated", body = ErrorResponse),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<UserBody>, ApiError> {
    let input = users::UpdateUser {
        full_name: body.full_name,
        phone: body.phone,
        position: body.position,
        role: body.role,
        is_active: body.is_active,
    };
    let user = users::update(&state.db, &principal, id, input).await?;
    Ok(Json(user.into()))
}

/// Delete a user account (administrator only, never your own)
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Cannot delete yourself", body = ErrorResponse),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    users::delete(&state.db, &principal, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
