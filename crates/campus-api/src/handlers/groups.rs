use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use campus_core::services::groups::{self, GroupFilter};
use campus_core::{PageParams, Principal};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::*;
use crate::AppState;

const DEFAULT_LIMIT: u64 = 20;

/// List student groups visible to the caller
#[utoipa::path(
    get,
    path = "/api/groups",
    params(GroupQuery),
    responses(
        (status = 200, description = "Page of groups", body = GroupList),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    ),
    tag = "groups"
)]
pub async fn list_groups(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Query(query): Query<GroupQuery>,
) -> Result<Json<GroupList>, ApiError> {
    let params = PageParams::new(query.page, query.limit, DEFAULT_LIMIT);
    let filter = GroupFilter {
        curator_id: query.curator_id,
        search: query.search,
    };
    let page = groups::list(&state.db, &principal, &filter, params).await?;
    Ok(Json(page.into()))
}

/// Get one group with its student count
#[utoipa::path(
    get,
    path = "/api/groups/{id}",
    params(("id" = i32, Path, description = "Group id")),
    responses(
        (status = 200, description = "Group", body = GroupDetailsBody),
        (status = 404, description = "Not found or not visible", body = ErrorResponse)
    ),
    tag = "groups"
)]
pub async fn get_group(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<Json<GroupDetailsBody>, ApiError> {
    let details = groups::get(&state.db, &principal, id).await?;
    Ok(Json(GroupDetailsBody {
        group: details.group.into(),
        student_count: details.student_count,
    }))
}

/// Create a group (administrator only)
#[utoipa::path(
    post,
    path = "/api/groups",
    request_body = CreateGroupRequest,
    responses(
        (status = 201, description = "Group created", body = GroupBody),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 409, description = "Group name in use", body = ErrorResponse)
    ),
    tag = "groups"
)]
pub async fn create_group(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<GroupBody>), ApiError> {
    let input = groups::CreateGroup {
        name: body.name,
        curator_user_id: body.curator_user_id,
        faculty: body.faculty,
        admission_year: body.admission_year,
    };
    let group = groups::create(&state.db, &principal, input).await?;
    Ok((StatusCode::CREATED, Json(group.into())))
}

/// Update a group (administrator only)
#[utoipa::path(
    put,
    path = "/api/groups/{id}",
    params(("id" = i32, Path, description = "Group id")),
    request_body = UpdateGroupRequest,
    responses(
        (status = 200, description = "Updated group", body = GroupBody),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    tag = "groups"
)]
pub async fn update_group(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateGroupRequest>,
) -> Result<Json<GroupBody>, ApiError> {
    let input = groups::UpdateGroup {
        name: body.name,
        curator_user_id: body.curator_user_id,
        faculty: body.faculty,
        admission_year: body.admission_year,
    };
    let group = groups::update(&state.db, &principal, id, input).await?;
    Ok(Json(group.into()))
}

/// Delete a group and its students (administrator only)
#[utoipa::path(
    delete,
    path = "/api/groups/{id}",
    params(("id" = i32, Path, description = "Group id")),
    responses(
        (status = 204, description = "Deleted, students cascade"),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    tag = "groups"
)]
pub async fn delete_group(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    groups::delete(&state.db, &principal, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
