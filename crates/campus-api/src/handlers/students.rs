use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use campus_core::services::students::{self, StudentFilter};
use campus_core::{PageParams, Principal};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::*;
use crate::AppState;

const DEFAULT_LIMIT: u64 = 10;

/// List students visible to the caller
#[utoipa::path(
    get,
    path = "/api/students",
    params(StudentQuery),
    responses(
        (status = 200, description = "Page of students", body = StudentList),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    ),
    tag = "students"
)]
pub async fn list_students(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Query(query): Query<StudentQuery>,
) -> Result<Json<StudentList>, ApiError> {
    let params = PageParams::new(query.page, query.limit, DEFAULT_LIMIT);
    let filter = StudentFilter {
        group_id: query.group_id,
        search: query.search,
        is_active: query.is_active,
    };
    let page = students::list(&state.db, &principal, &filter, params).await?;
    Ok(Json(page.into()))
}

/// Get one student with tags
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student", body = StudentDetailsBody),
        (status = 404, description = "Not found or not visible", body = ErrorResponse)
    ),
    tag = "students"
)]
pub async fn get_student(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<Json<StudentDetailsBody>, ApiError> {
    let details = students::get(&state.db, &principal, id).await?;
    Ok(Json(details.into()))
}

/// Create a student (administrator only)
#[utoipa::path(
    post,
    path = "/api/students",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created", body = StudentDetailsBody),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 409, description = "Email or card number in use", body = ErrorResponse)
    ),
    tag = "students"
)]
pub async fn create_student(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<StudentDetailsBody>), ApiError> {
    let input = students::CreateStudent {
        full_name: body.full_name,
        birth_date: body.birth_date,
        group_id: body.group_id,
        phone: body.phone,
        email: body.email,
        card_number: body.card_number,
        is_active: body.is_active,
        tag_ids: body.tag_ids,
    };
    let details = students::create(&state.db, &principal, input).await?;
    Ok((StatusCode::CREATED, Json(details.into())))
}

/// Update a student (administrator only)
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    params(("id" = i32, Path, description = "Student id")),
    request_body = UpdateStudentRequest,
    responses(
        (status = 200, description = "Updated student", body = StudentDetailsBody),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    tag = "students"
)]
pub async fn update_student(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateStudentRequest>,
) -> Result<Json<StudentDetailsBody>, ApiError> {
    let input = students::UpdateStudent {
        full_name: body.full_name,
        birth_date: body.birth_date,
        group_id: body.group_id,
        phone: body.phone,
        email: body.email,
        card_number: body.card_number,
        is_active: body.is_active,
        tag_ids: body.tag_ids,
    };
    let details = students::update(&state.db, &principal, id, input).await?;
    Ok(Json(details.into()))
}

/// Delete a student (administrator only)
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    tag = "students"
)]
pub async fn delete_student(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    students::delete(&state.db, &principal, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
