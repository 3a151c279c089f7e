use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use campus_core::services::reports::{self, ReportFilter};
use campus_core::{PageParams, Principal};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::*;
use crate::AppState;

const DEFAULT_LIMIT: u64 = 20;

/// List reports visible to the caller
#[utoipa::path(
    get,
    path = "/api/curator-reports",
    params(ReportQuery),
    responses(
        (status = 200, description = "Page of reports", body = ReportList),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    ),
    tag = "reports"
)]
pub async fn list_reports(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<ReportList>, ApiError> {
    let params = PageParams::new(query.page, query.limit, DEFAULT_LIMIT);
    let filter = ReportFilter {
        curator_id: query.curator_id,
        date_from: query.date_from,
        date_to: query.date_to,
    };
    let page = reports::list(&state.db, &principal, &filter, params).await?;
    Ok(Json(page.into()))
}

/// Aggregate report statistics, caller-scoped
#[utoipa::path(
    get,
    path = "/api/curator-reports/stats",
    params(("curatorId" = Option<i32>, Query, description = "Admin-only narrowing filter")),
    responses(
        (status = 200, description = "Stats", body = ReportStatsBody)
    ),
    tag = "reports"
)]
pub async fn report_stats(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<ReportStatsBody>, ApiError> {
    let stats = reports::stats(&state.db, &principal, query.curator_id).await?;
    Ok(Json(stats.into()))
}

/// Get one report with participants
#[utoipa::path(
    get,
    path = "/api/curator-reports/{id}",
    params(("id" = i32, Path, description = "Report id")),
    responses(
        (status = 200, description = "Report", body = ReportDetailsBody),
        (status = 404, description = "Not found or not visible", body = ErrorResponse)
    ),
    tag = "reports"
)]
pub async fn get_report(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<Json<ReportDetailsBody>, ApiError> {
    let details = reports::get(&state.db, &principal, id).await?;
    Ok(Json(details.into()))
}

/// File a report for the calling curator
#[utoipa::path(
    post,
    path = "/api/curator-reports",
    request_body = CreateReportRequest,
    responses(
        (status = 201, description = "Report filed", body = ReportDetailsBody),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Linked event not found", body = ErrorResponse)
    ),
    tag = "reports"
)]
pub async fn create_report(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<CreateReportRequest>,
) -> Result<(StatusCode, Json<ReportDetailsBody>), ApiError> {
    let input = reports::CreateReport {
        title: body.title,
        report_date: body.report_date,
        location: body.location,
        direction: body.direction,
        guest_info: body.guest_info,
        foreigners_count: body.foreigners_count,
        minors_count: body.minors_count,
        duration_hours: body.duration_hours,
        media_refs: body.media_refs,
        event_id: body.event_id,
        participant_student_ids: body.participant_student_ids,
    };
    let details = reports::create(&state.db, &principal, input).await?;
    Ok((StatusCode::CREATED, Json(details.into())))
}

/// Delete a report (owner or administrator)
#[utoipa::path(
    delete,
    path = "/api/curator-reports/{id}",
    params(("id" = i32, Path, description = "Report id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found or not visible", body = ErrorResponse)
    ),
    tag = "reports"
)]
pub async fn delete_report(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    reports::delete(&state.db, &principal, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
