use axum::{extract::State, Extension, Json};
use campus_core::services::assign::{self, EventTemplate};
use campus_core::Principal;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::*;
use crate::AppState;

/// Create one event per target curator from a shared template
#[utoipa::path(
    post,
    path = "/api/admin/assign-event",
    request_body = AssignEventRequest,
    responses(
        (status = 200, description = "Per-target outcome", body = AssignEventResponse),
        (status = 400, description = "Invalid targets or template", body = ErrorResponse),
        (status = 403, description = "Administrator role required", body = ErrorResponse)
    ),
    tag = "admin"
)]
pub async fn assign_event(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<AssignEventRequest>,
) -> Result<Json<AssignEventResponse>, ApiError> {
    let t = body.event;
    let template = EventTemplate {
        title: t.title,
        direction_id: t.direction_id,
        level_id: t.level_id,
        format_id: t.format_id,
        start_date: t.start_date,
        end_date: t.end_date,
        location: t.location,
        address: t.address,
        participants_count: t.participants_count,
        has_foreigners: t.has_foreigners,
        foreigners_count: t.foreigners_count,
        has_minors: t.has_minors,
        minors_count: t.minors_count,
        description: t.description,
        responsible_full_name: t.responsible_full_name,
        responsible_phone: t.responsible_phone,
        responsible_email: t.responsible_email,
        funding_amount: t.funding_amount,
        category_ids: t.category_ids,
        funding_source_ids: t.funding_source_ids,
        media_links: Vec::new(),
        event_media: Vec::new(),
        invited_guests: Vec::new(),
    };

    let outcome = assign::assign_event(&state.db, &principal, body.curator_ids, template).await?;

    Ok(Json(AssignEventResponse {
        created: outcome.created.into_iter().map(Into::into).collect(),
        failed: outcome.failed.into_iter().map(Into::into).collect(),
    }))
}
