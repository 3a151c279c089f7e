use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use campus_core::services::events::{self, EventFilter};
use campus_core::{PageParams, Principal};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::*;
use crate::AppState;

const DEFAULT_LIMIT: u64 = 10;

fn filter_from(q: &EventQuery) -> EventFilter {
    EventFilter {
        status: q.status,
        direction_id: q.direction_id,
        level_id: q.level_id,
        format_id: q.format_id,
        date_from: q.date_from,
        date_to: q.date_to,
        responsible: q.responsible.clone(),
        title: q.title.clone(),
        category_id: q.category_id,
        funding_source_id: q.funding_source_id,
        has_media_links: q.has_media_links,
    }
}

fn links_from(links: Vec<MediaLinkInput>) -> Vec<events::MediaLinkInput> {
    links
        .into_iter()
        .map(|l| events::MediaLinkInput { id: l.id, url: l.url })
        .collect()
}

fn media_from(media: Vec<EventMediaInput>) -> Vec<events::EventMediaInput> {
    media
        .into_iter()
        .map(|m| events::EventMediaInput {
            id: m.id,
            media_type: m.media_type,
            url: m.url,
            description: m.description,
        })
        .collect()
}

fn guests_from(guests: Vec<InvitedGuestInput>) -> Vec<events::InvitedGuestInput> {
    guests
        .into_iter()
        .map(|g| events::InvitedGuestInput {
            id: g.id,
            full_name: g.full_name,
            organization: g.organization,
            position: g.position,
        })
        .collect()
}

/// List events visible to the caller
#[utoipa::path(
    get,
    path = "/api/events",
    params(EventQuery),
    responses(
        (status = 200, description = "Page of events", body = EventList),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Query(query): Query<EventQuery>,
) -> Result<Json<EventList>, ApiError> {
    let params = PageParams::new(query.page, query.limit, DEFAULT_LIMIT);
    let page = events::list(&state.db, &principal, &filter_from(&query), params).await?;
    Ok(Json(page.into()))
}

/// Get one event with associations and children
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event", body = EventDetailsBody),
        (status = 404, description = "Not found or not visible", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<Json<EventDetailsBody>, ApiError> {
    let details = events::get(&state.db, &principal, id).await?;
    Ok(Json(details.into()))
}

/// Create an event owned by the caller
#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created", body = EventDetailsBody),
        (status = 400, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<EventDetailsBody>), ApiError> {
    let input = events::CreateEvent {
        title: body.title,
        direction_id: body.direction_id,
        level_id: body.level_id,
        format_id: body.format_id,
        start_date: body.start_date,
        end_date: body.end_date,
        location: body.location,
        address: body.address,
        participants_count: body.participants_count,
        has_foreigners: body.has_foreigners,
        foreigners_count: body.foreigners_count,
        has_minors: body.has_minors,
        minors_count: body.minors_count,
        description: body.description,
        responsible_full_name: body.responsible_full_name,
        responsible_phone: body.responsible_phone,
        responsible_email: body.responsible_email,
        funding_amount: body.funding_amount,
        category_ids: body.category_ids,
        funding_source_ids: body.funding_source_ids,
        media_links: links_from(body.media_links),
        event_media: media_from(body.event_media),
        invited_guests: guests_from(body.invited_guests),
    };

    let details = events::create(&state.db, &principal, input).await?;
    Ok((StatusCode::CREATED, Json(details.into())))
}

/// Update an event's fields, associations and children
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    params(("id" = i32, Path, description = "Event id")),
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "Updated event", body = EventDetailsBody),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Not found or not visible", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn update_event(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateEventRequest>,
) -> Result<Json<EventDetailsBody>, ApiError> {
    let input = events::UpdateEvent {
        title: body.title,
        direction_id: body.direction_id,
        level_id: body.level_id,
        format_id: body.format_id,
        start_date: body.start_date,
        end_date: body.end_date,
        location: body.location,
        address: body.address,
        participants_count: body.participants_count,
        has_foreigners: body.has_foreigners,
        foreigners_count: body.foreigners_count,
        has_minors: body.has_minors,
        minors_count: body.minors_count,
        description: body.description,
        responsible_full_name: body.responsible_full_name,
        responsible_phone: body.responsible_phone,
        responsible_email: body.responsible_email,
        funding_amount: body.funding_amount,
        category_ids: body.category_ids,
        funding_source_ids: body.funding_source_ids,
        media_links: body.media_links.map(links_from),
        event_media: body.event_media.map(media_from),
        invited_guests: body.invited_guests.map(guests_from),
    };

    let details = events::update(&state.db, &principal, id, input).await?;
    Ok(Json(details.into()))
}

/// Delete an event (administrator only)
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    events::delete(&state.db, &principal, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Change an event's status
#[utoipa::path(
    patch,
    path = "/api/events/{id}/status",
    params(("id" = i32, Path, description = "Event id")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Updated event", body = EventBody),
        (status = 403, description = "Transition not allowed", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn update_event_status(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<EventBody>, ApiError> {
    let event = events::update_status(&state.db, &principal, id, body.status).await?;
    Ok(Json(event.into()))
}
