use axum::{extract::State, Json};
use campus_core::services::lookups;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::LookupBody;
use crate::AppState;

/// Event directions, sorted by name
#[utoipa::path(
    get,
    path = "/api/directions",
    responses((status = 200, description = "Directions", body = [LookupBody])),
    tag = "lookups"
)]
pub async fn list_directions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LookupBody>>, ApiError> {
    let items = lookups::directions(&state.db).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// Event levels, sorted by name
#[utoipa::path(
    get,
    path = "/api/levels",
    responses((status = 200, description = "Levels", body = [LookupBody])),
    tag = "lookups"
)]
pub async fn list_levels(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LookupBody>>, ApiError> {
    let items = lookups::levels(&state.db).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// Event formats, sorted by name
#[utoipa::path(
    get,
    path = "/api/formats",
    responses((status = 200, description = "Formats", body = [LookupBody])),
    tag = "lookups"
)]
pub async fn list_formats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LookupBody>>, ApiError> {
    let items = lookups::formats(&state.db).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// Participant categories, sorted by name
#[utoipa::path(
    get,
    path = "/api/participant-categories",
    responses((status = 200, description = "Participant categories", body = [LookupBody])),
    tag = "lookups"
)]
pub async fn list_participant_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LookupBody>>, ApiError> {
    let items = lookups::participant_categories(&state.db).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// Funding sources, sorted by name
#[utoipa::path(
    get,
    path = "/api/funding-sources",
    responses((status = 200, description = "Funding sources", body = [LookupBody])),
    tag = "lookups"
)]
pub async fn list_funding_sources(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LookupBody>>, ApiError> {
    let items = lookups::funding_sources(&state.db).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}
