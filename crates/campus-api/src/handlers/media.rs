use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use campus_core::blob::{classify_mime, MAX_UPLOAD_BYTES};
use std::sync::Arc;
use tracing::info;

use crate::error::ApiError;
use crate::models::*;
use crate::AppState;

/// Upload one media file (multipart, up to 50 MB, allow-listed MIME types)
#[utoipa::path(
    post,
    path = "/api/media/upload",
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Stored file", body = UploadResponse),
        (status = 400, description = "No file, oversized or disallowed type", body = ErrorResponse)
    ),
    tag = "media"
)]
pub async fn upload_media(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::validation(format!("malformed multipart body: {e}")))?
        .ok_or_else(|| ApiError::validation("no file in request"))?;

    let original_name = field.file_name().unwrap_or("upload").to_string();
    let content_type = field.content_type().unwrap_or("").to_string();

    let media_type = classify_mime(&content_type).ok_or_else(|| {
        ApiError::validation(format!("file type '{content_type}' is not allowed"))
    })?;

    let bytes = field
        .bytes()
        .await
        .map_err(|e| ApiError::validation(format!("failed to read upload: {e}")))?;
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(ApiError::validation("file exceeds the 50 MB limit"));
    }
    if bytes.is_empty() {
        return Err(ApiError::validation("uploaded file is empty"));
    }

    let size = bytes.len();
    let stored = state.blob_store.store(&original_name, bytes.to_vec()).await?;

    info!(name = %original_name, size, "media stored");
    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            url: stored.url,
            media_type,
            original_name,
        }),
    ))
}
