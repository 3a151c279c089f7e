use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use campus_core::services::documents::{self, DocumentFilter};
use campus_core::{PageParams, Principal};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::*;
use crate::AppState;

const DEFAULT_LIMIT: u64 = 20;

/// List documents (visible to every authenticated user)
#[utoipa::path(
    get,
    path = "/api/documents",
    params(DocumentQuery),
    responses(
        (status = 200, description = "Page of documents", body = DocumentList),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    ),
    tag = "documents"
)]
pub async fn list_documents(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DocumentQuery>,
) -> Result<Json<DocumentList>, ApiError> {
    let params = PageParams::new(query.page, query.limit, DEFAULT_LIMIT);
    let filter = DocumentFilter {
        category: query.category,
        search: query.search,
    };
    let page = documents::list(&state.db, &filter, params).await?;
    Ok(Json(page.into()))
}

/// Get one document
#[utoipa::path(
    get,
    path = "/api/documents/{id}",
    params(("id" = i32, Path, description = "Document id")),
    responses(
        (status = 200, description = "Document", body = DocumentBody),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    tag = "documents"
)]
pub async fn get_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<DocumentBody>, ApiError> {
    let document = documents::get(&state.db, id).await?;
    Ok(Json(document.into()))
}

/// Register a document (administrator only)
#[utoipa::path(
    post,
    path = "/api/documents",
    request_body = CreateDocumentRequest,
    responses(
        (status = 201, description = "Document registered", body = DocumentBody),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 403, description = "Administrator role required", body = ErrorResponse)
    ),
    tag = "documents"
)]
pub async fn create_document(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<CreateDocumentRequest>,
) -> Result<(StatusCode, Json<DocumentBody>), ApiError> {
    let input = documents::CreateDocument {
        title: body.title,
        description: body.description,
        category: body.category,
        url: body.url,
    };
    let document = documents::create(&state.db, &principal, input).await?;
    Ok((StatusCode::CREATED, Json(document.into())))
}

/// Delete a document (administrator only)
#[utoipa::path(
    delete,
    path = "/api/documents/{id}",
    params(("id" = i32, Path, description = "Document id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    tag = "documents"
)]
pub async fn delete_document(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    documents::delete(&state.db, &principal, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
