use axum::{extract::State, http::StatusCode, Extension, Json};
use campus_core::services::auth;
use campus_core::Principal;
use std::sync::Arc;
use tracing::debug;

use crate::error::ApiError;
use crate::models::*;
use crate::AppState;

/// Register a new curator account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = UserBody),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserBody>), ApiError> {
    let user = auth::register(
        &state.db,
        auth::RegisterInput {
            email: body.email,
            password: body.password,
            full_name: body.full_name,
            phone: body.phone,
            position: body.position,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Log in and receive a session token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session issued", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let session = auth::login(&state.db, &state.jwt_secret, &body.email, &body.password).await?;

    Ok(Json(LoginResponse {
        token: session.token,
        user: session.user.into(),
    }))
}

/// Current principal's profile
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Profile", body = UserBody),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn get_current_user(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<UserBody>, ApiError> {
    debug!(user_id = principal.id, "profile request");
    let user = auth::me(&state.db, &principal).await?;
    Ok(Json(user.into()))
}
