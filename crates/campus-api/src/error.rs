//! Mapping from core errors to HTTP responses
//!
//! One status code per error class; internal detail is logged server-side
//! and replaced with a generic message on the wire.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use campus_core::CoreError;
use tracing::error;

use crate::models::{ErrorResponse, FieldErrorBody};

pub struct ApiError(pub CoreError);

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self(CoreError::validation(message))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            CoreError::Validation { message, errors } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    message,
                    errors: errors
                        .into_iter()
                        .map(|e| FieldErrorBody {
                            field: e.field,
                            message: e.message,
                        })
                        .collect(),
                },
            ),
            CoreError::Unauthorized(message) => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse {
                    message,
                    errors: Vec::new(),
                },
            ),
            CoreError::Forbidden(message) => (
                StatusCode::FORBIDDEN,
                ErrorResponse {
                    message,
                    errors: Vec::new(),
                },
            ),
            CoreError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    message,
                    errors: Vec::new(),
                },
            ),
            CoreError::Conflict(message) => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    message,
                    errors: Vec::new(),
                },
            ),
            CoreError::Database(err) => {
                error!(error = %err, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        message: "internal server error".to_string(),
                        errors: Vec::new(),
                    },
                )
            }
            CoreError::Internal(detail) => {
                error!(error = %detail, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        message: "internal server error".to_string(),
                        errors: Vec::new(),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::FieldError;

    #[test]
    fn validation_maps_to_400_with_field_errors() {
        let err = ApiError(CoreError::validation_fields(
            "event validation failed",
            vec![FieldError::new("description", "too short")],
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_detail_is_not_leaked() {
        let err = ApiError(CoreError::Internal("secret connection string".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
