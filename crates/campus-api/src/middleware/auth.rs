//! JWT authentication middleware
//!
//! Extracts the bearer token from the Authorization header, validates it,
//! and injects the resolved `Principal` into request extensions. Handlers
//! never parse tokens themselves.

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};
use campus_auth::jwt::JwtValidator;
use campus_core::Principal;
use std::sync::Arc;

use crate::models::ErrorResponse;

/// JWT validation state shared across middleware instances
#[derive(Clone)]
pub struct JwtState {
    pub validator: Arc<JwtValidator>,
}

impl JwtState {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            validator: Arc::new(JwtValidator::new(secret)),
        }
    }
}

fn unauthorized(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            message: message.to_string(),
            errors: Vec::new(),
        }),
    )
}

/// Require a valid session token; 401 on anything less.
pub async fn require_auth(
    state: axum::extract::State<Arc<JwtState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| unauthorized("missing Authorization header"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized("expected 'Bearer <token>'"))?;

    let claims = state
        .validator
        .validate(token)
        .map_err(|_| unauthorized("invalid or expired token"))?;

    request
        .extensions_mut()
        .insert(Principal::new(claims.sub, claims.role));

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, middleware, routing::get, Extension, Router};
    use campus_auth::jwt::JwtClaims;
    use campus_db::entities::user::UserRole;
    use chrono::Duration;
    use tower::ServiceExt;

    async fn protected_handler(Extension(principal): Extension<Principal>) -> String {
        format!("{}:{}", principal.id, principal.role.as_str())
    }

    fn test_app(secret: &[u8]) -> Router {
        let jwt_state = Arc::new(JwtState::new(secret));
        Router::new()
            .route("/protected", get(protected_handler))
            .layer(middleware::from_fn_with_state(
                jwt_state.clone(),
                require_auth,
            ))
            .with_state(jwt_state)
    }

    const SECRET: &[u8] = b"middleware-test-secret";

    #[tokio::test]
    async fn valid_token_resolves_the_principal() {
        let app = test_app(SECRET);
        let claims = JwtClaims::session(42, "c@campus.test".to_string(), UserRole::Curator);
        let token = JwtValidator::encode(SECRET, &claims).unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/protected")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"42:curator");
    }

    #[tokio::test]
    async fn missing_header_is_401() {
        let app = test_app(SECRET);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/protected")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn non_bearer_scheme_is_401() {
        let app = test_app(SECRET);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/protected")
                    .header("Authorization", "Basic dXNlcjpwYXNz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn expired_token_is_401() {
        let app = test_app(SECRET);
        let claims = JwtClaims::new(
            7,
            "old@campus.test".to_string(),
            UserRole::Curator,
            Duration::hours(-3),
        );
        let token = JwtValidator::encode(SECRET, &claims).unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/protected")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn wrong_secret_is_401() {
        let app = test_app(SECRET);
        let claims = JwtClaims::session(1, "a@campus.test".to_string(), UserRole::Administrator);
        let token = JwtValidator::encode(b"other-secret", &claims).unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/protected")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
