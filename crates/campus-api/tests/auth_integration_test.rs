//! Integration tests for the HTTP surface: auth round-trip, error bodies,
//! and a protected-resource flow

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use campus_api::{models::*, ApiServer, ApiServerConfig};
use campus_core::blob::FsBlobStore;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

async fn create_test_db() -> DatabaseConnection {
    let db = campus_db::connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");
    campus_db::migrate(&db).await.expect("Failed to run migrations");
    db
}

fn create_test_server(db: DatabaseConnection) -> ApiServer {
    let config = ApiServerConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        enable_cors: true,
        jwt_secret: "test-secret".to_string(),
    };
    let blob_store = Arc::new(FsBlobStore::new(
        std::env::temp_dir().join("campus-api-test-uploads"),
        "/uploads",
    ));
    ApiServer::new(config, db, blob_store)
}

fn json_request(uri: &str, method: &str, body: Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn registration_creates_a_curator() {
    let db = create_test_db().await;
    let app = create_test_server(db).build_router();

    let response = app
        .oneshot(json_request(
            "/api/auth/register",
            "POST",
            json!({
                "email": "test@campus.test",
                "password": "secret1",
                "fullName": "Test User"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["email"], "test@campus.test");
    assert_eq!(body["fullName"], "Test User");
    assert_eq!(body["role"], "curator");
    assert_eq!(body["isActive"], true);
    assert!(body.get("passwordHash").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn duplicate_email_registration_conflicts() {
    let db = create_test_db().await;
    let server = create_test_server(db);

    let payload = json!({
        "email": "dup@campus.test",
        "password": "secret1",
        "fullName": "Dup"
    });

    let response = server
        .build_router()
        .oneshot(json_request("/api/auth/register", "POST", payload.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = server
        .build_router()
        .oneshot(json_request("/api/auth/register", "POST", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let error: ErrorResponse = serde_json::from_value(body_json(response).await).unwrap();
    assert!(error.message.contains("already registered"));
}

#[tokio::test]
async fn short_password_yields_field_errors() {
    let db = create_test_db().await;
    let app = create_test_server(db).build_router();

    let response = app
        .oneshot(json_request(
            "/api/auth/register",
            "POST",
            json!({
                "email": "short@campus.test",
                "password": "abc",
                "fullName": "Short"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_value(body_json(response).await).unwrap();
    assert!(error.errors.iter().any(|e| e.field == "password"));
}

#[tokio::test]
async fn login_issues_a_usable_token() {
    let db = create_test_db().await;
    let server = create_test_server(db);

    server
        .build_router()
        .oneshot(json_request(
            "/api/auth/register",
            "POST",
            json!({
                "email": "login@campus.test",
                "password": "secret1",
                "fullName": "Login User"
            }),
        ))
        .await
        .unwrap();

    let response = server
        .build_router()
        .oneshot(json_request(
            "/api/auth/login",
            "POST",
            json!({ "email": "login@campus.test", "password": "secret1" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let token = body["token"].as_str().unwrap().to_string();
    assert!(!token.is_empty());

    // The token opens the protected profile route
    let response = server
        .build_router()
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .header("Authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let me = body_json(response).await;
    assert_eq!(me["email"], "login@campus.test");
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let db = create_test_db().await;
    let server = create_test_server(db);

    server
        .build_router()
        .oneshot(json_request(
            "/api/auth/register",
            "POST",
            json!({
                "email": "w@campus.test",
                "password": "secret1",
                "fullName": "W"
            }),
        ))
        .await
        .unwrap();

    let response = server
        .build_router()
        .oneshot(json_request(
            "/api/auth/login",
            "POST",
            json!({ "email": "w@campus.test", "password": "wrong-one" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_routes_reject_anonymous_requests() {
    let db = create_test_db().await;
    let app = create_test_server(db).build_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/events")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn event_round_trip_over_http() {
    let db = create_test_db().await;
    let server = create_test_server(db);

    server
        .build_router()
        .oneshot(json_request(
            "/api/auth/register",
            "POST",
            json!({
                "email": "events@campus.test",
                "password": "secret1",
                "fullName": "Event Curator"
            }),
        ))
        .await
        .unwrap();

    let response = server
        .build_router()
        .oneshot(json_request(
            "/api/auth/login",
            "POST",
            json!({ "email": "events@campus.test", "password": "secret1" }),
        ))
        .await
        .unwrap();
    let token = body_json(response).await["token"].as_str().unwrap().to_string();

    // Too-short description is rejected with a field error
    let response = server
        .build_router()
        .oneshot(
            Request::builder()
                .uri("/api/events")
                .method("POST")
                .header("content-type", "application/json")
                .header("Authorization", format!("Bearer {token}"))
                .body(Body::from(
                    json!({
                        "title": "HTTP event",
                        "startDate": "2026-09-01",
                        "description": "too short",
                        "responsibleFullName": "Someone"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // A valid payload creates and reads back
    let response = server
        .build_router()
        .oneshot(
            Request::builder()
                .uri("/api/events")
                .method("POST")
                .header("content-type", "application/json")
                .header("Authorization", format!("Bearer {token}"))
                .body(Body::from(
                    json!({
                        "title": "HTTP event",
                        "startDate": "2026-09-01",
                        "description": "d".repeat(120),
                        "responsibleFullName": "Someone",
                        "mediaLinks": [{ "url": "https://example.org/post" }]
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["status"], "Planned");
    assert_eq!(created["mediaLinks"].as_array().unwrap().len(), 1);

    let response = server
        .build_router()
        .oneshot(
            Request::builder()
                .uri(format!("/api/events/{id}"))
                .header("Authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["title"], "HTTP event");
}

#[tokio::test]
async fn curator_cannot_delete_events_over_http() {
    let db = create_test_db().await;
    let server = create_test_server(db);

    server
        .build_router()
        .oneshot(json_request(
            "/api/auth/register",
            "POST",
            json!({
                "email": "nodelete@campus.test",
                "password": "secret1",
                "fullName": "No Delete"
            }),
        ))
        .await
        .unwrap();
    let response = server
        .build_router()
        .oneshot(json_request(
            "/api/auth/login",
            "POST",
            json!({ "email": "nodelete@campus.test", "password": "secret1" }),
        ))
        .await
        .unwrap();
    let token = body_json(response).await["token"].as_str().unwrap().to_string();

    let response = server
        .build_router()
        .oneshot(
            Request::builder()
                .uri("/api/events")
                .method("POST")
                .header("content-type", "application/json")
                .header("Authorization", format!("Bearer {token}"))
                .body(Body::from(
                    json!({
                        "title": "Keep",
                        "startDate": "2026-09-01",
                        "description": "d".repeat(120),
                        "responsibleFullName": "Someone"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = server
        .build_router()
        .oneshot(
            Request::builder()
                .uri(format!("/api/events/{id}"))
                .method("DELETE")
                .header("Authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
