//! REST API for the campus events backend
//!
//! Public routes (health, register, login) and a protected router behind
//! the JWT middleware, plus Swagger UI. Handlers stay thin; everything
//! role-sensitive happens in `campus-core`.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    middleware as axum_middleware,
    routing::{get, patch, post},
    Router,
};
use campus_core::blob::{BlobStore, MAX_UPLOAD_BYTES};
use sea_orm::DatabaseConnection;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across handlers
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: Vec<u8>,
    pub blob_store: Arc<dyn BlobStore>,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Campus Events API",
        version = "0.1.0",
        description = "Administrative backend for curator-run student events"
    ),
    paths(
        handlers::health_check,
        handlers::register,
        handlers::login,
        handlers::get_current_user,
        handlers::list_events,
        handlers::get_event,
        handlers::create_event,
        handlers::update_event,
        handlers::delete_event,
        handlers::update_event_status,
        handlers::list_students,
        handlers::get_student,
        handlers::create_student,
        handlers::update_student,
        handlers::delete_student,
        handlers::list_groups,
        handlers::get_group,
        handlers::create_group,
        handlers::update_group,
        handlers::delete_group,
        handlers::list_reports,
        handlers::report_stats,
        handlers::get_report,
        handlers::create_report,
        handlers::delete_report,
        handlers::list_documents,
        handlers::get_document,
        handlers::create_document,
        handlers::delete_document,
        handlers::upload_media,
        handlers::list_users,
        handlers::get_user,
        handlers::update_user,
        handlers::delete_user,
        handlers::assign_event,
        handlers::list_directions,
        handlers::list_levels,
        handlers::list_formats,
        handlers::list_participant_categories,
        handlers::list_funding_sources,
    ),
    components(
        schemas(
            models::ErrorResponse,
            models::FieldErrorBody,
            models::HealthResponse,
            models::RegisterRequest,
            models::LoginRequest,
            models::LoginResponse,
            models::UserBody,
            models::UserList,
            models::UpdateUserRequest,
            models::EventBody,
            models::EventDetailsBody,
            models::EventList,
            models::MediaLinkBody,
            models::EventMediaBody,
            models::InvitedGuestBody,
            models::MediaLinkInput,
            models::EventMediaInput,
            models::InvitedGuestInput,
            models::CreateEventRequest,
            models::UpdateEventRequest,
            models::UpdateStatusRequest,
            models::StudentBody,
            models::StudentDetailsBody,
            models::StudentList,
            models::TagBody,
            models::CreateStudentRequest,
            models::UpdateStudentRequest,
            models::GroupBody,
            models::GroupDetailsBody,
            models::GroupList,
            models::CreateGroupRequest,
            models::UpdateGroupRequest,
            models::ReportBody,
            models::ReportDetailsBody,
            models::ReportList,
            models::CreateReportRequest,
            models::ReportStatsBody,
            models::DocumentBody,
            models::DocumentList,
            models::CreateDocumentRequest,
            models::UploadResponse,
            models::LookupBody,
            models::AssignEventRequest,
            models::AssignEventTemplate,
            models::AssignEventResponse,
            models::AssignedEventBody,
            models::AssignFailureBody,
        )
    ),
    tags(
        (name = "auth", description = "Registration, login and session info"),
        (name = "events", description = "Event management"),
        (name = "students", description = "Student roster"),
        (name = "groups", description = "Student groups"),
        (name = "reports", description = "Curator reports"),
        (name = "documents", description = "Institution-wide documents"),
        (name = "media", description = "Media uploads"),
        (name = "users", description = "User administration"),
        (name = "admin", description = "Administrative bulk operations"),
        (name = "lookups", description = "Reference data"),
        (name = "system", description = "Health and info")
    )
)]
struct ApiDoc;

/// API server configuration
pub struct ApiServerConfig {
    pub bind_addr: SocketAddr,
    pub enable_cors: bool,
    pub jwt_secret: String,
}

/// API server
pub struct ApiServer {
    config: ApiServerConfig,
    state: Arc<AppState>,
}

impl ApiServer {
    pub fn new(
        config: ApiServerConfig,
        db: DatabaseConnection,
        blob_store: Arc<dyn BlobStore>,
    ) -> Self {
        let state = Arc::new(AppState {
            db,
            jwt_secret: config.jwt_secret.as_bytes().to_vec(),
            blob_store,
        });

        Self { config, state }
    }

    /// Build the router with all routes
    pub fn build_router(&self) -> Router {
        let api_doc = ApiDoc::openapi();
        let jwt_state = Arc::new(middleware::JwtState::new(
            self.config.jwt_secret.as_bytes(),
        ));

        let public_router = Router::new()
            .route("/api/health", get(handlers::health_check))
            .route("/api/auth/register", post(handlers::register))
            .route("/api/auth/login", post(handlers::login))
            .with_state(self.state.clone());

        let protected_router = Router::new()
            .route("/api/auth/me", get(handlers::get_current_user))
            .route(
                "/api/events",
                get(handlers::list_events).post(handlers::create_event),
            )
            .route(
                "/api/events/{id}",
                get(handlers::get_event)
                    .put(handlers::update_event)
                    .delete(handlers::delete_event),
            )
            .route(
                "/api/events/{id}/status",
                patch(handlers::update_event_status),
            )
            .route(
                "/api/students",
                get(handlers::list_students).post(handlers::create_student),
            )
            .route(
                "/api/students/{id}",
                get(handlers::get_student)
                    .put(handlers::update_student)
                    .delete(handlers::delete_student),
            )
            .route(
                "/api/groups",
                get(handlers::list_groups).post(handlers::create_group),
            )
            .route(
                "/api/groups/{id}",
                get(handlers::get_group)
                    .put(handlers::update_group)
                    .delete(handlers::delete_group),
            )
            .route(
                "/api/curator-reports",
                get(handlers::list_reports).post(handlers::create_report),
            )
            .route("/api/curator-reports/stats", get(handlers::report_stats))
            .route(
                "/api/curator-reports/{id}",
                get(handlers::get_report).delete(handlers::delete_report),
            )
            .route(
                "/api/documents",
                get(handlers::list_documents).post(handlers::create_document),
            )
            .route(
                "/api/documents/{id}",
                get(handlers::get_document).delete(handlers::delete_document),
            )
            .route(
                "/api/media/upload",
                post(handlers::upload_media)
                    .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 64 * 1024)),
            )
            .route("/api/users", get(handlers::list_users))
            .route(
                "/api/users/{id}",
                get(handlers::get_user)
                    .put(handlers::update_user)
                    .delete(handlers::delete_user),
            )
            .route("/api/admin/assign-event", post(handlers::assign_event))
            .route("/api/directions", get(handlers::list_directions))
            .route("/api/levels", get(handlers::list_levels))
            .route("/api/formats", get(handlers::list_formats))
            .route(
                "/api/participant-categories",
                get(handlers::list_participant_categories),
            )
            .route("/api/funding-sources", get(handlers::list_funding_sources))
            .with_state(self.state.clone())
            .layer(axum_middleware::from_fn_with_state(
                jwt_state.clone(),
                middleware::require_auth,
            ));

        let api_router = public_router.merge(protected_router);

        let router = Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api/openapi.json", api_doc))
            .merge(api_router);

        let mut router = router.layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::PATCH,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                .allow_origin(tower_http::cors::AllowOrigin::predicate(
                    |origin: &HeaderValue, _| {
                        let origin = origin.to_str().unwrap_or("");
                        origin.starts_with("http://localhost:")
                            || origin.starts_with("http://127.0.0.1:")
                            || origin.starts_with("https://localhost:")
                            || origin.starts_with("https://127.0.0.1:")
                    },
                ));
            router = router.layer(cors);
        }

        router
    }

    /// Bind and serve until the process shuts down.
    pub async fn start(self) -> Result<(), anyhow::Error> {
        let router = self.build_router();

        info!("Starting API server on {}", self.config.bind_addr);
        info!(
            "OpenAPI spec: http://{}/api/openapi.json",
            self.config.bind_addr
        );
        info!("Swagger UI: http://{}/swagger-ui", self.config.bind_addr);

        let listener = tokio::net::TcpListener::bind(self.config.bind_addr).await?;
        axum::serve(listener, router)
            .await
            .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_spec_generates() {
        let _api_doc = ApiDoc::openapi();
    }
}
