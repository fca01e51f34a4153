//! Application route configuration.

use std::time::Duration;

use axum::{response::Json, routing::get, Router};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{example_routes, listing_routes};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::{API_PREFIX, OPENAPI_JSON_PATH, SWAGGER_UI_PATH};
use crate::types::HealthResponse;

/// Create the application router with all routes configured
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    let api = Router::new()
        .nest("/examples", example_routes())
        .nest("/listings", listing_routes());

    Router::new()
        // Health check endpoints
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        // Versioned resources
        .nest(API_PREFIX, api)
        // Global middleware
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Welcome to Property API"
}

/// Liveness check; the stores live in process so there is nothing else to probe
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
