//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{middleware, response::IntoResponse, routing::get, Router};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::{optional_auth_middleware, track_metrics};
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes(state.clone()))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// API v1 routes
fn api_routes(state: AppState) -> Router<AppState> {
    Router::new().nest("/servers", server_routes(state))
}

/// Server routes (session optional; anonymous viewers are redirected)
fn server_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/{server_id}/sidebar",
            get(handlers::sidebar::get_server_sidebar),
        )
        .route_layer(middleware::from_fn_with_state(state, optional_auth_middleware))
}
