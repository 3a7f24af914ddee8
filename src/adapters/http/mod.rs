//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the public surface: the model API under `/api/v1`,
//! a liveness probe at `/health`, and an enveloped 404 for anything else.

pub mod models;

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;

// Re-export key types for convenience
pub use models::{model_routes, ModelAppState};

/// Prefix every model route is mounted under.
pub const API_PREFIX: &str = "/api/v1";

/// Builds the full application router with middleware.
pub fn app_router(state: ModelAppState, server: &ServerConfig) -> Router {
    Router::new()
        .nest(API_PREFIX, model_routes(state))
        .route("/health", get(models::health))
        .fallback(models::route_not_found)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// Any origin unless `cors_origins` narrows it down.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([header::CONTENT_DISPOSITION])
}
