//! Route table of the config API.

use std::sync::Arc;

use axum::Router;
use axum::extract::Extension;
use axum::routing::{get, post};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use super::cors::build_cors_layer;
use super::handlers;
use crate::config::CorsConfig;
use crate::domain::service::OrgConfigService;

/// Upper bound on request bodies (1 MiB).
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Build the API router with CORS, request tracing and a body size limit.
#[must_use]
pub fn router(service: Arc<OrgConfigService>, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api", get(handlers::api_index))
        .route("/api/add-config", post(handlers::add_config))
        .route("/api/customer-config", get(handlers::get_customer_config))
        .route(
            "/api/upload-local-configs",
            post(handlers::upload_local_configs),
        )
        .layer(Extension(service))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(cors))
}
