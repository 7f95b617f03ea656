//! Top-level router configuration combining the page and the API.
//!
//! # Route Structure
//!
//! - `GET  /`           - HTML page
//! - `POST /`           - Multipart upload (`file`) or URL (`url`) form
//! - `GET  /api/make`   - Links for a GitHub URL (`?url=`)
//! - `GET  /health`     - Integration status
//!
//! Unknown paths answer 404 and unsupported methods 405, both as JSON.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Body limit** - `MAX_UPLOAD_BYTES` for every request body
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{
    health_handler, method_not_allowed_handler, not_found_handler, upload_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web::handlers::index_handler;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the router with all routes and middleware, without path normalization.
///
/// Used directly by tests; the server wraps it with [`app_router`].
pub fn router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route("/", get(index_handler).post(upload_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .layer(body_limit)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router, trimming trailing slashes before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
