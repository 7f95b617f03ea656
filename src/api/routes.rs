//! API route configuration.

use crate::api::handlers::make_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET /make?url=...` - Links for a file already on GitHub
pub fn routes() -> Router<AppState> {
    Router::new().route("/make", get(make_handler))
}
