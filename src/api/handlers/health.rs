//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with integration checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// No upstream is contacted. Disabled uploads are reported but do not make
/// the service unhealthy: the URL-only mode keeps working.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "publisher": { "status": "ok", "message": "alice/audio@main:/audio" },
///     "shortener": { "status": "ok", "message": "https://is.gd/create.php" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let publisher = match state.link_service.publisher_target() {
        Some(target) => CheckStatus {
            status: "ok".to_string(),
            message: Some(target),
        },
        None => CheckStatus {
            status: "disabled".to_string(),
            message: Some("GITHUB_TOKEN is not configured".to_string()),
        },
    };

    let shortener = CheckStatus {
        status: "ok".to_string(),
        message: Some(state.link_service.shortener_endpoint()),
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            publisher,
            shortener,
        },
    })
}
