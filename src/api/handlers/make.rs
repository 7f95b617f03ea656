//! Handler for producing links from a GitHub URL.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::make::{MakeQuery, MakeResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Produces raw, short and QR links for a file hosted on GitHub.
///
/// # Endpoint
///
/// `GET /api/make?url=<github blob or raw URL>`
///
/// # Response
///
/// ```json
/// {
///   "original": "https://github.com/org/repo/blob/main/audio/a.mp3",
///   "raw": "https://raw.githubusercontent.com/org/repo/main/audio/a.mp3",
///   "short": "https://is.gd/abc123",
///   "qr": "https://api.qrserver.com/v1/create-qr-code/?size=500x500&data=https%3A%2F%2Fis.gd%2Fabc123"
/// }
/// ```
///
/// # Errors
///
/// - **400**: `url` missing or blank (`Missing url parameter`), or not a
///   GitHub URL (`Invalid GitHub URL`)
/// - **500**: the shortener failed; the upstream text is included
pub async fn make_handler(
    State(state): State<AppState>,
    Query(query): Query<MakeQuery>,
) -> Result<Json<MakeResponse>, AppError> {
    let url = query
        .url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| AppError::invalid_input("Missing url parameter"))?;

    let links = state.link_service.make_from_url(url).await?;

    Ok(Json(links.into()))
}
