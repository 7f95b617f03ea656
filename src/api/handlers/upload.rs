//! Handler for the multipart form posted by the web page.

use axum::{
    Json,
    extract::{
        Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
};
use tracing::debug;

use crate::api::dto::make::MakeResponse;
use crate::domain::Upload;
use crate::error::AppError;
use crate::state::AppState;

/// Publishes an uploaded file (or rewrites a submitted URL) and produces its links.
///
/// # Endpoint
///
/// `POST /` with `multipart/form-data`
///
/// # Form Fields
///
/// - `file` - The file to publish. Takes precedence when present.
/// - `url` - A GitHub blob or raw URL, used when no file is sent.
///
/// Other fields are ignored.
///
/// # Errors
///
/// - **400**: not a multipart body, no usable field, empty file, bad filename
/// - **413**: body above `MAX_UPLOAD_BYTES`
/// - **500**: GitHub or the shortener failed; the upstream text is included
pub async fn upload_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<MakeResponse>, AppError> {
    let mut multipart = multipart.map_err(|e| {
        AppError::invalid_input(format!("Expected a multipart form: {}", e.body_text()))
    })?;

    let mut url = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);

        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let content = field.bytes().await.map_err(multipart_error)?;
                debug!(%filename, bytes = content.len(), "Received upload");

                let upload = Upload::new(&filename, content.to_vec())?;
                let links = state.link_service.make_from_upload(upload).await?;

                return Ok(Json(links.into()));
            }
            Some("url") => {
                url = Some(field.text().await.map_err(multipart_error)?);
            }
            _ => {}
        }
    }

    let url = url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| AppError::invalid_input("Missing file or url field"))?;

    let links = state.link_service.make_from_url(url).await?;

    Ok(Json(links.into()))
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::invalid_input(format!("Invalid multipart body: {}", e.body_text()))
    }
}
