//! HTTP-facing error type.
//!
//! Every failure of the link pipeline ends up as an [`AppError`], which renders
//! as a flat JSON body:
//!
//! ```json
//! { "error": "Invalid GitHub URL" }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::UpstreamError;
use crate::utils::filename::FilenameError;
use crate::utils::github_url::InvalidGithubUrl;

/// JSON error body returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub enum AppError {
    /// Missing or unparsable URL/file. Rendered as 400.
    InvalidInput(String),
    /// GitHub rejected the upload, or uploads are not configured. Rendered as 500.
    UpstreamPublish(String),
    /// The shortening service answered with a non-success status. Rendered as 500.
    UpstreamShorten(String),
    /// Transport failure talking to any upstream. Rendered as 500.
    UpstreamNetwork(String),
    /// Request body above the configured limit. Rendered as 413.
    PayloadTooLarge(String),
    RouteNotFound,
    MethodNotAllowed,
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamPublish(_)
            | AppError::UpstreamShorten(_)
            | AppError::UpstreamNetwork(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::InvalidInput(message)
            | AppError::UpstreamPublish(message)
            | AppError::UpstreamShorten(message)
            | AppError::UpstreamNetwork(message)
            | AppError::PayloadTooLarge(message) => message,
            AppError::RouteNotFound => "Not found",
            AppError::MethodNotAllowed => "Method not allowed",
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<UpstreamError> for AppError {
    fn from(e: UpstreamError) -> Self {
        match e {
            UpstreamError::Publish { .. } | UpstreamError::PublishDisabled => {
                AppError::UpstreamPublish(e.to_string())
            }
            UpstreamError::Shorten { .. } => AppError::UpstreamShorten(e.to_string()),
            UpstreamError::Network(_) => AppError::UpstreamNetwork(e.to_string()),
        }
    }
}

impl From<InvalidGithubUrl> for AppError {
    fn from(e: InvalidGithubUrl) -> Self {
        AppError::InvalidInput(e.to_string())
    }
}

impl From<FilenameError> for AppError {
    fn from(e: FilenameError) -> Self {
        AppError::InvalidInput(e.to_string())
    }
}
