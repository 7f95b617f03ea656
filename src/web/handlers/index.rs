//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::state::AppState;

/// Template for the home page.
///
/// Renders `templates/index.html`: a URL field, a file picker, and a result
/// area showing the raw link, short link and QR image.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub max_upload_mb: usize,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    IndexTemplate {
        max_upload_mb: state.max_upload_bytes / (1024 * 1024),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_renders_limit() {
        let html = IndexTemplate { max_upload_mb: 25 }.render().unwrap();
        assert!(html.contains("25 MB"));
        assert!(html.contains("/api/make?url="));
    }
}
