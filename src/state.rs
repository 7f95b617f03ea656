//! Shared, read-only application state.

use std::sync::Arc;

use crate::application::services::LinkService;

/// State injected into every handler.
///
/// Cloned per request; everything inside is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Largest accepted request body, in bytes.
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>, max_upload_bytes: usize) -> Self {
        Self {
            link_service,
            max_upload_bytes,
        }
    }
}
