//! Publisher used when uploads are not configured.

use crate::domain::{AssetPublisher, Upload, UpstreamError};
use async_trait::async_trait;
use tracing::debug;

/// A publisher that rejects every upload.
///
/// Installed when `GITHUB_TOKEN` is not set, so the URL-only mode keeps
/// working while uploads fail with a clear message.
pub struct DisabledPublisher;

impl DisabledPublisher {
    pub fn new() -> Self {
        debug!("Using DisabledPublisher (uploads disabled)");
        Self
    }
}

impl Default for DisabledPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssetPublisher for DisabledPublisher {
    async fn publish(&self, _upload: &Upload) -> Result<String, UpstreamError> {
        Err(UpstreamError::PublishDisabled)
    }

    fn target(&self) -> Option<String> {
        None
    }
}
