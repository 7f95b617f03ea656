//! Client trait for publishing files to a repository.

use crate::domain::clients::UpstreamError;
use crate::domain::entities::Upload;
use async_trait::async_trait;

/// Publishes uploaded files and reports where their bytes can be fetched.
///
/// # Implementations
///
/// - [`crate::infrastructure::github::GithubContentsPublisher`] - GitHub Contents API
/// - [`crate::infrastructure::github::DisabledPublisher`] - Used when no token is configured
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetPublisher: Send + Sync {
    /// Creates or updates the file and returns its raw URL.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Publish`] when the repository host rejects the
    /// commit, [`UpstreamError::PublishDisabled`] when publishing is not
    /// configured, and [`UpstreamError::Network`] on transport failures.
    async fn publish(&self, upload: &Upload) -> Result<String, UpstreamError>;

    /// Human-readable publishing target, or `None` if publishing is disabled.
    ///
    /// Used by the health endpoint.
    fn target(&self) -> Option<String>;
}
