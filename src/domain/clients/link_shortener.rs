//! Client trait for the URL-shortening service.

use crate::domain::clients::UpstreamError;
use async_trait::async_trait;

/// Produces a short redirect URL for a long one.
///
/// # Implementations
///
/// - [`crate::infrastructure::shortener::HttpLinkShortener`] - is.gd compatible endpoint
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkShortener: Send + Sync {
    /// Returns the service's answer verbatim, trimmed of surrounding whitespace.
    ///
    /// The answer is not validated.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Shorten`] on a non-success status and
    /// [`UpstreamError::Network`] on transport failures.
    async fn shorten(&self, long_url: &str) -> Result<String, UpstreamError>;

    /// Endpoint the shortener calls, reported by the health endpoint.
    fn endpoint(&self) -> String;
}
