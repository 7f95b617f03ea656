//! Link pipeline: raw URL, then short URL, then QR URL.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{AssetPublisher, LinkShortener, MadeLinks, Upload};
use crate::error::AppError;
use crate::utils::github_url::to_raw_url;
use crate::utils::qr::QrRenderer;

/// Service producing the three links for an asset.
///
/// Every step awaits the previous one; nothing runs in parallel and nothing is
/// retried. Either all three URLs are produced or an error is returned.
pub struct LinkService {
    publisher: Arc<dyn AssetPublisher>,
    shortener: Arc<dyn LinkShortener>,
    qr: QrRenderer,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(
        publisher: Arc<dyn AssetPublisher>,
        shortener: Arc<dyn LinkShortener>,
        qr: QrRenderer,
    ) -> Self {
        Self {
            publisher,
            shortener,
            qr,
        }
    }

    /// Produces links for a file already hosted on GitHub.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if `input` is not a GitHub blob or raw
    /// URL, and an upstream error if shortening fails.
    pub async fn make_from_url(&self, input: &str) -> Result<MadeLinks, AppError> {
        let raw = to_raw_url(input)?;

        self.finish(Some(input.to_string()), raw).await
    }

    /// Publishes an uploaded file, then produces links for it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] for an empty file,
    /// [`AppError::UpstreamPublish`] if the repository rejects the commit, and
    /// an upstream error if shortening fails.
    pub async fn make_from_upload(&self, upload: Upload) -> Result<MadeLinks, AppError> {
        if upload.is_empty() {
            return Err(AppError::invalid_input("Uploaded file is empty"));
        }

        let raw = self.publisher.publish(&upload).await.map_err(|e| {
            warn!(filename = upload.filename(), error = %e, "Publish failed");
            AppError::from(e)
        })?;

        self.finish(None, raw).await
    }

    async fn finish(&self, original: Option<String>, raw: String) -> Result<MadeLinks, AppError> {
        let short = self.shortener.shorten(&raw).await.map_err(|e| {
            warn!(%raw, error = %e, "Shortening failed");
            AppError::from(e)
        })?;

        let qr = self.qr.render(&short);
        info!(%raw, %short, "Links ready");

        Ok(MadeLinks {
            original,
            raw,
            short,
            qr,
        })
    }

    /// Returns the QR image URL for arbitrary text.
    pub fn qr_url(&self, data: &str) -> String {
        self.qr.render(data)
    }

    /// Upload target, or `None` when uploads are disabled.
    pub fn publisher_target(&self) -> Option<String> {
        self.publisher.target()
    }

    pub fn shortener_endpoint(&self) -> String {
        self.shortener.endpoint()
    }
}
