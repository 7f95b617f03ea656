//! QR code image URL construction.
//!
//! No image is generated locally: the renderer fills a third-party URL
//! template that returns the image when a client dereferences it.

/// Default QR rendering endpoint.
pub const DEFAULT_QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Default requested image edge, in pixels.
pub const DEFAULT_QR_SIZE: u32 = 500;

/// Builds QR image URLs for a fixed endpoint and image size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrRenderer {
    endpoint: String,
    size: u32,
}

impl QrRenderer {
    pub fn new(endpoint: impl Into<String>, size: u32) -> Self {
        Self {
            endpoint: endpoint.into(),
            size,
        }
    }

    /// Returns the URL of a QR image encoding `data`.
    ///
    /// `data` is percent-encoded; only `A-Z a-z 0-9 - _ . ~` pass through.
    pub fn render(&self, data: &str) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };

        format!(
            "{}{separator}size={size}x{size}&data={}",
            self.endpoint,
            urlencoding::encode(data),
            size = self.size,
        )
    }
}

impl Default for QrRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_QR_ENDPOINT, DEFAULT_QR_SIZE)
    }
}
