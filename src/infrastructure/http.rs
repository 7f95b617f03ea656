//! Outbound HTTP client shared by every upstream integration.

use crate::domain::UpstreamError;
use reqwest::Client;
use std::time::Duration;

/// `User-Agent` sent with every outbound request. GitHub rejects requests without one.
pub const USER_AGENT: &str = concat!("qrlink/", env!("CARGO_PKG_VERSION"));

/// Builds the pooled client used for all upstream calls.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        UpstreamError::Network(e.to_string())
    }
}

/// Reads a response body for error reporting, never failing.
pub(crate) async fn body_text(response: reqwest::Response) -> String {
    match response.text().await {
        Ok(body) => body,
        Err(e) => format!("<unreadable response body: {e}>"),
    }
}
