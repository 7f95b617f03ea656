//! Client for is.gd compatible shortening endpoints.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::domain::{LinkShortener, UpstreamError};
use crate::infrastructure::http::body_text;

/// Calls `GET {endpoint}?format=simple&url={long_url}` and returns the
/// plain-text answer.
pub struct HttpLinkShortener {
    client: Client,
    endpoint: String,
}

impl HttpLinkShortener {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl LinkShortener for HttpLinkShortener {
    async fn shorten(&self, long_url: &str) -> Result<String, UpstreamError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("format", "simple"), ("url", long_url)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = body_text(response).await.trim().to_string();
            warn!(%status, %body, "Shortener returned an error");
            return Err(UpstreamError::Shorten {
                status: status.as_u16(),
                body,
            });
        }

        let short = response.text().await?.trim().to_string();
        debug!(long_url, %short, "Shortened URL");

        Ok(short)
    }

    fn endpoint(&self) -> String {
        self.endpoint.clone()
    }
}
