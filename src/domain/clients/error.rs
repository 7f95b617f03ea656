//! Errors raised while talking to external services.

/// Failure of an upstream call.
///
/// Upstream response bodies are kept verbatim so they can be shown to the
/// caller as-is.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("GitHub upload failed ({status}): {body}")]
    Publish { status: u16, body: String },

    #[error("Uploads are disabled: GITHUB_TOKEN is not configured")]
    PublishDisabled,

    #[error("Shortener failed ({status}): {body}")]
    Shorten { status: u16, body: String },

    #[error("Upstream request failed: {0}")]
    Network(String),
}
