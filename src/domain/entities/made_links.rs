//! Result of a successful pipeline run.

/// The three URLs produced for one asset.
///
/// `original` is the URL the caller supplied; it is `None` for uploads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MadeLinks {
    pub original: Option<String>,
    pub raw: String,
    pub short: String,
    pub qr: String,
}
