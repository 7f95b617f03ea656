//! DTOs for link production endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::MadeLinks;

/// Query string of `GET /api/make`.
#[derive(Debug, Deserialize)]
pub struct MakeQuery {
    pub url: Option<String>,
}

/// Links produced for one asset.
///
/// `original` is omitted for uploads.
#[derive(Debug, Serialize)]
pub struct MakeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    pub raw: String,
    pub short: String,
    pub qr: String,
}

impl From<MadeLinks> for MakeResponse {
    fn from(links: MadeLinks) -> Self {
        Self {
            original: links.original,
            raw: links.raw,
            short: links.short,
            qr: links.qr,
        }
    }
}
