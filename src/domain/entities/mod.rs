//! Values produced and consumed by the link pipeline.
//!
//! Nothing here is persisted. Every value lives for the duration of one
//! request and is immutable once built.
//!
//! # Entity Types
//!
//! - [`Upload`] - A file submitted for publishing, with a sanitized filename
//! - [`MadeLinks`] - The raw, short and QR URLs produced for one asset

pub mod made_links;
pub mod upload;

pub use made_links::MadeLinks;
pub use upload::Upload;
