//! Pure helpers used by the link pipeline.
//!
//! - [`github_url`] - GitHub blob URL to raw URL rewriting
//! - [`filename`] - Filename sanitizing for published files
//! - [`qr`] - QR image URL construction

pub mod filename;
pub mod github_url;
pub mod qr;
