//! # qrlink
//!
//! Turns an audio file into something you can print: a raw GitHub link to its
//! bytes, a short link to that, and a QR code image URL for the short link.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Pipeline values and external client traits
//! - **Application Layer** ([`application`]) - The link pipeline
//! - **Infrastructure Layer** ([`infrastructure`]) - GitHub and shortener clients
//! - **API Layer** ([`api`]) - JSON handlers, DTOs and middleware
//! - **Web Layer** ([`web`]) - The HTML page
//!
//! ## Pipeline
//!
//! 1. A GitHub blob URL is rewritten to its raw form, or an uploaded file is
//!    committed through the GitHub Contents API
//! 2. The raw URL is shortened
//! 3. The short URL is embedded in a QR rendering service URL
//!
//! Each step awaits the previous one. Nothing is stored.
//!
//! ## Quick Start
//!
//! ```bash
//! # URL mode needs no configuration
//! cargo run
//! curl "http://localhost:3000/api/make?url=https://github.com/org/repo/blob/main/a.mp3"
//!
//! # Uploads need a repository
//! export GITHUB_TOKEN="ghp_..."
//! export GITHUB_REPO="alice/audio-files"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::{AssetPublisher, LinkShortener, MadeLinks, Upload, UpstreamError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::qr::QrRenderer;
}
