//! GitHub integration for publishing uploaded files.
//!
//! Provides two [`crate::domain::AssetPublisher`] implementations:
//! - [`GithubContentsPublisher`] - Commits files through the Contents API
//! - [`DisabledPublisher`] - Rejects every upload when no token is configured

mod contents_publisher;
mod disabled_publisher;

pub use contents_publisher::{GithubContentsPublisher, raw_url_for, repo_file_path};
pub use disabled_publisher::DisabledPublisher;
