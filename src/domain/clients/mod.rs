//! Client trait definitions for the external services.
//!
//! These traits are the seams between the pipeline and the network. Concrete
//! implementations live in `crate::infrastructure`; mock implementations are
//! auto-generated via `mockall` for unit tests.
//!
//! # Available Clients
//!
//! - [`AssetPublisher`] - Commits a file to a repository and returns its raw URL
//! - [`LinkShortener`] - Turns a long URL into a short one

pub mod asset_publisher;
pub mod error;
pub mod link_shortener;

pub use asset_publisher::AssetPublisher;
pub use error::UpstreamError;
pub use link_shortener::LinkShortener;

#[cfg(test)]
pub use asset_publisher::MockAssetPublisher;
#[cfg(test)]
pub use link_shortener::MockLinkShortener;
