//! Domain layer containing the pipeline's value types and client contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Values flowing through one request ([`Upload`], [`MadeLinks`])
//! - [`clients`] - Trait definitions for the external services
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Client traits define contracts implemented by the infrastructure layer
//! - Orchestration lives in [`crate::application::services`]

pub mod clients;
pub mod entities;

pub use clients::{AssetPublisher, LinkShortener, UpstreamError};
pub use entities::{MadeLinks, Upload};
