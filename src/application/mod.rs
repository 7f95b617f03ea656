//! Application layer services implementing the link pipeline.
//!
//! Services consume the client traits from [`crate::domain`] and provide an
//! HTTP-independent API used by both the web handlers and the `qrlink` CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Raw link, short link and QR URL production

pub mod services;
