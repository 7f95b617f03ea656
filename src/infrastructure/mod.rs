//! Infrastructure layer for external integrations.
//!
//! This layer implements the client traits defined by the domain layer on top
//! of a shared `reqwest` client.
//!
//! # Modules
//!
//! - [`http`] - Outbound HTTP client construction
//! - [`github`] - GitHub Contents API publisher (and its disabled fallback)
//! - [`shortener`] - URL-shortening service client

pub mod github;
pub mod http;
pub mod shortener;
