//! HTTP request handlers for API endpoints.

pub mod fallback;
pub mod health;
pub mod make;
pub mod upload;

pub use fallback::{method_not_allowed_handler, not_found_handler};
pub use health::health_handler;
pub use make::make_handler;
pub use upload::upload_handler;
