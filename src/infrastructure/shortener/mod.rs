//! URL-shortening service client.

mod http_shortener;

pub use http_shortener::HttpLinkShortener;
