//! Web layer serving the single-page UI.
//!
//! The page is rendered with an Askama template and talks to the JSON API
//! from the browser.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers

pub mod handlers;
