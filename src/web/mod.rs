//! Web dashboard layer for browser-based UI.
//!
//! Provides HTML pages for link management and click overviews.
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Dashboard route configuration

pub mod handlers;
pub mod routes;
