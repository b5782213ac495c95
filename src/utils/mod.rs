//! Utility functions for code generation, URL validation, and formatting.
//!
//! This module provides helper functions used across the application:
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`url_validator`] - Redirect target validation
//! - [`uptime`] - Human-readable uptime strings for health reporting

pub mod code_generator;
pub mod uptime;
pub mod url_validator;
