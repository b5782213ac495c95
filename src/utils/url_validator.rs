//! Target URL validation.
//!
//! Checks that a redirect target is a well-formed absolute HTTP(S) URL.
//! The URL itself is stored verbatim, so this module validates and never
//! rewrites.

use url::Url;

/// Errors that can occur while validating a target URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Validates a redirect target.
///
/// # Rules
///
/// 1. Must parse as an absolute URL (relative references are rejected)
/// 2. Scheme must be `http` or `https`
///
/// # Security
///
/// The scheme allow-list keeps `javascript:`, `data:`, `file:` and friends
/// out of `Location` headers.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed URLs.
/// Returns [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn validate_target_url(input: &str) -> Result<(), UrlValidationError> {
    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(UrlValidationError::UnsupportedProtocol),
    }
}
