//! Short code generation and validation utilities.

use std::sync::LazyLock;

use rand::distr::{Alphanumeric, SampleString};
use rand::Rng;
use regex::Regex;
use serde_json::json;

use crate::error::AppError;

/// Generated codes vary between 6 and 8 characters.
pub const MIN_CODE_LENGTH: usize = 6;
pub const MAX_CODE_LENGTH: usize = 8;

/// Accepted short code shape, for generated and custom codes alike.
pub static CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]{6,8}$").expect("code regex must compile")
});

/// Codes that match the format but are shadowed by fixed routes.
const RESERVED_CODES: &[&str] = &["healthz", "static"];

/// Generates a random short code.
///
/// Length is drawn uniformly from 6..=8, characters from `[A-Za-z0-9]`.
/// Uniqueness is the caller's problem; candidates are checked against the
/// store and regenerated on collision.
///
/// # Examples
///
/// ```ignore
/// let code = random_code();
/// assert!(CODE_REGEX.is_match(&code));
/// ```
pub fn random_code() -> String {
    let mut rng = rand::rng();
    let length = rng.random_range(MIN_CODE_LENGTH..=MAX_CODE_LENGTH);

    Alphanumeric.sample_string(&mut rng, length)
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - 6 to 8 characters, ASCII letters and digits only
/// - Cannot collide with a fixed route (`healthz`, `static`)
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_code(code: &str) -> Result<(), AppError> {
    if !CODE_REGEX.is_match(code) {
        return Err(AppError::bad_request(
            "Invalid code format (must be 6-8 alphanumeric characters)",
            json!({ "code": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(
            "This code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
