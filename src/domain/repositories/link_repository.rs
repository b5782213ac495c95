//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-process HashMap store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new short link with a zero click count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists, soft-deleted
    /// rows included.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// This is a raw lookup: soft-deleted links are returned too, and callers
    /// decide whether they count as visible.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists links that are not soft-deleted, newest first.
    ///
    /// Ordering is `created_at DESC` with `id DESC` as tiebreak, so inserts
    /// sharing a timestamp still come back in a stable order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_active(&self) -> Result<Vec<Link>, AppError>;

    /// Atomically bumps `click_count` and stamps `last_clicked_at`.
    ///
    /// Single-statement on the storage side: concurrent increments must not
    /// lose updates. Unknown codes are a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_click(&self, code: &str) -> Result<(), AppError>;

    /// Soft-deletes a link by setting `deleted = true`.
    ///
    /// Returns `Ok(true)` if the code exists (even when already deleted, so
    /// repeat deletes stay idempotent), `Ok(false)` if it never did.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn soft_delete(&self, code: &str) -> Result<bool, AppError>;

    /// Probes storage connectivity.
    async fn health_check(&self) -> bool;
}
