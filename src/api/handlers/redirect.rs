//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use tracing::debug;

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the code against the store (soft-deleted counts as missing)
/// 2. Queue a click event for the background worker
/// 3. Return 307 Temporary Redirect with the target in `Location`
///
/// # Click Tracking
///
/// Click events go through a bounded channel, fire-and-forget. A full queue
/// drops the event; the redirect itself never waits on click bookkeeping and
/// never fails because of it.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown or the link was deleted.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.resolve_active(&code).await?;

    if state
        .click_sender
        .try_send(ClickEvent::new(link.code.clone()))
        .is_err()
    {
        debug!(code = %link.code, "Click queue full, dropping event");
    }

    Ok(Redirect::temporary(&link.target_url))
}
