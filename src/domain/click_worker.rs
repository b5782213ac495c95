//! Background worker draining the click queue into the store.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkRepository;

/// Consumes click events and bumps the matching link's counter.
///
/// Runs until every sender half of the channel is dropped. Failed increments
/// are logged and dropped on the floor: a click is best-effort bookkeeping
/// and must never be retried into a write storm or stall the queue.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    repository: Arc<dyn LinkRepository>,
) {
    while let Some(event) = rx.recv().await {
        if let Err(e) = repository.increment_click(&event.code).await {
            tracing::warn!(code = %event.code, error = %e, "Failed to record click");
        }
    }

    tracing::debug!("Click worker stopped: all senders dropped");
}
