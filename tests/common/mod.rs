#![allow(dead_code)]

use std::sync::Arc;
use tinylink::application::services::LinkService;
use tinylink::domain::click_event::ClickEvent;
use tinylink::domain::entities::Link;
use tinylink::domain::repositories::LinkRepository;
use tinylink::infrastructure::persistence::MemoryLinkRepository;
use tinylink::state::AppState;
use tokio::sync::mpsc;

/// Builds an [`AppState`] backed by the in-memory store.
///
/// Returns the receiving end of the click queue so tests can observe
/// (or deliberately ignore) enqueued click events.
pub fn create_test_state() -> (AppState, mpsc::Receiver<ClickEvent>) {
    create_test_state_with(Arc::new(MemoryLinkRepository::new()), 100)
}

/// Same as [`create_test_state`], but with an explicit repository and
/// click queue capacity.
pub fn create_test_state_with(
    repository: Arc<dyn LinkRepository>,
    queue_capacity: usize,
) -> (AppState, mpsc::Receiver<ClickEvent>) {
    let (tx, rx) = mpsc::channel(queue_capacity);
    let link_service = Arc::new(LinkService::new(repository));
    let state = AppState::new(link_service, tx, "http://localhost:3000".to_string());

    (state, rx)
}

/// Creates a link through the service, so it passes the same validation
/// as API-created links.
pub async fn seed_link(state: &AppState, code: &str, url: &str) -> Link {
    state
        .link_service
        .create_link(url.to_string(), Some(code.to_string()))
        .await
        .unwrap()
}

/// Creates a link and immediately soft-deletes it.
pub async fn seed_deleted_link(state: &AppState, code: &str, url: &str) {
    seed_link(state, code, url).await;
    state.link_service.delete_link(code).await.unwrap();
}
