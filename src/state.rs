//! Shared application state handed to every handler.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;

use crate::application::services::LinkService;
use crate::domain::click_event::ClickEvent;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub click_sender: mpsc::Sender<ClickEvent>,
    pub base_url: String,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService>,
        click_sender: mpsc::Sender<ClickEvent>,
        base_url: String,
    ) -> Self {
        Self {
            link_service,
            click_sender,
            base_url,
            started_at: Instant::now(),
        }
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
