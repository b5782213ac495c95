//! In-memory implementation of the link repository.
//!
//! Backs the service when no database is configured (local hacking, demos)
//! and keeps integration tests hermetic. Nothing survives a restart.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// HashMap-backed repository keyed by short code.
///
/// A single `RwLock` guards the map; every mutation happens under the write
/// guard, which gives the same lost-update-free counting the SQL
/// implementation gets from its single-statement UPDATE.
pub struct MemoryLinkRepository {
    links: RwLock<HashMap<String, Link>>,
    next_id: AtomicI64,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            links: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.write().await;

        if links.contains_key(&new_link.code) {
            return Err(AppError::conflict(
                "Code already exists",
                json!({ "code": new_link.code }),
            ));
        }

        let link = Link::new(
            self.next_id.fetch_add(1, Ordering::Relaxed),
            new_link.code.clone(),
            new_link.target_url,
            0,
            None,
            Utc::now(),
            false,
        );

        links.insert(new_link.code, link.clone());
        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let links = self.links.read().await;
        Ok(links.get(code).cloned())
    }

    async fn list_active(&self) -> Result<Vec<Link>, AppError> {
        let links = self.links.read().await;

        let mut active: Vec<Link> = links.values().filter(|l| l.is_active()).cloned().collect();
        active.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(active)
    }

    async fn increment_click(&self, code: &str) -> Result<(), AppError> {
        let mut links = self.links.write().await;

        if let Some(link) = links.get_mut(code) {
            link.click_count += 1;
            link.last_clicked_at = Some(Utc::now());
        }

        Ok(())
    }

    async fn soft_delete(&self, code: &str) -> Result<bool, AppError> {
        let mut links = self.links.write().await;

        match links.get_mut(code) {
            Some(link) => {
                link.deleted = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn health_check(&self) -> bool {
        true
    }
}
