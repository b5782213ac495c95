//! Link creation, lookup, and deletion service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{random_code, validate_code};
use crate::utils::url_validator::validate_target_url;

/// Upper bound on candidate codes tried for one create request.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Service implementing the application rules around short links.
///
/// Works against any [`LinkRepository`]; the binary picks PostgreSQL or the
/// in-memory store at startup and tests inject mocks.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Creates a short link, generating a code unless the caller provides one.
    ///
    /// An empty `requested_code` counts as absent, so HTML forms can always
    /// submit the field.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - `target_url` is not an absolute http(s) URL
    /// - the requested code breaks the 6-8 alphanumeric format or is reserved
    ///
    /// Returns [`AppError::Conflict`] if the requested code is already taken.
    /// Returns [`AppError::Unavailable`] when generation exhausts its attempts.
    pub async fn create_link(
        &self,
        target_url: String,
        requested_code: Option<String>,
    ) -> Result<Link, AppError> {
        validate_target_url(&target_url).map_err(|e| {
            AppError::bad_request("Invalid targetUrl", json!({ "reason": e.to_string() }))
        })?;

        let requested_code = requested_code.filter(|code| !code.is_empty());

        match requested_code {
            Some(code) => self.create_with_custom_code(target_url, code).await,
            None => self.create_with_generated_code(target_url).await,
        }
    }

    async fn create_with_custom_code(
        &self,
        target_url: String,
        code: String,
    ) -> Result<Link, AppError> {
        validate_code(&code)?;

        if self.repository.find_by_code(&code).await?.is_some() {
            return Err(AppError::conflict(
                "Code already exists",
                json!({ "code": code }),
            ));
        }

        // A racing insert can still win; the unique index turns that into
        // Conflict, which is the right answer for a code the caller chose.
        self.repository.create(NewLink { code, target_url }).await
    }

    async fn create_with_generated_code(&self, target_url: String) -> Result<Link, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let code = random_code();

            if self.repository.find_by_code(&code).await?.is_some() {
                continue;
            }

            let new_link = NewLink {
                code,
                target_url: target_url.clone(),
            };

            match self.repository.create(new_link).await {
                Ok(link) => return Ok(link),
                // Lost an insert race; the next attempt draws a fresh code.
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::unavailable(
            "Could not generate unique code, try again",
            json!({ "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }

    /// Lists links that are not soft-deleted, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.repository.list_active().await
    }

    /// Retrieves a link by code for the management API.
    ///
    /// Soft-deleted links are returned too: the API keeps them readable as an
    /// audit trail even though they no longer resolve.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code never existed.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "code": code })))
    }

    /// Resolves a link for visitor-facing surfaces (redirect, detail page).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown and soft-deleted codes alike.
    pub async fn resolve_active(&self, code: &str) -> Result<Link, AppError> {
        match self.repository.find_by_code(code).await? {
            Some(link) if link.is_active() => Ok(link),
            _ => Err(AppError::not_found(
                "Link not found",
                json!({ "code": code }),
            )),
        }
    }

    /// Soft-deletes a link. Repeat deletes of the same code succeed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code never existed.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        if self.repository.soft_delete(code).await? {
            Ok(())
        } else {
            Err(AppError::not_found(
                "Link not found",
                json!({ "code": code }),
            ))
        }
    }

    /// Probes the backing store for the health endpoint.
    pub async fn storage_healthy(&self) -> bool {
        self.repository.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use crate::utils::code_generator::CODE_REGEX;
    use chrono::Utc;
    use mockall::Sequence;

    fn test_link(id: i64, code: &str, url: &str) -> Link {
        Link::new(id, code.to_string(), url.to_string(), 0, None, Utc::now(), false)
    }

    fn deleted_link(id: i64, code: &str) -> Link {
        Link::new(
            id,
            code.to_string(),
            "https://example.com".to_string(),
            3,
            Some(Utc::now()),
            Utc::now(),
            true,
        )
    }

    #[tokio::test]
    async fn test_create_with_custom_code_success() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_find_by_code()
            .withf(|code| code == "mycode")
            .times(1)
            .returning(|_| Ok(None));

        let created = test_link(10, "mycode", "https://example.com");
        mock_repo
            .expect_create()
            .withf(|new_link| new_link.code == "mycode")
            .times(1)
            .returning(move |_| Ok(created.clone()));

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service
            .create_link(
                "https://example.com".to_string(),
                Some("mycode".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(link.code, "mycode");
        assert_eq!(link.click_count, 0);
    }

    #[tokio::test]
    async fn test_create_custom_code_conflict() {
        let mut mock_repo = MockLinkRepository::new();

        let existing = test_link(5, "taken1", "https://other.com");
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        mock_repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_link(
                "https://example.com".to_string(),
                Some("taken1".to_string()),
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_create_custom_code_conflicts_with_deleted_link() {
        let mut mock_repo = MockLinkRepository::new();

        let tombstone = deleted_link(5, "gone42");
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(move |_| Ok(Some(tombstone.clone())));

        mock_repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_link(
                "https://example.com".to_string(),
                Some("gone42".to_string()),
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_create_custom_code_insert_race_is_conflict() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        // The pre-check missed a concurrent insert; no silent regeneration
        // for a code the caller picked.
        mock_repo.expect_create().times(1).returning(|_| {
            Err(AppError::conflict("Code already exists", json!({})))
        });

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_link(
                "https://example.com".to_string(),
                Some("mycode".to_string()),
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_create_invalid_code_format() {
        let mock_repo = MockLinkRepository::new();
        let service = LinkService::new(Arc::new(mock_repo));

        for bad in ["abc12", "abcdef123", "abc-12", "healthz"] {
            let result = service
                .create_link("https://example.com".to_string(), Some(bad.to_string()))
                .await;

            assert!(
                matches!(result.unwrap_err(), AppError::Validation { .. }),
                "'{}' should fail validation",
                bad
            );
        }
    }

    #[tokio::test]
    async fn test_create_invalid_url() {
        let mock_repo = MockLinkRepository::new();
        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.create_link("not-a-url".to_string(), None).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_rejects_javascript_scheme() {
        let mock_repo = MockLinkRepository::new();
        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_link("javascript:alert(1)".to_string(), None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_with_generated_code() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let created = test_link(1, "Xy12Ab", "https://example.com");
        mock_repo
            .expect_create()
            .withf(|new_link| CODE_REGEX.is_match(&new_link.code))
            .times(1)
            .returning(move |_| Ok(created.clone()));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.create_link("https://example.com".to_string(), None).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_empty_code_generates() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let created = test_link(1, "Ab34Cd", "https://example.com");
        mock_repo
            .expect_create()
            .withf(|new_link| CODE_REGEX.is_match(&new_link.code))
            .times(1)
            .returning(move |_| Ok(created.clone()));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_link("https://example.com".to_string(), Some(String::new()))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_generated_code_retries_on_collision() {
        let mut mock_repo = MockLinkRepository::new();
        let mut seq = Sequence::new();

        let colliding = test_link(5, "seen99", "https://other.com");
        mock_repo
            .expect_find_by_code()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(Some(colliding.clone())));

        mock_repo
            .expect_find_by_code()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));

        let created = test_link(6, "fresh1", "https://example.com");
        mock_repo
            .expect_create()
            .times(1)
            .returning(move |_| Ok(created.clone()));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.create_link("https://example.com".to_string(), None).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_generated_code_retries_on_insert_race() {
        let mut mock_repo = MockLinkRepository::new();
        let mut seq = Sequence::new();

        mock_repo
            .expect_find_by_code()
            .times(2)
            .returning(|_| Ok(None));

        mock_repo
            .expect_create()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(AppError::conflict("Code already exists", json!({}))));

        let created = test_link(7, "fresh2", "https://example.com");
        mock_repo
            .expect_create()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(created.clone()));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.create_link("https://example.com".to_string(), None).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_generation_gives_up_after_max_attempts() {
        let mut mock_repo = MockLinkRepository::new();

        let colliding = test_link(5, "busy42", "https://other.com");
        mock_repo
            .expect_find_by_code()
            .times(10)
            .returning(move |_| Ok(Some(colliding.clone())));

        mock_repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.create_link("https://example.com".to_string(), None).await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Unavailable { .. }));
        assert_eq!(err.to_string(), "Could not generate unique code, try again");
    }

    #[tokio::test]
    async fn test_get_link_returns_deleted_rows() {
        let mut mock_repo = MockLinkRepository::new();

        let tombstone = deleted_link(3, "gone42");
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(move |_| Ok(Some(tombstone.clone())));

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service.get_link("gone42").await.unwrap();
        assert!(!link.is_active());
    }

    #[tokio::test]
    async fn test_get_link_not_found() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.get_link("nosuch").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_active_hides_deleted() {
        let mut mock_repo = MockLinkRepository::new();

        let tombstone = deleted_link(3, "gone42");
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(move |_| Ok(Some(tombstone.clone())));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.resolve_active("gone42").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_active_success() {
        let mut mock_repo = MockLinkRepository::new();

        let link = test_link(1, "abc123", "https://example.com/page");
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(move |_| Ok(Some(link.clone())));

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service.resolve_active("abc123").await.unwrap();
        assert_eq!(link.target_url, "https://example.com/page");
    }

    #[tokio::test]
    async fn test_delete_link_success() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_soft_delete()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(true));

        let service = LinkService::new(Arc::new(mock_repo));

        assert!(service.delete_link("abc123").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_link_not_found() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_soft_delete()
            .times(1)
            .returning(|_| Ok(false));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.delete_link("nosuch").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_storage_healthy_passthrough() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_health_check().times(1).returning(|| false);

        let service = LinkService::new(Arc::new(mock_repo));

        assert!(!service.storage_healthy().await);
    }
}
