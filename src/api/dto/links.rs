//! DTOs for the link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to create a short link.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    /// The redirect target (must be a valid absolute URL).
    #[validate(url(message = "targetUrl must be a valid URL"))]
    pub target_url: String,

    /// Optional caller-chosen code. An empty string means "generate one",
    /// so format rules live in the service rather than a field validator.
    pub code: Option<String>,
}

/// One link as serialized by every endpoint.
///
/// `lstClickedAt` (sic) is the established wire name; the typo stays.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkBody {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub click_count: i64,
    #[serde(rename = "lstClickedAt")]
    pub last_clicked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkBody {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            code: link.code,
            target_url: link.target_url,
            click_count: link.click_count,
            last_clicked_at: link.last_clicked_at,
            created_at: link.created_at,
        }
    }
}

/// Response for `GET /api/links`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListLinksResponse {
    pub links_count: usize,
    pub links: Vec<LinkBody>,
}

/// Response for `POST /api/links`.
#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    pub ok: bool,
    pub link: LinkBody,
}

/// Response for `GET /api/links/{code}`.
#[derive(Debug, Serialize)]
pub struct LinkEnvelope {
    pub link: LinkBody,
}

/// Response for `DELETE /api/links/{code}`.
#[derive(Debug, Serialize)]
pub struct DeleteLinkResponse {
    pub ok: bool,
    pub message: String,
}
