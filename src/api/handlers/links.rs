//! Handlers for link management endpoints (list, create, get, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::links::{
    CreateLinkRequest, CreateLinkResponse, DeleteLinkResponse, LinkEnvelope, ListLinksResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// CDN cache policy shared by the read endpoints.
const READ_CACHE_CONTROL: &str = "public, s-maxage=60, stale-while-revalidate=119";

/// Lists all active links, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// # Response
///
/// ```json
/// {
///   "linksCount": 2,
///   "links": [
///     {
///       "id": 2,
///       "code": "abc123",
///       "targetUrl": "https://example.com",
///       "clickCount": 7,
///       "lstClickedAt": "2026-08-20T10:15:00Z",
///       "createdAt": "2026-08-19T08:00:00Z"
///     }
///   ]
/// }
/// ```
///
/// Soft-deleted links are excluded and do not count toward `linksCount`.
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let links = state.link_service.list_links().await?;

    let body = ListLinksResponse {
        links_count: links.len(),
        links: links.into_iter().map(Into::into).collect(),
    };

    Ok(([(header::CACHE_CONTROL, READ_CACHE_CONTROL)], Json(body)))
}

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "targetUrl": "https://example.com/some/long/path",
///   "code": "mylink"   // optional; empty string also means "generate"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for malformed JSON, an invalid `targetUrl`, or a
/// code outside the 6-8 alphanumeric format. Returns 409 Conflict when the
/// requested code is taken (soft-deleted codes included). Returns 503 when
/// code generation exhausts its attempts.
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    // Map body rejections ourselves: clients get 400, not the default 422.
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request("Invalid payload", json!({ "reason": rejection.body_text() }))
    })?;

    payload.validate()?;

    let link = state
        .link_service
        .create_link(payload.target_url, payload.code)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateLinkResponse {
            ok: true,
            link: link.into(),
        }),
    ))
}

/// Fetches a single link by code.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// Soft-deleted links are still returned here so operators can audit them;
/// only the redirect and the dashboard treat them as gone.
///
/// # Errors
///
/// Returns 404 Not Found if the code never existed.
pub async fn get_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.get_link(&code).await?;

    Ok((
        [(header::CACHE_CONTROL, READ_CACHE_CONTROL)],
        Json(LinkEnvelope { link: link.into() }),
    ))
}

/// Soft-deletes a short link.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Behavior
///
/// - The row is kept; `deleted` is set so the code stops resolving.
/// - The code remains reserved forever and cannot be recreated.
/// - Deleting an already-deleted link succeeds again (idempotent).
///
/// # Errors
///
/// Returns 404 Not Found if the code never existed.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteLinkResponse>, AppError> {
    state.link_service.delete_link(&code).await?;

    Ok(Json(DeleteLinkResponse {
        ok: true,
        message: "Link deleted successfully".to_string(),
    }))
}
