//! Handler for the health check endpoint.

use axum::{Json, extract::State, http::header, response::IntoResponse};

use crate::api::dto::health::{DbStatus, HealthResponse};
use crate::state::AppState;
use crate::utils::uptime::format_uptime;

/// Cache policy for health probes; monitors may sit behind a CDN.
const HEALTH_CACHE_CONTROL: &str = "public, s-maxage=30, stale-while-revalidate=59";

/// Reports process liveness and storage connectivity.
///
/// # Endpoint
///
/// `GET /healthz`
///
/// # Response
///
/// Always 200: the process answering is the liveness signal, and storage
/// trouble is reported in the body instead of the status code.
///
/// ```json
/// {
///   "ok": true,
///   "version": "0.1.0",
///   "uptime": "1 day, 2 hours, 5 minutes, 3 seconds",
///   "db": { "ok": true }
/// }
/// ```
///
/// With storage down, `db` becomes `{ "ok": false, "error": "..." }`.
pub async fn healthz_handler(State(state): State<AppState>) -> impl IntoResponse {
    let db = if state.link_service.storage_healthy().await {
        DbStatus {
            ok: true,
            error: None,
        }
    } else {
        DbStatus {
            ok: false,
            error: Some("database unreachable".to_string()),
        }
    };

    let body = HealthResponse {
        ok: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: format_uptime(state.started_at.elapsed()),
        db,
    };

    ([(header::CACHE_CONTROL, HEALTH_CACHE_CONTROL)], Json(body))
}
