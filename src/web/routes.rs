//! Web dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::{dashboard_handler, link_detail_handler};
use axum::{Router, routing::get};

/// Dashboard routes.
///
/// # Endpoints
///
/// - `GET /` - Dashboard home with overview and links table
/// - `GET /code/{code}` - Detail page for a single link
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard_handler))
        .route("/code/{code}", get(link_detail_handler))
}
