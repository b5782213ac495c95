//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, get_link_handler, list_links_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET    /links`        - List active links, newest first
/// - `POST   /links`        - Create a link (code optional)
/// - `GET    /links/{code}` - Fetch one link, soft-deleted included
/// - `DELETE /links/{code}` - Soft-delete a link
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route(
            "/links/{code}",
            get(get_link_handler).delete(delete_link_handler),
        )
}
