//! Per-link detail page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Template for the link detail page.
#[derive(Template, WebTemplate)]
#[template(path = "link_detail.html")]
pub struct LinkDetailTemplate {
    pub code: String,
    pub short_url: String,
    pub target_url: String,
    pub click_count: i64,
    pub last_clicked_day: String,
    pub last_clicked_time: String,
    pub created_date: String,
    pub created_weekday: String,
}

/// Renders the detail page for a single link.
///
/// # Endpoint
///
/// `GET /code/{code}`
///
/// Soft-deleted and unknown codes both return 404.
pub async fn link_detail_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.resolve_active(&code).await?;

    let (last_clicked_day, last_clicked_time) = match link.last_clicked_at {
        Some(at) => (
            at.format("%b %d").to_string(),
            at.format("%-I:%M %p").to_string(),
        ),
        None => ("Never".to_string(), "No activity".to_string()),
    };

    Ok(LinkDetailTemplate {
        short_url: state.short_url(&link.code),
        code: link.code,
        target_url: link.target_url,
        click_count: link.click_count,
        last_clicked_day,
        last_clicked_time,
        created_date: link.created_at.format("%b %d, %Y").to_string(),
        created_weekday: link.created_at.format("%A").to_string(),
    })
}
