//! Dashboard home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::domain::entities::Link;
use crate::error::AppError;
use crate::state::AppState;

/// One table row on the dashboard.
pub struct LinkRowView {
    pub short_url: String,
    pub code: String,
    pub target_url: String,
    pub click_count: i64,
    pub last_clicked: String,
    pub created: String,
}

/// Template for the dashboard home page.
///
/// Renders `templates/dashboard.html` with an overview of:
/// - Total links, total clicks, average clicks per link
/// - The active links table, newest first
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub total_links: usize,
    pub total_clicks: i64,
    pub average_clicks: i64,
    pub links: Vec<LinkRowView>,
}

/// Renders the dashboard home page.
///
/// # Endpoint
///
/// `GET /`
///
/// Soft-deleted links are not shown and do not count toward the totals.
pub async fn dashboard_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let links = state.link_service.list_links().await?;

    let total_links = links.len();
    let total_clicks: i64 = links.iter().map(|l| l.click_count).sum();
    let average_clicks = if total_links > 0 {
        (total_clicks as f64 / total_links as f64).round() as i64
    } else {
        0
    };

    let links = links
        .into_iter()
        .map(|link| link_row(&state, link))
        .collect();

    Ok(DashboardTemplate {
        total_links,
        total_clicks,
        average_clicks,
        links,
    })
}

fn link_row(state: &AppState, link: Link) -> LinkRowView {
    LinkRowView {
        short_url: state.short_url(&link.code),
        code: link.code,
        target_url: link.target_url,
        click_count: link.click_count,
        last_clicked: link
            .last_clicked_at
            .map(|t| t.format("%b %d, %Y").to_string())
            .unwrap_or_else(|| "Never".to_string()),
        created: link.created_at.format("%b %d, %Y").to_string(),
    }
}
