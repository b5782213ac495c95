//! HTML template rendering handlers for the web dashboard.

mod dashboard;
mod link_detail;

pub use dashboard::dashboard_handler;
pub use link_detail::link_detail_handler;
