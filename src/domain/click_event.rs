//! Click event model for asynchronous click tracking.

/// An in-memory record of one successful redirect, queued for async counting.
///
/// Used to pass click information from the redirect handler to the background
/// worker via a channel. This decouples the HTTP response from the storage
/// write, allowing fast redirects without blocking.
///
/// Only the code travels on the channel: the counter and `last_clicked_at`
/// stamp live on the link row itself, so there is nothing else to carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub code: String,
}

impl ClickEvent {
    /// Creates a new click event for the given short code.
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}
