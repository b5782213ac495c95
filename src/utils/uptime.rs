//! Human-readable uptime formatting for the health endpoint.

use std::time::Duration;

fn unit(value: u64, name: &str) -> String {
    if value == 1 {
        format!("1 {name}")
    } else {
        format!("{value} {name}s")
    }
}

/// Formats an uptime as `"1 day, 2 hours, 5 minutes, 3 seconds"`.
///
/// Zero-valued units are skipped; anything under a second renders as
/// `"0 seconds"` so the field is never empty.
pub fn format_uptime(elapsed: Duration) -> String {
    let total_seconds = elapsed.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(unit(days, "day"));
    }
    if hours > 0 {
        parts.push(unit(hours, "hour"));
    }
    if minutes > 0 {
        parts.push(unit(minutes, "minute"));
    }
    if seconds > 0 {
        parts.push(unit(seconds, "second"));
    }

    if parts.is_empty() {
        return "0 seconds".to_string();
    }

    parts.join(", ")
}
