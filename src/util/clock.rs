//! Wall-clock helpers.

use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch, or zero if the system clock is before it.
pub fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// Minutes from midnight rendered as `H:MM` (hour unpadded).
pub fn format_clock(minutes: u32) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}
