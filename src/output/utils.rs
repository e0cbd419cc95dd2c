//! Shared utility functions for output formatting

use chrono::{DateTime, SecondsFormat, Utc};

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a byte count with two decimals in the largest unit that keeps the
/// value under 1024 (GB is the ceiling).
pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}

/// RFC 3339 in UTC with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`.
pub fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Calculate the prefix for entries nested under a tree line.
pub fn continuation_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}

/// Connector drawn in front of a tree entry.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { "└── " } else { "├── " }
}
