use chrono::{DateTime, Utc};

use crate::utils::constants::TIMESTAMP_FORMAT;

/// Convert a provider Unix timestamp to the store's UTC timestamp layout.
/// Out-of-range timestamps render as an empty string rather than a panic;
/// the column is informational.
pub fn format_unix_utc(ts: i64) -> String {
    DateTime::<Utc>::from_timestamp(ts, 0)
        .map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default()
}

/// Current UTC time in the store's timestamp layout.
pub fn now_utc() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}
