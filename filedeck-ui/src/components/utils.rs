//! Utility functions for UI components

use chrono::{Local, TimeZone};

pub use filedeck_common::format_size_kb;

/// Short date in the local timezone, e.g. "11/14/2023"
pub fn format_modified_date(last_modified_ms: u64) -> String {
    format_modified_date_in(last_modified_ms, &Local)
}

/// Short date (`M/D/YYYY`) in the given timezone. Out-of-range timestamps
/// render as an empty string.
pub fn format_modified_date_in<Tz: TimeZone>(last_modified_ms: u64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    i64::try_from(last_modified_ms)
        .ok()
        .and_then(|ms| tz.timestamp_millis_opt(ms).single())
        .map(|dt| dt.format("%-m/%-d/%Y").to_string())
        .unwrap_or_default()
}
