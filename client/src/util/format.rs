//! Display formatting for certificate and evaluation values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::{CompletionStats, ResponseRow};

/// Text shown for missing values.
pub const PLACEHOLDER: &str = "-";

/// Date portion of an ISO 8601 timestamp (`2024-06-01T10:00:00Z` -> `2024-06-01`).
///
/// Anything that does not start with a `YYYY-MM-DD` date is shown unchanged.
pub fn format_issue_date(iso: &str) -> String {
    let trimmed = iso.trim();
    if trimmed.is_empty() {
        return PLACEHOLDER.to_owned();
    }
    match trimmed.get(..10) {
        Some(date) if is_iso_date(date) => date.to_owned(),
        _ => trimmed.to_owned(),
    }
}

fn is_iso_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
}

/// Attendance percentage with one decimal place.
pub fn format_percentage(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_owned();
    }
    format!("{value:.1}%")
}

/// `attended / total days` summary line.
pub fn format_attendance_days(stats: &CompletionStats) -> String {
    format!("{} / {} days", stats.attended_days, stats.total_days)
}

/// Cell text for one column of a response row.
///
/// Absent keys, `null` and empty strings render as [`PLACEHOLDER`]; other
/// scalars render bare and nested values as compact JSON.
pub fn cell_text(row: &ResponseRow, column: &str) -> String {
    match row.get(column) {
        None | Some(serde_json::Value::Null) => PLACEHOLDER.to_owned(),
        Some(serde_json::Value::String(s)) if s.is_empty() => PLACEHOLDER.to_owned(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Question count label; an omitted column list is reported as such.
pub fn question_count_label(count: Option<usize>) -> String {
    count.map_or_else(|| "not provided".to_owned(), |n| n.to_string())
}
