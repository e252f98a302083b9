//! Date labels for discussion comments.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format a server timestamp as a short `M/D/YYYY` date.
///
/// Accepts SQLite `CURRENT_TIMESTAMP` text, RFC 3339, or a bare date.
/// Unparseable input is returned unchanged.
#[must_use]
pub fn format_comment_date(raw: &str) -> String {
    let raw = raw.trim();
    parse_date(raw).map_or_else(|| raw.to_owned(), |d| d.format("%-m/%-d/%Y").to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
