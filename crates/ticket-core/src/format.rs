//! # Date Formatting
//!
//! Receipt dates go through the [`DateFormatter`] trait so the totals and the
//! template never depend on a locale. The production formatter prints the
//! Spanish short form (`5/3/2024`, day first, no padding).
//!
//! ## Accepted Inputs
//! ```text
//! 2024-03-05                     DATE column
//! 2024-03-05 14:30:00            DATETIME column
//! 2024-03-05T14:30:00            ISO without offset
//! 2024-03-05T14:30:00.000Z       RFC 3339 (as drivers serialize DATE values)
//! ```

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Turns a stored sale date into the text printed on the receipt.
pub trait DateFormatter: Send + Sync {
    /// Returns `None` when the value cannot be interpreted as a date.
    fn format_date(&self, raw: &str) -> Option<String>;
}

/// `d/m/yyyy`, the `es-ES` short date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanishDateFormatter;

impl DateFormatter for SpanishDateFormatter {
    fn format_date(&self, raw: &str) -> Option<String> {
        let date = parse_date(raw.trim())?;
        Some(format!("{}/{}/{}", date.day(), date.month(), date.year()))
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt.date());
        }
    }
    // Drivers serialize DATE as UTC midnight; keep the calendar day as written.
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_date() {
        let f = SpanishDateFormatter;
        assert_eq!(f.format_date("2024-03-05").as_deref(), Some("5/3/2024"));
        assert_eq!(f.format_date("2023-12-25").as_deref(), Some("25/12/2023"));
    }

    #[test]
    fn test_datetime_variants() {
        let f = SpanishDateFormatter;
        assert_eq!(f.format_date("2024-03-05 14:30:00").as_deref(), Some("5/3/2024"));
        assert_eq!(f.format_date("2024-03-05T14:30:00").as_deref(), Some("5/3/2024"));
        assert_eq!(
            f.format_date("2024-03-05T00:00:00.000Z").as_deref(),
            Some("5/3/2024")
        );
    }

    #[test]
    fn test_garbage_is_none() {
        let f = SpanishDateFormatter;
        assert_eq!(f.format_date("not a date"), None);
        assert_eq!(f.format_date(""), None);
    }
}
