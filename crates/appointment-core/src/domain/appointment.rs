//! Appointment Entity

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::codec::iso_date;

/// A single appointment on the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Unique identifier, millisecond-timestamp based
    pub id: i64,
    /// Title as entered (never blank)
    pub title: String,
    /// Calendar day of the appointment
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
}

impl Appointment {
    pub fn new(id: i64, title: String, date: NaiveDate) -> Self {
        Self { id, title, date }
    }

    /// Case-insensitive substring match. `term` must already be lowercased and trimmed.
    pub fn matches(&self, term: &str) -> bool {
        term.is_empty() || self.title.to_lowercase().contains(term)
    }

    /// Date as shown on the list, e.g. `May 1, 2024`
    pub fn display_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }

    /// Date as a plain `YYYY-MM-DD` string, the format date inputs expect
    pub fn date_input_value(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Parse user or persisted date text.
///
/// Accepts a bare `YYYY-MM-DD` or an RFC 3339 date-time; for the latter the
/// calendar day of the UTC instant is used. Returns `None` for blank or
/// unparseable text, and for years outside `0..=9999` (the persisted
/// date-time form has room for four unsigned digits only).
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.with_timezone(&Utc).date_naive())
        })
        .filter(|date| (0..=9999).contains(&date.year()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let appt = Appointment::new(1, "Dentist Checkup".to_string(), day(2024, 5, 1));
        assert!(appt.matches("dentist"));
        assert!(appt.matches("check"));
        assert!(appt.matches(""));
        assert!(!appt.matches("doctor"));
    }

    #[test]
    fn test_date_formats() {
        let appt = Appointment::new(1, "Dentist".to_string(), day(2024, 5, 1));
        assert_eq!(appt.display_date(), "May 1, 2024");
        assert_eq!(appt.date_input_value(), "2024-05-01");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-05-01"), Some(day(2024, 5, 1)));
        assert_eq!(parse_date(" 2024-05-01 "), Some(day(2024, 5, 1)));
        assert_eq!(parse_date("2024-05-01T00:00:00.000Z"), Some(day(2024, 5, 1)));
        assert_eq!(parse_date("2024-05-01T23:30:00-02:00"), Some(day(2024, 5, 2)));
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
        assert_eq!(parse_date("tomorrow"), None);
        assert_eq!(parse_date("2024-02-30"), None);
    }

    #[test]
    fn test_parse_date_year_bounds() {
        assert_eq!(parse_date("0000-01-01"), Some(day(0, 1, 1)));
        assert_eq!(parse_date("9999-12-31"), Some(day(9999, 12, 31)));
        assert_eq!(parse_date("-0001-01-01"), None);
        assert_eq!(parse_date("+10000-01-01"), None);
        assert_eq!(parse_date("10000-01-01"), None);
    }
}
