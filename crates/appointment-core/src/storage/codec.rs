//! Persisted Format
//!
//! The list is stored as a JSON array of `{ id, title, date }` objects. Dates
//! are written the way a JavaScript `Date` built from a date-only string
//! serializes (`2024-05-01T00:00:00.000Z`), so existing browser data keeps
//! loading.

use crate::domain::{Appointment, StoreResult};

/// Serialize the whole canonical list
pub fn encode(appointments: &[Appointment]) -> StoreResult<String> {
    Ok(serde_json::to_string(appointments)?)
}

/// Parse a persisted list
pub fn decode(raw: &str) -> StoreResult<Vec<Appointment>> {
    Ok(serde_json::from_str(raw)?)
}

/// Serde adapter for the `date` field
pub(crate) mod iso_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::domain::parse_date;

    /// What `serialize` writes
    const STORED_FORMAT: &str = "%Y-%m-%dT00:00:00.000Z";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(STORED_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&text, STORED_FORMAT)
            .ok()
            .or_else(|| parse_date(&text))
            .ok_or_else(|| de::Error::custom(format!("invalid date: {:?}", text)))
    }
}
