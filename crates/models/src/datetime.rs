//! Parsing of the `from`/`to` strings clients send.
//!
//! Accepted: RFC 3339 with an offset, a naive `YYYY-MM-DDTHH:MM[:SS[.fff]]`
//! (`T` or space separator) taken as UTC, and a bare `YYYY-MM-DD` taken as UTC midnight.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::errors::ModelError;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>, ModelError> {
    let s = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }
    Err(ModelError::InvalidDate(raw.to_string()))
}
