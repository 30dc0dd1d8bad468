use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use crate::errors::{EdutrackError, EdutrackResult};

const NAIVE_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Accepts RFC 3339, a naive ISO date-time (taken as UTC) or a bare date
/// (midnight UTC).
pub fn parse_deadline(raw: &str) -> EdutrackResult<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Ok(date.with_timezone(&Utc));
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            EdutrackError::validation_error("deadline", raw, "ISO 8601 date or date-time", Some("Use e.g. 2025-06-30 or 2025-06-30T23:59"))
        })
}
