//! Date/time parsing for timestamp rules.
//!
//! Timestamps are compared as local wall-clock times. Offsets carried by
//! RFC 3339 input are converted to local time first.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse a timestamp literal. Returns `None` for anything unrecognized.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Seconds component of `signal - rule`.
///
/// Only the seconds field of the elapsed time is kept: minutes, hours and
/// days are discarded, and the sign follows the difference. A difference
/// of 2m 5s yields 5; -90.5s yields -30.
pub fn seconds_component(signal: NaiveDateTime, rule: NaiveDateTime) -> i64 {
    signal.signed_duration_since(rule).num_seconds() % 60
}
