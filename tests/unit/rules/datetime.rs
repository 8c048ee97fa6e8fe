//! Unit tests for timestamp parsing and the seconds-component difference

use chrono::{NaiveDate, NaiveDateTime};
use junkfilter::rules::datetime::{parse_datetime, seconds_component};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

#[test]
fn test_parses_common_formats() {
    let expected = at(2017, 6, 1, 10, 20, 37);
    assert_eq!(parse_datetime("2017-06-01 10:20:37"), Some(expected));
    assert_eq!(parse_datetime("2017-06-01T10:20:37"), Some(expected));
    assert_eq!(parse_datetime("06/01/2017 10:20:37"), Some(expected));
    assert_eq!(parse_datetime("06/01/2017 10:20:37 AM"), Some(expected));
    assert_eq!(parse_datetime("  2017-06-01 10:20:37  "), Some(expected));
}

#[test]
fn test_parses_fractional_seconds_and_bare_dates() {
    let parsed = parse_datetime("2017-06-01 10:20:37.250").unwrap();
    assert_eq!(parsed.and_utc().timestamp(), at(2017, 6, 1, 10, 20, 37).and_utc().timestamp());
    assert_eq!(parse_datetime("2017-06-01"), Some(at(2017, 6, 1, 0, 0, 0)));
    assert_eq!(parse_datetime("06/01/2017"), Some(at(2017, 6, 1, 0, 0, 0)));
}

#[test]
fn test_rfc3339_inputs_compare_consistently() {
    let a = parse_datetime("2020-01-01T00:00:10Z").unwrap();
    let b = parse_datetime("2020-01-01T01:00:00+01:00").unwrap();
    assert_eq!(seconds_component(a, b), 10);
}

#[test]
fn test_rejects_garbage() {
    assert_eq!(parse_datetime(""), None);
    assert_eq!(parse_datetime("   "), None);
    assert_eq!(parse_datetime("yesterday"), None);
    assert_eq!(parse_datetime("2017-13-45 10:00:00"), None);
    assert_eq!(parse_datetime("42"), None);
}

#[test]
fn test_seconds_component_discards_larger_units() {
    let rule = at(2020, 1, 1, 0, 0, 0);
    assert_eq!(seconds_component(at(2020, 1, 1, 0, 2, 5), rule), 5);
    assert_eq!(seconds_component(at(2020, 1, 3, 7, 0, 0), rule), 0);
    assert_eq!(seconds_component(at(2020, 1, 1, 0, 0, 59), rule), 59);
}

#[test]
fn test_seconds_component_keeps_sign() {
    let rule = at(2020, 1, 1, 0, 0, 0);
    // -1m 30s
    assert_eq!(seconds_component(at(2019, 12, 31, 23, 58, 30), rule), -30);
    let rule_with_fraction = at(2020, 1, 1, 0, 1, 30) + chrono::Duration::milliseconds(500);
    // -90.5s truncates toward zero before taking the seconds field
    assert_eq!(seconds_component(at(2020, 1, 1, 0, 0, 0), rule_with_fraction), -30);
}
