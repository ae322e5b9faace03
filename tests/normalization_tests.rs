//! Conformance tests for the date normalization contract.
//!
//! Normalization is a total function over untrusted attribute text: valid
//! `YYYY-MM-DD` input becomes a calendar date, everything else survives as
//! trimmed pass-through text, and nothing ever errors.

use chrono::NaiveDate;
use ixbrl_context::DateValue;

#[test]
fn test_canonical_dates_parse() {
    let cases = [
        ("2022-01-01", (2022, 1, 1)),
        ("1999-12-31", (1999, 12, 31)),
        ("2024-02-29", (2024, 2, 29)),
        ("0099-01-01", (99, 1, 1)),
    ];

    for (raw, (y, m, d)) in cases {
        let value = DateValue::parse(Some(raw)).unwrap();
        assert_eq!(value.as_date(), NaiveDate::from_ymd_opt(y, m, d), "input: {raw}");
    }
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    for raw in ["  2022-01-01", "2022-01-01  ", "\t2022-01-01\n", "  2022-01-01  "] {
        let value = DateValue::parse(Some(raw)).unwrap();
        assert_eq!(
            value.as_date(),
            NaiveDate::from_ymd_opt(2022, 1, 1),
            "input: {raw:?}"
        );
        assert_eq!(value.to_string(), "2022-01-01");
    }
}

#[test]
fn test_non_dates_pass_through_trimmed() {
    let cases = [
        ("not-a-date", "not-a-date"),
        ("  three months ended  ", "three months ended"),
        ("31/12/2022", "31/12/2022"),
        ("2022-13-01", "2022-13-01"),
        ("2024-02-30", "2024-02-30"),
        ("2022-01-01 extra", "2022-01-01 extra"),
        ("2022-01", "2022-01"),
    ];

    for (raw, expected) in cases {
        let value = DateValue::parse(Some(raw)).unwrap();
        assert_eq!(value, DateValue::Text(expected.to_string()), "input: {raw:?}");
    }
}

#[test]
fn test_absent_input_yields_none() {
    assert_eq!(DateValue::parse(None), None);
    assert_eq!(DateValue::parse(Some("")), None);
}

#[test]
fn test_leap_day_validation() {
    assert!(DateValue::parse(Some("2024-02-29")).unwrap().is_date());
    assert!(DateValue::parse(Some("2023-02-29")).unwrap().is_text());
}

#[test]
fn test_canonical_form_matches_trimmed_input() {
    // For well-formed zero-padded input, display reproduces the text exactly
    for raw in ["2022-01-01", "2000-02-29", "1987-11-09"] {
        let value = DateValue::parse(Some(&format!(" {raw} "))).unwrap();
        assert_eq!(value.to_string(), raw);
    }
}

#[test]
fn test_serialized_form_is_plain_text() {
    let date = DateValue::parse(Some("2022-01-01")).unwrap();
    let text = DateValue::parse(Some("later")).unwrap();

    assert_eq!(serde_json::to_value(&date).unwrap(), "2022-01-01");
    assert_eq!(serde_json::to_value(&text).unwrap(), "later");
}

#[test]
fn test_serde_round_trip_reparses() {
    for raw in ["2022-01-01", "FY2022", "2024-02-30"] {
        let original = DateValue::parse(Some(raw)).unwrap();
        let json = serde_json::to_string(&original).unwrap();
        let back: DateValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original, "input: {raw}");
    }
}
