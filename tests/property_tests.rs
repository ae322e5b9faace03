//! Property-based tests - pragmatic approach testing the normalization and
//! export guarantees across a wide range of generated inputs.

use chrono::NaiveDate;
use ixbrl_context::{AttrMap, Context, DateValue};
use proptest::prelude::*;

prop_compose! {
    fn calendar_date()(year in 1000i32..=9999, month in 1u32..=12, day in 1u32..=28) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}

proptest! {
    // Every well-formed date normalizes, and its canonical form reproduces
    // the trimmed input
    #[test]
    fn prop_valid_dates_normalize(date in calendar_date(), pad in "[ \t\n]{0,4}") {
        let raw = format!("{pad}{}{pad}", date.format("%Y-%m-%d"));
        let value = DateValue::parse(Some(&raw)).unwrap();

        prop_assert_eq!(value.as_date(), Some(date));
        prop_assert_eq!(value.to_string(), raw.trim());
    }

    // Digit-free text can never be a date, so it always passes through trimmed
    #[test]
    fn prop_non_dates_pass_through(raw in "[a-zA-Z ]{1,30}") {
        let value = DateValue::parse(Some(&raw)).unwrap();
        prop_assert_eq!(value, DateValue::Text(raw.trim().to_string()));
    }

    // Construction accepts anything without panicking, and the export
    // round-trips through serde into an equal context
    #[test]
    fn prop_construction_total_and_round_trips(
        id in "\\PC{0,12}",
        instant in proptest::option::of("\\PC{0,16}"),
        startdate in proptest::option::of("\\PC{0,16}"),
        enddate in proptest::option::of("\\PC{0,16}"),
    ) {
        let context = Context::new(
            id,
            AttrMap::new(),
            None,
            instant.as_deref(),
            startdate.as_deref(),
            enddate.as_deref(),
        );

        let back: Context = serde_json::from_value(context.to_json()).unwrap();
        prop_assert_eq!(back, context);
    }

    // to_json and the derived Serialize impl always agree
    #[test]
    fn prop_to_json_matches_serde(instant in proptest::option::of("\\PC{0,16}")) {
        let context = Context::new("c", AttrMap::new(), None, instant.as_deref(), None, None);
        prop_assert_eq!(serde_json::to_value(&context).unwrap(), context.to_json());
    }
}
