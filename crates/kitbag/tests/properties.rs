//! Property and table tests for kitbag's conversion helpers.

use kitbag::prelude::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

// ============================================================================
// BASE64: decode inverts encode for every UTF-8 input
// ============================================================================

proptest! {
    #[test]
    fn base64_round_trips(original in ".*") {
        let encoded = to_base64(&original);
        prop_assert!(encoded.is_ascii());
        prop_assert_eq!(from_base64(&encoded).unwrap(), original);
    }

    #[test]
    fn base64_rejects_foreign_characters(junk in "[!@#$%^&* ]{1,8}") {
        let error = from_base64(&junk).unwrap_err();
        prop_assert_eq!(error.summary(), Some("could not decode base64 input"));
    }
}

// ============================================================================
// SORTING: keyed sorts order by key and never reorder equal keys
// ============================================================================

proptest! {
    #[test]
    fn forward_sort_is_stable(keys in proptest::collection::vec(0u8..8, 0..64)) {
        let entries: Vec<(u8, usize)> = keys
            .into_iter()
            .enumerate()
            .map(|(index, key)| (key, index))
            .collect();

        let sorted = entries.sorted_on(|entry| entry.0, Order::Forward);
        for window in sorted.windows(2) {
            prop_assert!(window[0].0 <= window[1].0);
            if window[0].0 == window[1].0 {
                prop_assert!(window[0].1 < window[1].1);
            }
        }
    }

    #[test]
    fn reverse_sort_is_stable(keys in proptest::collection::vec(0u8..8, 0..64)) {
        let entries: Vec<(u8, usize)> = keys
            .into_iter()
            .enumerate()
            .map(|(index, key)| (key, index))
            .collect();

        let sorted = entries.sorted_on(|entry| entry.0, Order::Reverse);
        for window in sorted.windows(2) {
            prop_assert!(window[0].0 >= window[1].0);
            if window[0].0 == window[1].0 {
                prop_assert!(window[0].1 < window[1].1);
            }
        }
    }

    #[test]
    fn sorted_on_preserves_length_and_elements(values in proptest::collection::vec(any::<i32>(), 0..64)) {
        let mut sorted = values.sorted_on(|value| *value, Order::Forward);
        prop_assert_eq!(sorted.len(), values.len());

        let mut expected = values.clone();
        expected.sort_unstable();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, expected);
    }
}

// ============================================================================
// CASE CONVERSION: snake_case output is a fixed point
// ============================================================================

proptest! {
    #[test]
    fn snake_case_is_idempotent(input in "[A-Za-z0-9_]{0,24}") {
        let once = input.to_snake_case();
        prop_assert_eq!(once.to_snake_case(), once);
    }

    #[test]
    fn snake_case_output_has_no_uppercase(input in "[A-Za-z0-9_]{0,24}") {
        prop_assert!(!input.to_snake_case().contains(char::is_uppercase));
    }
}

// ============================================================================
// ENVIRONMENT COERCION: documented truthy and fallback forms
// ============================================================================

#[rstest]
#[case("1", true)]
#[case("true", true)]
#[case("YES", true)]
#[case("0", false)]
#[case("false", false)]
#[case("NO", false)]
#[case("", false)]
#[case("maybe", false)]
// Recognition is exact: recased variants count as unrecognized.
#[case("True", false)]
#[case("TRUE", false)]
#[case("yes", false)]
fn flag_coercion_matches_documented_forms(#[case] raw: &str, #[case] expected: bool) {
    assert_eq!(Value::from(raw).to_flag(), expected);
}

#[rstest]
#[case("42", 42)]
#[case("-7", -7)]
#[case("0", 0)]
#[case("4.5", 0)]
#[case("forty-two", 0)]
fn integer_coercion_falls_back_to_zero(#[case] raw: &str, #[case] expected: i64) {
    assert_eq!(Value::from(raw).to_integer(), expected);
}

#[rstest]
#[case("0.5", 0.5)]
#[case("-2", -2.0)]
#[case("nope", 0.0)]
fn float_coercion_falls_back_to_zero(#[case] raw: &str, #[case] expected: f64) {
    assert_eq!(Value::from(raw).to_float(), expected);
}

// ============================================================================
// SETTINGS: a static table resolves names through the snapshot
// ============================================================================

const SETTINGS_TABLE: &[Setting] = &[
    Setting::flag("verbose", "VERBOSE"),
    Setting::integer("retries", "RETRY_COUNT"),
];

#[rstest]
fn settings_resolve_through_snapshot() {
    let settings = Settings::new(
        Environment::from_vars([
            ("APP_VERBOSE".to_owned(), "1".to_owned()),
            ("APP_RETRY_COUNT".to_owned(), "3".to_owned()),
        ])
        .with_prefix("app"),
        SETTINGS_TABLE,
    );

    assert!(settings.flag("verbose"));
    assert_eq!(settings.integer("retries"), 3);
    assert_eq!(settings.get("unlisted"), None);
}
