//! Property-based tests for field-set transformations and coercions.

use std::collections::HashSet;

use logfields::fields::coerce::{as_bool_or, as_int_or, as_string_map_or, as_string_or};
use logfields::fields::{clone_excluding, filter_with_values};
use logfields::Value;
use proptest::prelude::*;

mod common;

use common::{field_name, field_set};

proptest! {
    /// Property: filtering keeps exactly the non-empty entries, unchanged
    #[test]
    fn prop_filter_keeps_exactly_non_empty(fields in field_set()) {
        let filtered = filter_with_values(&fields);

        for (name, value) in &filtered {
            prop_assert!(!value.is_empty(), "{name} kept with empty value");
            prop_assert!(!value.is_null());
        }
        for (name, value) in &fields {
            if !value.is_empty() {
                prop_assert_eq!(filtered.get(name), Some(value));
            } else {
                prop_assert!(!filtered.contains(name));
            }
        }
    }

    /// Property: filtering never touches its input
    #[test]
    fn prop_filter_leaves_input_untouched(fields in field_set()) {
        let before = fields.clone();
        let _ = filter_with_values(&fields);
        prop_assert_eq!(fields, before);
    }

    /// Property: result ∪ (excluded ∩ original) == original, and nothing excluded survives
    #[test]
    fn prop_clone_excluding_partitions_keys(
        fields in field_set(),
        exclude in prop::collection::vec(field_name(), 0..6),
    ) {
        let exclude_refs: Vec<&str> = exclude.iter().map(String::as_str).collect();
        let result = clone_excluding(Some(&fields), &exclude_refs);

        let original: HashSet<&str> = fields.names().collect();
        let kept: HashSet<&str> = result.names().collect();
        let dropped: HashSet<&str> = exclude_refs
            .iter()
            .copied()
            .filter(|name| original.contains(name))
            .collect();

        prop_assert_eq!(&kept | &dropped, original);
        for name in &exclude_refs {
            prop_assert!(!result.contains(name));
        }
        for (name, value) in &result {
            prop_assert_eq!(fields.get(name), Some(value));
        }
    }

    /// Property: a missing set clones to an empty one for any exclusion list
    #[test]
    fn prop_clone_excluding_missing_is_empty(exclude in prop::collection::vec(field_name(), 0..6)) {
        let exclude_refs: Vec<&str> = exclude.iter().map(String::as_str).collect();
        prop_assert!(clone_excluding(None, &exclude_refs).is_empty());
    }

    /// Property: float to int truncates toward zero regardless of fallback
    #[test]
    fn prop_int_truncates_toward_zero(n in -1e12f64..1e12f64, fallback in any::<i64>()) {
        prop_assert_eq!(as_int_or(&Value::from(n), fallback), n.trunc() as i64);
    }

    /// Property: integer rendering matches the integer's own Display
    #[test]
    fn prop_integers_render_as_decimal(n in any::<i64>(), m in any::<u32>()) {
        prop_assert_eq!(as_string_or(&Value::from(n), "x"), n.to_string());
        prop_assert_eq!(as_string_or(&Value::shared(m), "x"), m.to_string());
    }

    /// Property: rendered floats parse back to the same number
    #[test]
    fn prop_floats_round_trip(n in any::<f64>().prop_filter("finite", |n| n.is_finite())) {
        let rendered = as_string_or(&Value::from(n), "");
        prop_assert_eq!(rendered.parse::<f64>().unwrap(), n);
    }

    /// Property: mismatched kinds return the fallback untouched
    #[test]
    fn prop_strings_fall_back_for_bool_and_map(s in "[a-z ]{0,12}", fallback in any::<bool>()) {
        prop_assert_eq!(as_bool_or(&Value::from(s.as_str()), fallback), fallback);
        prop_assert_eq!(as_string_map_or(&Value::from(s), None), None);
    }
}

#[test]
fn test_numeric_kinds_render_as_42() {
    for value in [
        Value::from(42),
        Value::from(42i64),
        Value::from(42u32),
        Value::from(42.0f64),
        Value::from(42.0f32),
    ] {
        assert_eq!(as_string_or(&value, ""), "42", "{value:?}");
    }
}

#[test]
fn test_documented_fallbacks() {
    assert!(as_bool_or(&Value::from("not a bool"), true));
    assert_eq!(as_string_map_or(&Value::from(42), None), None);
    assert_eq!(as_int_or(&Value::from(42.7f64), -5), 42);
}
