//! Shared utilities for integration and property tests.

use std::collections::HashMap;
use std::sync::Once;

use logfields::{FieldSet, Value};
use proptest::prelude::*;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once per test binary.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "logfields=trace".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Field names drawn from a small alphabet so sets and exclusion lists overlap.
#[allow(dead_code)]
pub fn field_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e][a-e0-9]{0,2}").expect("Valid regex for field names")
}

/// Values covering every emptiness-relevant kind.
#[allow(dead_code)]
pub fn field_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<u8>().prop_map(Value::from),
        (-1e9f64..1e9f64).prop_map(Value::from),
        "[a-z]{0,3}".prop_map(Value::from),
        prop::collection::vec(any::<i32>(), 0..3).prop_map(Value::from),
        prop::collection::hash_map("[a-z]{1,3}", "[a-z]{0,3}", 0..3)
            .prop_map(|m: HashMap<String, String>| Value::from(m)),
        "[a-z]{0,3}".prop_map(|s: String| Value::shared(s)),
    ]
}

#[allow(dead_code)]
pub fn field_set() -> impl Strategy<Value = FieldSet> {
    prop::collection::hash_map(field_name(), field_value(), 0..12)
        .prop_map(FieldSet::from)
}
