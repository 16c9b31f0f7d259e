//! End-to-end tests: configuration, caller stamping on the live stack, and
//! reading the stamped record back.

use std::io::Write;

use logfields::config::load_config;
use logfields::fields::{clone_excluding, filter_with_values, get_int_or, get_string_or};
use logfields::{set_caller_info, CallerEnricher, CallerKeys, FieldSet, Value};

mod common;

#[inline(never)]
fn handle_request(enricher: &CallerEnricher, fields: &mut FieldSet) -> u32 {
    let line = line!() + 1;
    enricher.enrich(0, false, fields);
    line
}

#[inline(never)]
fn log_with_caller(enricher: &CallerEnricher, fields: &mut FieldSet) {
    enricher.enrich(1, false, fields);
}

#[inline(never)]
fn handle_via_facade(enricher: &CallerEnricher, fields: &mut FieldSet) -> u32 {
    let line = line!() + 1;
    log_with_caller(enricher, fields);
    line
}

#[test]
fn test_configured_keys_receive_call_site() {
    common::init_tracing();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[caller]\nfunc_field = \"fn\"\nfile_field = \"src\"\nline_field = \"ln\""
    )
    .unwrap();
    let config = load_config(file.path()).unwrap();
    let enricher = CallerEnricher::from_config(&config.caller);

    let mut fields = FieldSet::new().with("msg", "served");
    let line = handle_request(&enricher, &mut fields);

    assert!(get_string_or(&fields, "fn", "").ends_with("::handle_request"));
    assert!(get_string_or(&fields, "src", "").ends_with("caller_enrichment.rs"));
    assert_eq!(get_int_or(&fields, "ln", 0), i64::from(line));
    assert!(!fields.contains("caller_func"));
}

#[test]
fn test_facade_skip_stamps_facade_caller() {
    common::init_tracing();

    let enricher = CallerEnricher::new(CallerKeys::default());
    let mut fields = FieldSet::new();
    let line = handle_via_facade(&enricher, &mut fields);

    let function = get_string_or(&fields, "caller_func", "");
    assert!(function.ends_with("::handle_via_facade"), "{function}");
    assert_eq!(fields.get("caller_line"), Some(&Value::U32(line)));
}

#[test]
fn test_repeat_stamp_is_idempotent_and_override_moves_all_fields() {
    common::init_tracing();

    let enricher = CallerEnricher::new(CallerKeys::default());
    let mut fields = FieldSet::new();

    handle_request(&enricher, &mut fields);
    let first = fields.clone();
    handle_request(&enricher, &mut fields);
    assert_eq!(fields, first);

    let keys = CallerKeys::default();
    set_caller_info(0, true, &mut fields, &keys);
    let function = get_string_or(&fields, "caller_func", "");
    assert!(
        function.ends_with("::test_repeat_stamp_is_idempotent_and_override_moves_all_fields"),
        "{function}"
    );
    assert_ne!(fields.get("caller_line"), first.get("caller_line"));
    assert_eq!(fields.get("caller_file"), first.get("caller_file"));
    assert_eq!(fields.len(), 3);
}

#[test]
fn test_unresolvable_depth_leaves_reserved_fields_absent() {
    common::init_tracing();

    let keys = CallerKeys::default();
    let mut fields = FieldSet::new().with("msg", "lost");
    set_caller_info(1_000_000, false, &mut fields, &keys);

    assert!(!keys.any_present(&fields));
    assert_eq!(fields.len(), 1);
}

#[test]
fn test_record_pipeline() {
    common::init_tracing();

    let enricher = CallerEnricher::new(CallerKeys::default());
    let mut fields = FieldSet::new()
        .with("msg", "cache miss")
        .with("user", "")
        .with("retries", 0)
        .with("trace", Value::Null);
    handle_request(&enricher, &mut fields);

    let record = filter_with_values(&fields);
    assert!(!record.contains("user"));
    assert!(!record.contains("trace"));
    assert!(record.contains("retries"));

    let keys = enricher.keys();
    let payload = clone_excluding(
        Some(&record),
        &[keys.func.as_str(), keys.file.as_str(), keys.line.as_str()],
    );
    assert_eq!(
        payload,
        FieldSet::new().with("msg", "cache miss").with("retries", 0)
    );
}
