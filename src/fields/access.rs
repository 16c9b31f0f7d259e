//! Typed lookups against a field set.
//!
//! Each `get_*_or` looks the name up and hands the stored value to the
//! matching coercion in [`crate::fields::coerce`]. A missing field and a
//! mismatched kind both produce the fallback.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::fields::coerce;
use crate::fields::set::FieldSet;
use crate::fields::value::{HttpRequest, HttpResponse, Value};

static NULL: Value = Value::Null;

/// Presence-aware lookup: `None` for a missing field.
pub fn get_field<'a>(fields: &'a FieldSet, name: &str) -> Option<&'a Value> {
    fields.get(name)
}

// Missing fields coerce like a stored null.
fn lookup<'a>(fields: &'a FieldSet, name: &str) -> &'a Value {
    fields.get(name).unwrap_or(&NULL)
}

pub fn get_string_or(fields: &FieldSet, name: &str, fallback: &str) -> String {
    coerce::as_string_or(lookup(fields, name), fallback)
}

pub fn get_f64_or(fields: &FieldSet, name: &str, fallback: f64) -> f64 {
    coerce::as_f64_or(lookup(fields, name), fallback)
}

pub fn get_int_or(fields: &FieldSet, name: &str, fallback: i64) -> i64 {
    coerce::as_int_or(lookup(fields, name), fallback)
}

pub fn get_bool_or(fields: &FieldSet, name: &str, fallback: bool) -> bool {
    coerce::as_bool_or(lookup(fields, name), fallback)
}

pub fn get_string_map_or(
    fields: &FieldSet,
    name: &str,
    fallback: Option<HashMap<String, String>>,
) -> Option<HashMap<String, String>> {
    coerce::as_string_map_or(lookup(fields, name), fallback)
}

pub fn get_time_or(fields: &FieldSet, name: &str, fallback: DateTime<Utc>) -> DateTime<Utc> {
    coerce::as_time_or(lookup(fields, name), fallback)
}

pub fn get_time_ptr_or(
    fields: &FieldSet,
    name: &str,
    fallback: Option<DateTime<Utc>>,
) -> Option<DateTime<Utc>> {
    coerce::as_time_ptr_or(lookup(fields, name), fallback)
}

pub fn get_request_or(
    fields: &FieldSet,
    name: &str,
    fallback: Option<Arc<HttpRequest>>,
) -> Option<Arc<HttpRequest>> {
    coerce::as_request_or(lookup(fields, name), fallback)
}

pub fn get_response_or(
    fields: &FieldSet,
    name: &str,
    fallback: Option<Arc<HttpResponse>>,
) -> Option<Arc<HttpResponse>> {
    coerce::as_response_or(lookup(fields, name), fallback)
}
