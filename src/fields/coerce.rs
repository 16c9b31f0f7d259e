//! Best-effort coercion of stored values into requested types.
//!
//! Every function takes the value and a fallback, and returns the fallback
//! whenever the runtime kind does not match. Nothing here fails or panics.
//! A [`Value::Shared`] handle is accepted wherever the value it points to is.
//!
//! Cross-kind conversion is limited to numbers: any number renders as a
//! string, and any number widens to `f64`.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::fields::value::{HttpRequest, HttpResponse, Value};

/// Strings pass through; numbers render in their `Display` form.
///
/// Floats use the shortest decimal that round-trips, without exponent, so
/// `42.0` renders as `"42"` and `0.1f32` as `"0.1"`.
pub fn as_string_or(value: &Value, fallback: &str) -> String {
    match value.deref_shared() {
        Value::Str(s) => s.clone(),
        Value::I8(n) => n.to_string(),
        Value::I16(n) => n.to_string(),
        Value::I32(n) => n.to_string(),
        Value::I64(n) => n.to_string(),
        Value::U8(n) => n.to_string(),
        Value::U16(n) => n.to_string(),
        Value::U32(n) => n.to_string(),
        Value::U64(n) => n.to_string(),
        Value::F32(n) => n.to_string(),
        Value::F64(n) => n.to_string(),
        _ => fallback.to_owned(),
    }
}

/// Widen any number to `f64`.
pub fn as_f64_or(value: &Value, fallback: f64) -> f64 {
    match *value.deref_shared() {
        Value::I8(n) => f64::from(n),
        Value::I16(n) => f64::from(n),
        Value::I32(n) => f64::from(n),
        Value::I64(n) => n as f64,
        Value::U8(n) => f64::from(n),
        Value::U16(n) => f64::from(n),
        Value::U32(n) => f64::from(n),
        Value::U64(n) => n as f64,
        Value::F32(n) => f64::from(n),
        Value::F64(n) => n,
        _ => fallback,
    }
}

/// Any number, truncated toward zero.
///
/// Goes through [`as_f64_or`], so integers beyond 2^53 lose precision and
/// out-of-range floats saturate at the `i64` bounds.
pub fn as_int_or(value: &Value, fallback: i64) -> i64 {
    as_f64_or(value, fallback as f64) as i64
}

pub fn as_bool_or(value: &Value, fallback: bool) -> bool {
    match *value.deref_shared() {
        Value::Bool(b) => b,
        _ => fallback,
    }
}

pub fn as_string_map_or(
    value: &Value,
    fallback: Option<HashMap<String, String>>,
) -> Option<HashMap<String, String>> {
    match value.deref_shared() {
        Value::StringMap(map) => Some(map.clone()),
        _ => fallback,
    }
}

/// A copy of the stored instant, or the fallback (which may be `None`).
pub fn as_time_ptr_or(value: &Value, fallback: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
    match *value.deref_shared() {
        Value::Time(t) => Some(t),
        _ => fallback,
    }
}

/// The stored instant, or the fallback.
pub fn as_time_or(value: &Value, fallback: DateTime<Utc>) -> DateTime<Utc> {
    as_time_ptr_or(value, Some(fallback)).unwrap_or(fallback)
}

/// A handle to the stored request. Value and shared forms of the same
/// request yield the same allocation.
pub fn as_request_or(value: &Value, fallback: Option<Arc<HttpRequest>>) -> Option<Arc<HttpRequest>> {
    match value.deref_shared() {
        Value::Request(req) => Some(Arc::clone(req)),
        _ => fallback,
    }
}

pub fn as_response_or(
    value: &Value,
    fallback: Option<Arc<HttpResponse>>,
) -> Option<Arc<HttpResponse>> {
    match value.deref_shared() {
        Value::Response(resp) => Some(Arc::clone(resp)),
        _ => fallback,
    }
}
