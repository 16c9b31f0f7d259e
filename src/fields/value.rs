//! Field values.
//!
//! A field set stores heterogeneous values. `Value` is the closed set of
//! kinds a log record can carry, built at the field-set boundary through the
//! `From` conversions below.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};

/// HTTP request carried as a field value.
pub type HttpRequest = http::Request<Bytes>;

/// HTTP response carried as a field value.
pub type HttpResponse = http::Response<Bytes>;

/// A value stored under a field name.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absent value. Distinct from a missing key.
    #[default]
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Str(String),
    Time(DateTime<Utc>),
    StringMap(HashMap<String, String>),
    List(Vec<Value>),
    Map(HashMap<String, Value>),
    Request(Arc<HttpRequest>),
    Response(Arc<HttpResponse>),
    /// Shared handle to another value.
    ///
    /// Coercions accept the handle wherever they accept the value it points
    /// to, looking through one level only.
    Shared(Arc<Value>),
    /// Anything the closed set above does not name.
    Other(Opaque),
}

impl Value {
    /// Wrap a value in a shared handle.
    pub fn shared(value: impl Into<Value>) -> Self {
        Value::Shared(Arc::new(value.into()))
    }

    /// Wrap an arbitrary payload as an opaque value.
    pub fn other<T: Any + Send + Sync>(payload: T) -> Self {
        Value::Other(Opaque::new(payload))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Structural emptiness.
    ///
    /// Null and zero-length containers (string, list, map, string map) are
    /// empty. Numeric zero and `false` are values, not emptiness. A shared
    /// handle is never empty, whatever it points to.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Str(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Map(map) => map.is_empty(),
            Value::StringMap(map) => map.is_empty(),
            _ => false,
        }
    }

    /// The value with one level of sharing removed.
    pub(crate) fn deref_shared(&self) -> &Value {
        match self {
            Value::Shared(inner) => inner,
            other => other,
        }
    }

    /// Short name of the runtime kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::I8(_) => "i8",
            Value::I16(_) => "i16",
            Value::I32(_) => "i32",
            Value::I64(_) => "i64",
            Value::U8(_) => "u8",
            Value::U16(_) => "u16",
            Value::U32(_) => "u32",
            Value::U64(_) => "u64",
            Value::F32(_) => "f32",
            Value::F64(_) => "f64",
            Value::Str(_) => "string",
            Value::Time(_) => "time",
            Value::StringMap(_) => "string_map",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Request(_) => "request",
            Value::Response(_) => "response",
            Value::Shared(_) => "shared",
            Value::Other(_) => "other",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value::*;

        match (self, other) {
            (Null, Null) => true,
            (Bool(a), Bool(b)) => a == b,
            (I8(a), I8(b)) => a == b,
            (I16(a), I16(b)) => a == b,
            (I32(a), I32(b)) => a == b,
            (I64(a), I64(b)) => a == b,
            (U8(a), U8(b)) => a == b,
            (U16(a), U16(b)) => a == b,
            (U32(a), U32(b)) => a == b,
            (U64(a), U64(b)) => a == b,
            (F32(a), F32(b)) => a == b,
            (F64(a), F64(b)) => a == b,
            (Str(a), Str(b)) => a == b,
            (Time(a), Time(b)) => a == b,
            (StringMap(a), StringMap(b)) => a == b,
            (List(a), List(b)) => a == b,
            (Map(a), Map(b)) => a == b,
            // http messages have no equality of their own
            (Request(a), Request(b)) => Arc::ptr_eq(a, b),
            (Response(a), Response(b)) => Arc::ptr_eq(a, b),
            (Shared(a), Shared(b)) => Arc::ptr_eq(a, b) || a == b,
            (Other(a), Other(b)) => a == b,
            _ => false,
        }
    }
}

/// Opaque payload of a kind the field model does not know about.
#[derive(Clone)]
pub struct Opaque(Arc<dyn Any + Send + Sync>);

impl Opaque {
    pub fn new<T: Any + Send + Sync>(payload: T) -> Self {
        Self(Arc::new(payload))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Opaque(..)")
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => Str,
    DateTime<Utc> => Time,
    HashMap<String, String> => StringMap,
    HashMap<String, Value> => Map,
    Arc<HttpRequest> => Request,
    Arc<HttpResponse> => Response,
    Opaque => Other,
}

// Platform-width integers are stored at 64 bits.
impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Value::I64(v as i64)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::U64(v as u64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl From<HttpRequest> for Value {
    fn from(v: HttpRequest) -> Self {
        Value::Request(Arc::new(v))
    }
}

impl From<HttpResponse> for Value {
    fn from(v: HttpResponse) -> Self {
        Value::Response(Arc::new(v))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
