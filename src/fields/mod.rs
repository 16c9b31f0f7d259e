//! Field set model and accessors.
//!
//! # Data Flow
//! ```text
//! log call site
//!     → set.rs (FieldSet built from name/value pairs)
//!     → [caller enrichment stamps provenance] (crate::caller)
//!     → filter.rs (drop empty values, exclude names; fresh sets)
//!     → access.rs (typed reads, falling back on mismatch)
//!         → coerce.rs (value → requested type)
//!     → external sink
//! ```
//!
//! # Design Decisions
//! - Values are a closed enum built at the boundary, not `dyn Any`
//! - Coercions never fail: mismatches return the caller's fallback
//! - Only the caller enricher mutates a set; everything here copies

pub mod access;
pub mod coerce;
pub mod filter;
pub mod set;
pub mod value;

pub use access::{
    get_bool_or, get_f64_or, get_field, get_int_or, get_request_or, get_response_or,
    get_string_map_or, get_string_or, get_time_or, get_time_ptr_or,
};
pub use filter::{clone_excluding, clone_fields, contains_name, filter_with_values};
pub use set::FieldSet;
pub use value::{HttpRequest, HttpResponse, Opaque, Value};
