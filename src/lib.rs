//! Field-set support for structured logging.
//!
//! A log call site builds a [`FieldSet`], optionally stamps its own location
//! with a [`CallerEnricher`], reads typed values back with the `get_*_or`
//! family, and hands the set to a sink outside this crate.

pub mod caller;
pub mod config;
pub mod fields;

pub use caller::{set_caller_info, BacktraceCapture, CallSite, CallSiteCapture, CallerEnricher, CallerKeys};
pub use config::{CallerConfig, ConfigError, LogFieldsConfig};
pub use fields::{FieldSet, Value};
