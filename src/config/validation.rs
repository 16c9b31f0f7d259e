//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reserved field names must be usable as keys and must not collide
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LogFieldsConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::LogFieldsConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A reserved field name is empty or whitespace.
    #[error("caller.{setting} must not be empty")]
    EmptyFieldName { setting: &'static str },

    /// Two reserved fields share a name, so one stamp would clobber another.
    #[error("caller.{first} and caller.{second} both use field name {name:?}")]
    DuplicateFieldName {
        name: String,
        first: &'static str,
        second: &'static str,
    },
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &LogFieldsConfig) -> Result<(), Vec<ValidationError>> {
    let caller = &config.caller;
    let names = [
        ("func_field", caller.func_field.as_str()),
        ("file_field", caller.file_field.as_str()),
        ("line_field", caller.line_field.as_str()),
    ];

    let mut errors = Vec::new();

    for (setting, name) in names {
        if name.trim().is_empty() {
            errors.push(ValidationError::EmptyFieldName { setting });
        }
    }

    for (i, (first, a)) in names.iter().enumerate() {
        for (second, b) in &names[i + 1..] {
            if !a.trim().is_empty() && a == b {
                errors.push(ValidationError::DuplicateFieldName {
                    name: a.to_string(),
                    first: *first,
                    second: *second,
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
