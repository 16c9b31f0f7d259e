//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → LogFieldsConfig (validated, immutable)
//!     → CallerEnricher::from_config / CallerKeys::from
//! ```
//!
//! # Design Decisions
//! - The logging facade owns reserved field names; this crate only reads them
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{CallerConfig, LogFieldsConfig};
pub use validation::{validate_config, ValidationError};
