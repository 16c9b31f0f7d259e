//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every section defaults, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct LogFieldsConfig {
    /// Caller enrichment settings.
    pub caller: CallerConfig,
}

/// Caller enrichment configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CallerConfig {
    /// Field receiving the calling function's name.
    pub func_field: String,

    /// Field receiving the source file path.
    pub file_field: String,

    /// Field receiving the source line.
    pub line_field: String,

    /// Frames to skip above the enricher's caller (0 = the caller itself).
    pub skip_frames: usize,

    /// Overwrite caller fields that are already present.
    pub override_existing: bool,
}

impl Default for CallerConfig {
    fn default() -> Self {
        Self {
            func_field: "caller_func".to_string(),
            file_field: "caller_file".to_string(),
            line_field: "caller_line".to_string(),
            skip_frames: 0,
            override_existing: false,
        }
    }
}
