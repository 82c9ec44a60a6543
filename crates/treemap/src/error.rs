//! Error types for the treemap facade.

use thiserror::Error;
use treemap_core::ColorParseError;

/// Errors raised while loading or validating a [`TreeMapConfig`](crate::TreeMapConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing or serialization failed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// A color field is not a hex color
    #[error("invalid color for '{field}': {source}")]
    Color {
        /// Field name
        field: String,
        /// Underlying parse failure
        source: ColorParseError,
    },

    /// A field holds a value outside its allowed range
    #[error("invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },
}
