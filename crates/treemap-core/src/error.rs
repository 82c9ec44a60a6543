//! Error types for treemap-core.

use thiserror::Error;

/// Errors raised by geometric operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// Split fraction outside the open interval (0, 1).
    #[error("illegal split fraction {0} (must be > 0 and < 1)")]
    InvalidFraction(f32),
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Invalid hex characters
    #[error("invalid hex characters")]
    InvalidHex,
    /// Invalid string length
    #[error("invalid hex string length (expected 6 or 8)")]
    InvalidLength,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_error_display() {
        let err = GeometryError::InvalidFraction(1.5);
        assert_eq!(
            err.to_string(),
            "illegal split fraction 1.5 (must be > 0 and < 1)"
        );
    }

    #[test]
    fn test_color_parse_error_display() {
        assert_eq!(ColorParseError::InvalidHex.to_string(), "invalid hex characters");
        assert!(ColorParseError::InvalidLength.to_string().contains("6 or 8"));
    }
}
