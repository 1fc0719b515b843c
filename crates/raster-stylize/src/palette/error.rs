//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette validation.

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Character outside `0-9a-fA-F`, including signs
    #[error("invalid hex digit '{0}'")]
    InvalidDigit(char),
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for palette validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// Fewer than two colors; quantization is undefined below two.
    #[error("palette needs at least {min} colors, got {count}")]
    TooFewColors { count: usize, min: usize },
    /// More colors than the stylizer supports.
    #[error("palette supports at most {max} colors, got {count}")]
    TooManyColors { count: usize, max: usize },
    /// Duplicate color found at the specified index
    #[error("duplicate color found at index {index}")]
    DuplicateColor {
        /// Index where the duplicate was found
        index: usize,
    },
    /// Invalid hex color string
    #[error("invalid color: {0}")]
    ParseColor(#[from] ParseColorError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_error_messages() {
        let error = PaletteError::TooFewColors { count: 1, min: 2 };
        assert_eq!(error.to_string(), "palette needs at least 2 colors, got 1");

        let error = PaletteError::TooManyColors { count: 6, max: 5 };
        assert_eq!(error.to_string(), "palette supports at most 5 colors, got 6");

        let error = PaletteError::DuplicateColor { index: 3 };
        assert_eq!(error.to_string(), "duplicate color found at index 3");

        let error = PaletteError::from(ParseColorError::InvalidLength);
        assert_eq!(
            error.to_string(),
            "invalid color: invalid hex color length (expected 3 or 6 characters)"
        );
    }
}
