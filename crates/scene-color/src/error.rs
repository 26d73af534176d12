//! Error types for color parsing.
//!
//! The legacy hex parsers ([`Color3::from_hex_string`] and
//! [`Color4::from_hex_string`]) never fail; they return a sentinel color
//! on malformed input. The strict `try_from_hex_string` variants return
//! [`ColorParseError`] instead, for callers that want to reject bad data
//! at the boundary.
//!
//! [`Color3::from_hex_string`]: crate::Color3::from_hex_string
//! [`Color4::from_hex_string`]: crate::Color4::from_hex_string
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`ColorParseError`] as the error type.
pub type Result<T> = std::result::Result<T, ColorParseError>;

/// Errors from strict hex color parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string does not start with `#`.
    #[error("hex color must start with '#': {input}")]
    MissingHashPrefix {
        /// The rejected input.
        input: String,
    },

    /// The string has the wrong number of characters.
    #[error("hex color has invalid length {actual}, expected {expected}: {input}")]
    InvalidLength {
        /// The rejected input.
        input: String,
        /// Expected total length including the `#`.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// A component is not valid hexadecimal.
    #[error("invalid hex digits in component '{component}': {input}")]
    InvalidDigits {
        /// The rejected input.
        input: String,
        /// The two-character component that failed to parse.
        component: String,
    },
}

impl ColorParseError {
    /// Creates a [`MissingHashPrefix`](Self::MissingHashPrefix) error.
    pub fn missing_hash(input: impl Into<String>) -> Self {
        Self::MissingHashPrefix { input: input.into() }
    }

    /// Creates an [`InvalidLength`](Self::InvalidLength) error.
    pub fn invalid_length(input: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::InvalidLength {
            input: input.into(),
            expected,
            actual,
        }
    }

    /// Creates an [`InvalidDigits`](Self::InvalidDigits) error.
    pub fn invalid_digits(input: impl Into<String>, component: impl Into<String>) -> Self {
        Self::InvalidDigits {
            input: input.into(),
            component: component.into(),
        }
    }
}
