//! Error type shared by the fallible `Half` operations.

use thiserror::Error;

/// Errors returned by parsing, formatting, and dynamic comparison.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HalfError {
    /// A required input value was absent.
    #[error("value cannot be null")]
    NullInput,
    /// The text is not a valid numeral, or the format specifier is not
    /// recognized.
    #[error("input string was not in a correct format")]
    Format,
    /// A dynamic comparison received a value of a foreign type.
    #[error("object must be of type Half")]
    TypeMismatch,
    /// The destination buffer is too small for the rendered text.
    #[error("destination buffer is too small")]
    BufferTooSmall,
}
