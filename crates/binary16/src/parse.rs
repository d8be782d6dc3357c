//! Decimal text to `Half`.
//!
//! Parsing is a two-stage pipeline: the numfmt scanner validates the text
//! against the style flags and produces the correctly rounded `f64` of the
//! exact decimal literal, and the narrowing converter rounds that to half
//! precision with ties to even. Literals whose magnitude exceeds the half
//! range simply narrow to the signed infinity; overflow is not an error.

use std::str::FromStr;

use binary16_numfmt::{scan, NumberFormat, NumberStyles, Scanned};

use crate::bits::Half;
use crate::error::HalfError;

impl Half {
    /// Parses with the default styles (`FLOAT | ALLOW_THOUSANDS`) and the
    /// invariant symbols.
    ///
    /// ```
    /// use binary16::Half;
    ///
    /// assert_eq!(Half::parse("2049.0").unwrap(), Half::from_f32(2048.0));
    /// assert!(Half::parse("Garbage").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Half, HalfError> {
        Half::parse_with(text, NumberStyles::default(), &NumberFormat::invariant())
    }

    /// Parses under explicit style flags and symbols.
    pub fn parse_with(
        text: &str,
        styles: NumberStyles,
        fmt: &NumberFormat,
    ) -> Result<Half, HalfError> {
        match scan(text, styles, fmt).map_err(|_| HalfError::Format)? {
            Scanned::Nan => Ok(Half::NAN),
            Scanned::Infinite { negative: false } => Ok(Half::INFINITY),
            Scanned::Infinite { negative: true } => Ok(Half::NEG_INFINITY),
            Scanned::Finite(value) => Ok(Half::from_f64(value)),
        }
    }

    /// Like [`Half::parse_with`], but the input may be absent, which is an
    /// error distinct from malformed text.
    pub fn parse_opt(
        text: Option<&str>,
        styles: NumberStyles,
        fmt: &NumberFormat,
    ) -> Result<Half, HalfError> {
        match text {
            None => Err(HalfError::NullInput),
            Some(text) => Half::parse_with(text, styles, fmt),
        }
    }

    /// Non-erroring variant of [`Half::parse`].
    pub fn try_parse(text: &str) -> Option<Half> {
        Half::parse(text).ok()
    }

    /// Non-erroring variant of [`Half::parse_with`].
    pub fn try_parse_with(text: &str, styles: NumberStyles, fmt: &NumberFormat) -> Option<Half> {
        Half::parse_with(text, styles, fmt).ok()
    }
}

impl FromStr for Half {
    type Err = HalfError;

    fn from_str(s: &str) -> Result<Half, HalfError> {
        Half::parse(s)
    }
}
