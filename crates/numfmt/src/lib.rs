//! Numeric-text front end for the `binary16` crate.
//!
//! This crate knows nothing about half-precision floats. It owns the two
//! text-facing halves of the contract:
//!
//! - [`scan`] — tokenize a decimal numeral under a [`NumberStyles`] bitset
//!   and a [`NumberFormat`] symbol table, yielding either a named special
//!   value or an exact, correctly rounded `f64`.
//! - [`Spec`] and the `render_*` functions — turn an exact decimal value
//!   (or a pre-computed shortest-digit [`Decimal`]) into display text for
//!   the `G`/`N`/`F`/`E`/`P`/`C` format specifiers.
//!
//! Callers pass configuration explicitly; there is no ambient locale state.

mod render;
mod scan;
mod style;
mod symbols;

pub use render::{
    render_currency, render_fixed, render_general, render_number, render_percent,
    render_scientific, Decimal, Spec, SpecKind,
};
pub use scan::{scan, Scanned};
pub use style::NumberStyles;
pub use symbols::NumberFormat;

use thiserror::Error;

/// Error type for numeric-text operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NumTextError {
    /// The input text is not a valid numeral under the given styles.
    #[error("input string was not in a correct format")]
    Syntax,
    /// The format specifier is not one of `G`, `N`, `F`, `E`, `P`, `C`
    /// (either case) with an optional precision count.
    #[error("unrecognized format specifier")]
    UnknownSpecifier,
}
