//! IEEE 754-2008 half-precision (binary16) floating point.
//!
//! [`Half`] is a 16-bit storage format: 1 sign bit, 5 exponent bits, 10
//! mantissa bits. The crate provides the full value-type surface:
//!
//! - bit-level constants, predicates, and [`HalfClass`] classification;
//! - exact widening to `f32`/`f64` and correctly rounded (ties to even)
//!   narrowing back, both as independent bit algorithms;
//! - style-driven decimal parsing and the standard `G`/`F`/`E`/`N`/`P`/`C`
//!   format specifiers, via the `binary16-numfmt` crate;
//! - IEEE comparison operators plus a total order for sorting;
//! - arithmetic operators, an exponential/logarithmic function family,
//!   and NaN-aware min/max reducers.
//!
//! ```
//! use binary16::Half;
//!
//! let x = Half::parse("1,027.5").unwrap();
//! assert_eq!(f32::from(x), 1028.0); // ties to even
//! assert_eq!(x.to_string(), "1028");
//! ```

mod bits;
mod cmp;
mod error;
mod fmt;
mod math;
mod narrow;
mod parse;
mod widen;

pub use bits::{Half, HalfClass};
pub use error::HalfError;

// The text-layer configuration types are part of the public surface.
pub use binary16_numfmt::{NumberFormat, NumberStyles};
