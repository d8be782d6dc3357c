//! `Half` to decimal text.
//!
//! The default (`G`) rendering uses the shortest digit string that parses
//! back to the same bit pattern, found by widening to the exact `f64`
//! value and probing increasing precisions; five significant digits always
//! suffice for binary16. The remaining specifiers (`F`, `E`, `N`, `P`,
//! `C`) render from the exact `f64` expansion, which the standard
//! formatter produces digit-exactly because every half value is dyadic.

use std::fmt;

use binary16_numfmt::{
    render_currency, render_fixed, render_general, render_number, render_percent,
    render_scientific, Decimal, NumberFormat, Spec, SpecKind,
};

use crate::bits::Half;
use crate::error::HalfError;

/// Splits the `{:e}` rendering of a magnitude into a [`Decimal`].
fn sci_decimal(body: &str, negative: bool) -> Decimal {
    let (mantissa, exp) = body.split_once('e').unwrap_or((body, "0"));
    let exponent: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let trimmed = digits.trim_end_matches('0');
    Decimal {
        negative,
        digits: if trimmed.is_empty() { "0".into() } else { trimmed.into() },
        exponent,
    }
}

impl Half {
    /// The shortest decimal digits that round-trip to this bit pattern.
    fn shortest_decimal(self) -> Decimal {
        let negative = self.is_sign_negative();
        if self.is_zero() {
            return Decimal { negative, digits: "0".into(), exponent: 0 };
        }
        let magnitude = self.abs();
        let exact = magnitude.to_f64();
        for precision in 0..5 {
            let body = format!("{:.*e}", precision, exact);
            let back = body.parse::<f64>().unwrap_or(0.0);
            if Half::from_f64(back).to_bits() == magnitude.to_bits() {
                return sci_decimal(&body, negative);
            }
        }
        // Five significant digits are always exact for binary16.
        sci_decimal(&format!("{:.4e}", exact), negative)
    }

    /// Formats with an explicit specifier and symbol table.
    ///
    /// The specifier is a letter from `G`, `F`, `E`, `N`, `P`, `C` (either
    /// case) with an optional precision, or empty for `G`. Unrecognized
    /// specifiers fail with [`HalfError::Format`].
    ///
    /// ```
    /// use binary16::{Half, NumberFormat};
    ///
    /// let fmt = NumberFormat::invariant();
    /// let v = Half::from_f32(2468.0);
    /// assert_eq!(v.format("N", &fmt).unwrap(), "2,468.00");
    /// assert_eq!(v.format("E", &fmt).unwrap(), "2.468000E+003");
    /// ```
    pub fn format(self, spec: &str, fmt: &NumberFormat) -> Result<String, HalfError> {
        let spec = Spec::parse(spec).map_err(|_| HalfError::Format)?;
        if self.is_nan() {
            return Ok(fmt.nan_symbol.clone());
        }
        if self.is_positive_infinity() {
            return Ok(fmt.positive_infinity_symbol.clone());
        }
        if self.is_negative_infinity() {
            return Ok(fmt.negative_infinity_symbol.clone());
        }
        let value = self.to_f64();
        Ok(match spec.kind {
            SpecKind::General => {
                // With an explicit digit count, G switches to scientific
                // once the exponent reaches that count.
                let (dec, sci_at) = match spec.precision {
                    None | Some(0) => (self.shortest_decimal(), i32::MAX),
                    Some(p) => {
                        let body = format!("{:.*e}", p - 1, value.abs());
                        (sci_decimal(&body, self.is_sign_negative()), p as i32)
                    }
                };
                render_general(&dec, spec.upper, sci_at, fmt)
            }
            SpecKind::Fixed => render_fixed(value, spec.precision.unwrap_or(2), fmt),
            SpecKind::Scientific => {
                render_scientific(value, spec.precision.unwrap_or(6), spec.upper, fmt)
            }
            SpecKind::Number => render_number(value, spec.precision.unwrap_or(2), fmt),
            SpecKind::Percent => render_percent(value, spec.precision.unwrap_or(2), fmt),
            SpecKind::Currency => render_currency(value, spec.precision.unwrap_or(2), fmt),
        })
    }

    /// Formats into a caller-provided byte buffer, returning the number of
    /// bytes written. Fails with [`HalfError::BufferTooSmall`] without
    /// writing anything when the rendering does not fit.
    pub fn format_into(
        self,
        buf: &mut [u8],
        spec: &str,
        fmt: &NumberFormat,
    ) -> Result<usize, HalfError> {
        let text = self.format(spec, fmt)?;
        let bytes = text.as_bytes();
        if bytes.len() > buf.len() {
            return Err(HalfError::BufferTooSmall);
        }
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(bytes.len())
    }
}

impl fmt::Display for Half {
    /// Shortest round-trip rendering with the invariant symbols.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            return f.write_str("NaN");
        }
        if self.is_positive_infinity() {
            return f.write_str("Infinity");
        }
        if self.is_negative_infinity() {
            return f.write_str("-Infinity");
        }
        let fmt = NumberFormat::invariant();
        f.write_str(&render_general(&self.shortest_decimal(), true, i32::MAX, &fmt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(v: f64) -> Half {
        Half::from_f64(v)
    }

    #[test]
    fn display_shortest_round_trip() {
        assert_eq!(h(0.0).to_string(), "0");
        assert_eq!(Half::NEG_ZERO.to_string(), "-0");
        assert_eq!(Half::ONE.to_string(), "1");
        assert_eq!(h(1.5).to_string(), "1.5");
        assert_eq!(h(-4570.0).to_string(), "-4570");
        assert_eq!(h(2048.0).to_string(), "2048");
        assert_eq!(Half::MAX.to_string(), "65500");
        assert_eq!(Half::MIN.to_string(), "-65500");
        assert_eq!(Half::EPSILON.to_string(), "6E-08");
        assert_eq!(Half::NAN.to_string(), "NaN");
        assert_eq!(Half::INFINITY.to_string(), "Infinity");
        assert_eq!(Half::NEG_INFINITY.to_string(), "-Infinity");
    }

    #[test]
    fn display_reparses_to_the_same_bits() {
        for bits in [0x0001u16, 0x03FF, 0x0400, 0x3555, 0x3C01, 0x7BFF, 0x8001, 0xBC00] {
            let v = Half::from_bits(bits);
            let back = Half::parse(&v.to_string()).unwrap();
            assert_eq!(back.to_bits(), bits, "{bits:#06X} -> {}", v);
        }
    }

    #[test]
    fn standard_specifiers() {
        let fmt = NumberFormat::invariant();
        let v = h(2468.0);
        assert_eq!(v.format("G", &fmt).unwrap(), "2468");
        assert_eq!(v.format("N", &fmt).unwrap(), "2,468.00");
        assert_eq!(v.format("N0", &fmt).unwrap(), "2,468");
        assert_eq!(v.format("F", &fmt).unwrap(), "2468.00");
        assert_eq!(v.format("F4", &fmt).unwrap(), "2468.0000");
        assert_eq!(v.format("E", &fmt).unwrap(), "2.468000E+003");
        assert_eq!(v.format("e2", &fmt).unwrap(), "2.47e+003");
        assert_eq!(v.format("P", &fmt).unwrap(), "246,800.00 %");
        assert_eq!(v.format("C", &fmt).unwrap(), "\u{a4}2,468.00");
        assert_eq!(v.format("", &fmt).unwrap(), "2468");
        assert_eq!((-v).format("N", &fmt).unwrap(), "-2,468.00");
        assert_eq!((-v).format("C", &fmt).unwrap(), "(\u{a4}2,468.00)");
    }

    #[test]
    fn general_with_significant_digits() {
        let fmt = NumberFormat::invariant();
        assert_eq!(Half::MAX.format("G2", &fmt).unwrap(), "6.6E+04");
        assert_eq!(Half::MAX.format("g2", &fmt).unwrap(), "6.6e+04");
        assert_eq!(h(1.5).format("G2", &fmt).unwrap(), "1.5");
        assert_eq!(h(2468.0).format("G5", &fmt).unwrap(), "2468");
        // Zero precision falls back to the shortest form.
        assert_eq!(h(2468.0).format("G0", &fmt).unwrap(), "2468");
    }

    #[test]
    fn lower_case_marker_and_tiny_values() {
        let fmt = NumberFormat::invariant();
        assert_eq!(Half::EPSILON.format("G", &fmt).unwrap(), "6E-08");
        assert_eq!(Half::EPSILON.format("g", &fmt).unwrap(), "6e-08");
        assert_eq!(h(0.5).format("E1", &fmt).unwrap(), "5.0E-001");
        assert_eq!(h(0.5).format("e1", &fmt).unwrap(), "5.0e-001");
    }

    #[test]
    fn custom_symbols_flow_through() {
        let mut fmt = NumberFormat::invariant();
        fmt.negative_sign = "#".into();
        fmt.group_separator = "*".into();
        fmt.decimal_separator = "~".into();
        assert_eq!(h(-2468.0).format("N", &fmt).unwrap(), "#2*468~00");
        fmt.number_negative_pattern = 0;
        assert_eq!(h(-2468.0).format("N", &fmt).unwrap(), "(2*468~00)");
    }

    #[test]
    fn specials_ignore_the_specifier() {
        let fmt = NumberFormat::invariant();
        for spec in ["G", "N", "F", "E", "P", "C"] {
            assert_eq!(Half::NAN.format(spec, &fmt).unwrap(), "NaN");
            assert_eq!(Half::INFINITY.format(spec, &fmt).unwrap(), "Infinity");
            assert_eq!(Half::NEG_INFINITY.format(spec, &fmt).unwrap(), "-Infinity");
        }
    }

    #[test]
    fn unknown_specifiers_are_format_errors() {
        let fmt = NumberFormat::invariant();
        assert_eq!(Half::ONE.format("R", &fmt), Err(HalfError::Format));
        assert_eq!(Half::ONE.format("Z9", &fmt), Err(HalfError::Format));
        assert_eq!(Half::ONE.format("F9999999999", &fmt), Err(HalfError::Format));
    }

    #[test]
    fn format_into_buffer() {
        let fmt = NumberFormat::invariant();
        let mut buf = [0u8; 16];
        let n = h(1.5).format_into(&mut buf, "G", &fmt).unwrap();
        assert_eq!(&buf[..n], b"1.5");
        let mut tiny = [0u8; 2];
        assert_eq!(
            h(1.5).format_into(&mut tiny, "G", &fmt),
            Err(HalfError::BufferTooSmall)
        );
    }

    #[test]
    fn large_precision_renders() {
        let fmt = NumberFormat::invariant();
        let e100 = h(2468.0).format("E100", &fmt).unwrap();
        assert!(e100.starts_with("2.468"));
        assert!(e100.ends_with("E+003"));
        assert_eq!(e100.len(), 1 + 1 + 100 + 5);
        let f100 = h(2468.0).format("F100", &fmt).unwrap();
        assert!(f100.starts_with("2468.00"));
        assert_eq!(f100.len(), 4 + 1 + 100);
    }
}
