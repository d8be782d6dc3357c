//! Decimal rendering for the standard format specifiers.
//!
//! The renderers work from either a pre-computed significant-digit string
//! ([`Decimal`], used by the round-trip `G` specifier) or an `f64` whose
//! fixed-point expansion the standard formatter produces exactly (every
//! half-precision value is dyadic, so `{:.prec}` on its `f64` promotion is
//! the exact decimal expansion, correctly rounded to `prec` places).

use crate::{NumTextError, NumberFormat};

/// A sign plus significant digits with a power-of-ten scale.
///
/// `digits` holds ASCII significant digits with no trailing zeros (zero is
/// the single digit `0`), and `exponent` is the power of ten of the first
/// digit, so the value is `d0.d1d2... * 10^exponent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimal {
    /// True when the value carries a negative sign (including `-0`).
    pub negative: bool,
    /// Significant digits, most significant first.
    pub digits: String,
    /// Decimal exponent of the first digit.
    pub exponent: i32,
}

/// Kind of a parsed format specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecKind {
    /// `G` — shortest round-trip digits.
    General,
    /// `F` — fixed point.
    Fixed,
    /// `E` — scientific with a three-digit exponent.
    Scientific,
    /// `N` — fixed point with group separators and a negative pattern.
    Number,
    /// `P` — value scaled by 100 with a percent symbol.
    Percent,
    /// `C` — currency.
    Currency,
}

/// A parsed format specifier: a kind, the letter case as written, and an
/// optional precision count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spec {
    /// Which family of output to produce.
    pub kind: SpecKind,
    /// True when the specifier letter was upper case; controls the case of
    /// the exponent marker.
    pub upper: bool,
    /// Digit or decimal-place count, when one followed the letter.
    pub precision: Option<usize>,
}

impl Spec {
    /// Parses a specifier string such as `"G"`, `"e4"`, or `"N0"`.
    ///
    /// An empty string means `G`. Any letter outside the supported set, a
    /// non-numeric precision, or a precision above `i32::MAX` is rejected.
    pub fn parse(spec: &str) -> Result<Spec, NumTextError> {
        if spec.is_empty() {
            return Ok(Spec { kind: SpecKind::General, upper: true, precision: None });
        }
        let letter = spec.as_bytes()[0];
        let kind = match letter.to_ascii_uppercase() {
            b'G' => SpecKind::General,
            b'F' => SpecKind::Fixed,
            b'E' => SpecKind::Scientific,
            b'N' => SpecKind::Number,
            b'P' => SpecKind::Percent,
            b'C' => SpecKind::Currency,
            _ => return Err(NumTextError::UnknownSpecifier),
        };
        let upper = letter.is_ascii_uppercase();
        let rest = &spec[1..];
        let precision = if rest.is_empty() {
            None
        } else {
            let n: usize = rest
                .parse()
                .map_err(|_| NumTextError::UnknownSpecifier)?;
            if n > i32::MAX as usize {
                return Err(NumTextError::UnknownSpecifier);
            }
            Some(n)
        };
        Ok(Spec { kind, upper, precision })
    }
}

/// Renders a [`Decimal`] in general (`G`) style: plain positional notation,
/// switching to scientific with a two-digit exponent when the value's
/// decimal exponent drops below -5 or reaches `sci_at` (the requested
/// significant-digit count; pass `i32::MAX` for shortest-digit output).
pub fn render_general(dec: &Decimal, upper: bool, sci_at: i32, fmt: &NumberFormat) -> String {
    let mut out = String::new();
    if dec.negative {
        out.push_str(&fmt.negative_sign);
    }
    if dec.exponent < -5 || dec.exponent >= sci_at {
        out.push_str(&dec.digits[..1]);
        if dec.digits.len() > 1 {
            out.push_str(&fmt.decimal_separator);
            out.push_str(&dec.digits[1..]);
        }
        out.push(if upper { 'E' } else { 'e' });
        let exp = dec.exponent;
        if exp < 0 {
            out.push_str(&fmt.negative_sign);
        } else {
            out.push_str(&fmt.positive_sign);
        }
        out.push_str(&format!("{:02}", exp.abs()));
        return out;
    }
    positional(&mut out, &dec.digits, dec.exponent, &fmt.decimal_separator);
    out
}

/// Writes `d0.d1d2... * 10^exponent` in plain positional notation.
fn positional(out: &mut String, digits: &str, exponent: i32, decimal_sep: &str) {
    if exponent >= 0 {
        let int_len = exponent as usize + 1;
        if digits.len() <= int_len {
            out.push_str(digits);
            for _ in digits.len()..int_len {
                out.push('0');
            }
        } else {
            out.push_str(&digits[..int_len]);
            out.push_str(decimal_sep);
            out.push_str(&digits[int_len..]);
        }
    } else {
        out.push('0');
        out.push_str(decimal_sep);
        for _ in 0..(-exponent as usize - 1) {
            out.push('0');
        }
        out.push_str(digits);
    }
}

/// Renders in scientific (`E`) style: one integral digit, `precision`
/// fraction digits, and a signed three-digit exponent.
pub fn render_scientific(value: f64, precision: usize, upper: bool, fmt: &NumberFormat) -> String {
    let mut out = String::new();
    if value.is_sign_negative() {
        out.push_str(&fmt.negative_sign);
    }
    // "{:.prec$e}" gives "d.dddde±x" with an unpadded exponent.
    let body = format!("{:.*e}", precision, value.abs());
    let (mantissa, exp) = body.split_once('e').unwrap_or((body.as_str(), "0"));
    match mantissa.split_once('.') {
        Some((int, frac)) => {
            out.push_str(int);
            out.push_str(&fmt.decimal_separator);
            out.push_str(frac);
        }
        None => out.push_str(mantissa),
    }
    out.push(if upper { 'E' } else { 'e' });
    let exp: i32 = exp.parse().unwrap_or(0);
    if exp < 0 {
        out.push_str(&fmt.negative_sign);
    } else {
        out.push_str(&fmt.positive_sign);
    }
    out.push_str(&format!("{:03}", exp.abs()));
    out
}

/// The exact fixed-point expansion of `|value|` with `precision` fraction
/// digits, split into integral and fractional parts.
fn fixed_parts(value: f64, precision: usize) -> (String, String) {
    let body = format!("{:.*}", precision, value.abs());
    match body.split_once('.') {
        Some((int, frac)) => (int.to_string(), frac.to_string()),
        None => (body, String::new()),
    }
}

/// Renders in fixed-point (`F`) style.
pub fn render_fixed(value: f64, precision: usize, fmt: &NumberFormat) -> String {
    let (int, frac) = fixed_parts(value, precision);
    let mut out = String::new();
    if value.is_sign_negative() {
        out.push_str(&fmt.negative_sign);
    }
    out.push_str(&int);
    if !frac.is_empty() {
        out.push_str(&fmt.decimal_separator);
        out.push_str(&frac);
    }
    out
}

/// Inserts `sep` between three-digit groups of an integral digit string.
fn group(int: &str, sep: &str) -> String {
    let mut out = String::with_capacity(int.len() + int.len() / 3);
    let lead = int.len() % 3;
    if lead > 0 {
        out.push_str(&int[..lead]);
    }
    for (i, chunk) in int.as_bytes()[lead..].chunks(3).enumerate() {
        if i > 0 || lead > 0 {
            out.push_str(sep);
        }
        out.push_str(std::str::from_utf8(chunk).unwrap_or(""));
    }
    out
}

/// The magnitude of `value` with grouping and `precision` fraction digits,
/// using the given separators.
fn grouped_magnitude(
    value: f64,
    precision: usize,
    group_sep: &str,
    decimal_sep: &str,
) -> String {
    let (int, frac) = fixed_parts(value, precision);
    let mut out = group(&int, group_sep);
    if !frac.is_empty() {
        out.push_str(decimal_sep);
        out.push_str(&frac);
    }
    out
}

/// Renders in number (`N`) style: grouped digits plus the configured
/// negative pattern.
pub fn render_number(value: f64, precision: usize, fmt: &NumberFormat) -> String {
    let body = grouped_magnitude(value, precision, &fmt.group_separator, &fmt.decimal_separator);
    if !value.is_sign_negative() {
        return body;
    }
    match fmt.number_negative_pattern {
        0 => format!("({body})"),
        2 => format!("{} {}", fmt.negative_sign, body),
        3 => format!("{}{}", body, fmt.negative_sign),
        4 => format!("{} {}", body, fmt.negative_sign),
        _ => format!("{}{}", fmt.negative_sign, body),
    }
}

/// Renders in percent (`P`) style: the value scaled by 100, grouped, with
/// the percent symbol appended after a space.
pub fn render_percent(value: f64, precision: usize, fmt: &NumberFormat) -> String {
    let scaled = value * 100.0;
    let body = grouped_magnitude(scaled, precision, &fmt.group_separator, &fmt.decimal_separator);
    if value.is_sign_negative() {
        format!("{}{} {}", fmt.negative_sign, body, fmt.percent_symbol)
    } else {
        format!("{} {}", body, fmt.percent_symbol)
    }
}

/// Renders in currency (`C`) style: the currency symbol before the grouped
/// digits, with negative amounts parenthesized.
pub fn render_currency(value: f64, precision: usize, fmt: &NumberFormat) -> String {
    let body = grouped_magnitude(
        value,
        precision,
        &fmt.currency_group_separator,
        &fmt.currency_decimal_separator,
    );
    if value.is_sign_negative() {
        format!("({}{})", fmt.currency_symbol, body)
    } else {
        format!("{}{}", fmt.currency_symbol, body)
    }
}
