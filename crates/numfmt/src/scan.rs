//! Style-driven numeral tokenizer.
//!
//! Walks the input once, validating each element against the
//! [`NumberStyles`] bitset and the [`NumberFormat`] symbols, and collects
//! the digits into a canonical ASCII numeral. The final decimal-to-binary
//! step is the standard library's correctly rounded `f64` parser, so the
//! returned value is the nearest double to the exact decimal literal.

use crate::{NumTextError, NumberFormat, NumberStyles};

/// Result of scanning a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scanned {
    /// A finite (or overflowed-to-infinity) decimal value, correctly
    /// rounded to double precision.
    Finite(f64),
    /// The configured NaN literal.
    Nan,
    /// The configured infinity literal; `negative` gives the direction.
    Infinite {
        /// True for negative infinity.
        negative: bool,
    },
}

/// Consumes `token` from the front of `s` if present.
fn eat(s: &mut &str, token: &str) -> bool {
    if !token.is_empty() && s.starts_with(token) {
        *s = &s[token.len()..];
        true
    } else {
        false
    }
}

fn peek_digit(s: &str) -> Option<u8> {
    s.as_bytes().first().copied().filter(u8::is_ascii_digit)
}

/// Scans `text` as a numeric literal.
///
/// Returns the named special value when the whole (whitespace-trimmed)
/// input equals one of the configured literals, otherwise the exact `f64`
/// promotion of the decimal numeral. Any element not permitted by
/// `styles`, and any leftover characters, fail with
/// [`NumTextError::Syntax`].
pub fn scan(text: &str, styles: NumberStyles, fmt: &NumberFormat) -> Result<Scanned, NumTextError> {
    let mut s = text;
    if styles.contains(NumberStyles::ALLOW_LEADING_WHITE) {
        s = s.trim_start();
    }
    if styles.contains(NumberStyles::ALLOW_TRAILING_WHITE) {
        s = s.trim_end();
    }
    if s.is_empty() {
        return Err(NumTextError::Syntax);
    }

    // Named specials are matched against the whole remaining input.
    if s == fmt.nan_symbol {
        return Ok(Scanned::Nan);
    }
    if s == fmt.positive_infinity_symbol {
        return Ok(Scanned::Infinite { negative: false });
    }
    if s == fmt.negative_infinity_symbol {
        return Ok(Scanned::Infinite { negative: true });
    }
    if styles.contains(NumberStyles::ALLOW_LEADING_SIGN) {
        let mut t = s;
        if eat(&mut t, &fmt.negative_sign) && t == fmt.positive_infinity_symbol {
            return Ok(Scanned::Infinite { negative: true });
        }
    }

    let currency = styles.contains(NumberStyles::ALLOW_CURRENCY_SYMBOL);
    let group_sep: &str = if currency {
        &fmt.currency_group_separator
    } else {
        &fmt.group_separator
    };
    let decimal_sep: &str = if currency {
        &fmt.currency_decimal_separator
    } else {
        &fmt.decimal_separator
    };

    let mut negative = false;
    let mut parenthesized = false;
    if styles.contains(NumberStyles::ALLOW_PARENTHESES)
        && s.len() >= 2
        && s.starts_with('(')
        && s.ends_with(')')
    {
        parenthesized = true;
        negative = true;
        s = &s[1..s.len() - 1];
    }

    let mut seen_currency = false;
    if currency && eat(&mut s, &fmt.currency_symbol) {
        seen_currency = true;
    }

    let mut signed = false;
    if styles.contains(NumberStyles::ALLOW_LEADING_SIGN) {
        if eat(&mut s, &fmt.negative_sign) {
            if parenthesized {
                return Err(NumTextError::Syntax);
            }
            negative = true;
            signed = true;
        } else if eat(&mut s, &fmt.positive_sign) {
            signed = true;
        }
    }
    if currency && !seen_currency && eat(&mut s, &fmt.currency_symbol) {
        seen_currency = true;
    }

    // Canonical ASCII numeral handed to the f64 parser at the end.
    let mut canon = String::with_capacity(s.len() + 1);
    let mut digit_count = 0usize;

    loop {
        if let Some(d) = peek_digit(s) {
            canon.push(d as char);
            s = &s[1..];
            digit_count += 1;
            continue;
        }
        if styles.contains(NumberStyles::ALLOW_THOUSANDS) && digit_count > 0 {
            let mut t = s;
            if eat(&mut t, group_sep) && peek_digit(t).is_some() {
                s = t;
                continue;
            }
        }
        break;
    }

    if styles.contains(NumberStyles::ALLOW_DECIMAL_POINT) {
        let mut t = s;
        if eat(&mut t, decimal_sep) {
            s = t;
            canon.push('.');
            while let Some(d) = peek_digit(s) {
                canon.push(d as char);
                s = &s[1..];
                digit_count += 1;
            }
        }
    }

    if digit_count == 0 {
        return Err(NumTextError::Syntax);
    }

    if styles.contains(NumberStyles::ALLOW_EXPONENT) && (s.starts_with('e') || s.starts_with('E')) {
        s = &s[1..];
        canon.push('e');
        if eat(&mut s, &fmt.negative_sign) {
            canon.push('-');
        } else {
            eat(&mut s, &fmt.positive_sign);
        }
        if peek_digit(s).is_none() {
            return Err(NumTextError::Syntax);
        }
        while let Some(d) = peek_digit(s) {
            canon.push(d as char);
            s = &s[1..];
        }
    }

    if styles.contains(NumberStyles::ALLOW_TRAILING_SIGN) && !signed {
        if eat(&mut s, &fmt.negative_sign) {
            if parenthesized {
                return Err(NumTextError::Syntax);
            }
            negative = true;
        } else {
            eat(&mut s, &fmt.positive_sign);
        }
    }
    if currency && !seen_currency {
        eat(&mut s, &fmt.currency_symbol);
    }

    if !s.is_empty() {
        return Err(NumTextError::Syntax);
    }

    if negative {
        canon.insert(0, '-');
    }
    canon
        .parse::<f64>()
        .map(Scanned::Finite)
        .map_err(|_| NumTextError::Syntax)
}
