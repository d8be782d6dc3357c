//! Locale symbol configuration.
//!
//! An explicit configuration value passed by reference into every parse and
//! format call. The defaults are the invariant symbols; callers wanting a
//! specific locale fill in their own separators and signs.

/// Symbols and patterns used when scanning and rendering numerals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    /// Separator between integral and fractional digits.
    pub decimal_separator: String,
    /// Separator between groups of integral digits.
    pub group_separator: String,
    /// Prefix marking a negative number.
    pub negative_sign: String,
    /// Prefix marking an explicitly positive number.
    pub positive_sign: String,
    /// Currency symbol recognized and emitted by the `C` specifier.
    pub currency_symbol: String,
    /// Decimal separator used inside currency amounts.
    pub currency_decimal_separator: String,
    /// Group separator used inside currency amounts.
    pub currency_group_separator: String,
    /// Symbol emitted by the `P` specifier.
    pub percent_symbol: String,
    /// Literal recognized and emitted for NaN.
    pub nan_symbol: String,
    /// Literal recognized and emitted for positive infinity.
    pub positive_infinity_symbol: String,
    /// Literal recognized and emitted for negative infinity.
    pub negative_infinity_symbol: String,
    /// Negative pattern for the `N` specifier:
    /// 0 `(n)`, 1 `-n`, 2 `- n`, 3 `n-`, 4 `n -`.
    pub number_negative_pattern: u8,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat {
            decimal_separator: ".".into(),
            group_separator: ",".into(),
            negative_sign: "-".into(),
            positive_sign: "+".into(),
            currency_symbol: "\u{a4}".into(),
            currency_decimal_separator: ".".into(),
            currency_group_separator: ",".into(),
            percent_symbol: "%".into(),
            nan_symbol: "NaN".into(),
            positive_infinity_symbol: "Infinity".into(),
            negative_infinity_symbol: "-Infinity".into(),
            number_negative_pattern: 1,
        }
    }
}

impl NumberFormat {
    /// The invariant configuration (same as `Default`).
    pub fn invariant() -> Self {
        NumberFormat::default()
    }
}
