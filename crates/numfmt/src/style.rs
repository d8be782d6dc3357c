//! Style bitset controlling which tokens the scanner accepts.

use bitflags::bitflags;

bitflags! {
    /// Determines the permitted elements of a numeric literal.
    ///
    /// Bit values and composite sets match the conventional assignments so
    /// that persisted flag values interoperate.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct NumberStyles: u32 {
        /// Leading whitespace is ignored.
        const ALLOW_LEADING_WHITE = 0x0001;
        /// Trailing whitespace is ignored.
        const ALLOW_TRAILING_WHITE = 0x0002;
        /// A sign may precede the digits.
        const ALLOW_LEADING_SIGN = 0x0004;
        /// A sign may follow the digits.
        const ALLOW_TRAILING_SIGN = 0x0008;
        /// Parentheses denote a negative value.
        const ALLOW_PARENTHESES = 0x0010;
        /// A decimal separator and fraction digits are permitted.
        const ALLOW_DECIMAL_POINT = 0x0020;
        /// Group separators may appear between integral digits.
        const ALLOW_THOUSANDS = 0x0040;
        /// An exponent marker with signed digits is permitted.
        const ALLOW_EXPONENT = 0x0080;
        /// The currency symbol may appear before or after the number.
        const ALLOW_CURRENCY_SYMBOL = 0x0100;

        /// Whitespace plus a leading sign.
        const INTEGER = Self::ALLOW_LEADING_WHITE.bits()
            | Self::ALLOW_TRAILING_WHITE.bits()
            | Self::ALLOW_LEADING_SIGN.bits();
        /// Integer plus trailing sign, decimal point, and grouping.
        const NUMBER = Self::INTEGER.bits()
            | Self::ALLOW_TRAILING_SIGN.bits()
            | Self::ALLOW_DECIMAL_POINT.bits()
            | Self::ALLOW_THOUSANDS.bits();
        /// Integer plus decimal point and exponent (no grouping).
        const FLOAT = Self::INTEGER.bits()
            | Self::ALLOW_DECIMAL_POINT.bits()
            | Self::ALLOW_EXPONENT.bits();
        /// Everything a currency amount may carry (no exponent).
        const CURRENCY = Self::NUMBER.bits()
            | Self::ALLOW_PARENTHESES.bits()
            | Self::ALLOW_CURRENCY_SYMBOL.bits();
        /// Every style element.
        const ANY = Self::CURRENCY.bits() | Self::ALLOW_EXPONENT.bits();
    }
}

impl Default for NumberStyles {
    /// The default for floating-point parsing: `FLOAT | ALLOW_THOUSANDS`.
    fn default() -> Self {
        NumberStyles::FLOAT | NumberStyles::ALLOW_THOUSANDS
    }
}
