//! The 16-bit storage format: layout constants, named values, and
//! sign/exponent/mantissa classification.
//!
//! Layout is IEEE 754-2008 binary16: 1 sign bit, 5 exponent bits
//! (bias 15), 10 mantissa bits. Exponent field 0 encodes zero and the
//! subnormals, field 31 encodes infinities and NaNs. The top mantissa bit
//! of a NaN is the quiet bit.

/// An IEEE 754-2008 half-precision (binary16) floating-point number.
///
/// `Half` is a transparent wrapper over the 16-bit storage word. It is not
/// an arithmetic type in hardware; arithmetic and comparison promote to
/// `f32`, and conversions to and from `f32`/`f64` are exact bit-level
/// algorithms with correct rounding.
///
/// ```
/// use binary16::Half;
///
/// let x = Half::from_f32(1.5);
/// assert_eq!(x.to_bits(), 0x3E00);
/// assert_eq!(f32::from(x), 1.5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[repr(transparent)]
pub struct Half(pub(crate) u16);

pub(crate) const SIGN_MASK: u16 = 0x8000;
pub(crate) const EXP_MASK: u16 = 0x7C00;
pub(crate) const MAN_MASK: u16 = 0x03FF;
pub(crate) const QUIET_BIT: u16 = 0x0200;
pub(crate) const EXP_SHIFT: u32 = 10;

/// Sign, exponent, and mantissa class of a half-precision value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalfClass {
    /// Any NaN, quiet or signaling.
    Nan,
    /// `-Infinity`.
    NegativeInfinity,
    /// A finite negative value with a non-zero exponent field.
    NegativeNormal,
    /// A finite negative value with a zero exponent field and non-zero
    /// mantissa.
    NegativeSubnormal,
    /// The bit pattern `0x8000`.
    NegativeZero,
    /// The bit pattern `0x0000`.
    PositiveZero,
    /// A finite positive value with a zero exponent field and non-zero
    /// mantissa.
    PositiveSubnormal,
    /// A finite positive value with a non-zero exponent field.
    PositiveNormal,
    /// `+Infinity`.
    PositiveInfinity,
}

impl Half {
    /// The smallest positive value, `2^-24` (a subnormal).
    pub const EPSILON: Half = Half(0x0001);
    /// The largest finite value, `65504`.
    pub const MAX: Half = Half(0x7BFF);
    /// The smallest finite value, `-65504`.
    pub const MIN: Half = Half(0xFBFF);
    /// The smallest positive normal value, `2^-14`.
    pub const MIN_POSITIVE: Half = Half(0x0400);
    /// Positive infinity.
    pub const INFINITY: Half = Half(0x7C00);
    /// Negative infinity.
    pub const NEG_INFINITY: Half = Half(0xFC00);
    /// The canonical NaN (negative, quiet, zero payload).
    pub const NAN: Half = Half(0xFE00);
    /// Positive zero.
    pub const ZERO: Half = Half(0x0000);
    /// Negative zero.
    pub const NEG_ZERO: Half = Half(0x8000);
    /// The value `1`.
    pub const ONE: Half = Half(0x3C00);

    /// Reinterprets a raw 16-bit word as a `Half`.
    #[inline]
    pub const fn from_bits(bits: u16) -> Half {
        Half(bits)
    }

    /// The raw 16-bit storage word.
    #[inline]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// True when the value is a NaN of either kind.
    #[inline]
    pub const fn is_nan(self) -> bool {
        self.0 & !SIGN_MASK > EXP_MASK
    }

    /// True for positive or negative infinity.
    #[inline]
    pub const fn is_infinite(self) -> bool {
        self.0 & !SIGN_MASK == EXP_MASK
    }

    /// True only for `+Infinity`.
    #[inline]
    pub const fn is_positive_infinity(self) -> bool {
        self.0 == Half::INFINITY.0
    }

    /// True only for `-Infinity`.
    #[inline]
    pub const fn is_negative_infinity(self) -> bool {
        self.0 == Half::NEG_INFINITY.0
    }

    /// True for zeros, subnormals, and normals.
    #[inline]
    pub const fn is_finite(self) -> bool {
        self.0 & EXP_MASK != EXP_MASK
    }

    /// True for finite non-zero values with a non-zero exponent field.
    #[inline]
    pub const fn is_normal(self) -> bool {
        let exp = self.0 & EXP_MASK;
        exp != 0 && exp != EXP_MASK
    }

    /// True for finite non-zero values with a zero exponent field.
    #[inline]
    pub const fn is_subnormal(self) -> bool {
        self.0 & EXP_MASK == 0 && self.0 & MAN_MASK != 0
    }

    /// True when the sign bit is set, including `-0` and negative NaNs.
    #[inline]
    pub const fn is_sign_negative(self) -> bool {
        self.0 & SIGN_MASK != 0
    }

    /// True when the sign bit is clear.
    #[inline]
    pub const fn is_sign_positive(self) -> bool {
        self.0 & SIGN_MASK == 0
    }

    /// True for either zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 & !SIGN_MASK == 0
    }

    /// Classifies the value by sign and exponent/mantissa fields.
    pub const fn classify(self) -> HalfClass {
        if self.is_nan() {
            return HalfClass::Nan;
        }
        let negative = self.is_sign_negative();
        if self.is_zero() {
            return if negative { HalfClass::NegativeZero } else { HalfClass::PositiveZero };
        }
        if self.is_infinite() {
            return if negative {
                HalfClass::NegativeInfinity
            } else {
                HalfClass::PositiveInfinity
            };
        }
        if self.is_subnormal() {
            return if negative {
                HalfClass::NegativeSubnormal
            } else {
                HalfClass::PositiveSubnormal
            };
        }
        if negative {
            HalfClass::NegativeNormal
        } else {
            HalfClass::PositiveNormal
        }
    }
}
