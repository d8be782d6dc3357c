//! Arithmetic operators, elementary functions, and NaN-aware reducers.
//!
//! Arithmetic promotes to `f32`, computes once, and narrows back; the
//! wider format has enough precision that the extra rounding step never
//! changes the correctly rounded half-precision result. The elementary
//! functions promote to `f64` for the same reason.

use std::f64::consts::{LN_10, LN_2};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use crate::bits::{Half, SIGN_MASK};

impl Half {
    /// The absolute value (sign bit cleared, NaN payload kept).
    #[inline]
    pub const fn abs(self) -> Half {
        Half(self.0 & !SIGN_MASK)
    }

    /// `e^x - 1`, accurate near zero.
    pub fn exp_m1(self) -> Half {
        Half::from_f64(self.to_f64().exp_m1())
    }

    /// `2^x`.
    pub fn exp2(self) -> Half {
        Half::from_f64(self.to_f64().exp2())
    }

    /// `2^x - 1`, accurate near zero.
    pub fn exp2_m1(self) -> Half {
        Half::from_f64((self.to_f64() * LN_2).exp_m1())
    }

    /// `10^x`.
    pub fn exp10(self) -> Half {
        Half::from_f64((self.to_f64() * LN_10).exp())
    }

    /// `10^x - 1`, accurate near zero.
    pub fn exp10_m1(self) -> Half {
        Half::from_f64((self.to_f64() * LN_10).exp_m1())
    }

    /// `ln(1 + x)`, accurate near zero.
    pub fn ln_1p(self) -> Half {
        Half::from_f64(self.to_f64().ln_1p())
    }

    /// `log2(1 + x)`, accurate near zero.
    pub fn log2_1p(self) -> Half {
        Half::from_f64(self.to_f64().ln_1p() / LN_2)
    }

    /// `log10(1 + x)`, accurate near zero.
    pub fn log10_1p(self) -> Half {
        Half::from_f64(self.to_f64().ln_1p() / LN_10)
    }

    /// The larger operand, treating NaN as missing data: a single NaN
    /// yields the other operand, and equal values prefer the positive
    /// sign (so `max_number(-0, +0)` is `+0`).
    pub fn max_number(self, other: Half) -> Half {
        if self.is_nan() {
            return if other.is_nan() { self } else { other };
        }
        if other.is_nan() {
            return self;
        }
        let (x, y) = (self.to_f32(), other.to_f32());
        if x != y {
            return if x > y { self } else { other };
        }
        if self.is_sign_negative() {
            other
        } else {
            self
        }
    }

    /// The smaller operand, treating NaN as missing data; equal values
    /// prefer the negative sign.
    pub fn min_number(self, other: Half) -> Half {
        if self.is_nan() {
            return if other.is_nan() { self } else { other };
        }
        if other.is_nan() {
            return self;
        }
        let (x, y) = (self.to_f32(), other.to_f32());
        if x != y {
            return if x < y { self } else { other };
        }
        if self.is_sign_negative() {
            self
        } else {
            other
        }
    }

    /// The operand with the larger magnitude, treating NaN as missing
    /// data; equal magnitudes prefer the positive sign.
    pub fn max_magnitude_number(self, other: Half) -> Half {
        if self.is_nan() {
            return if other.is_nan() { self } else { other };
        }
        if other.is_nan() {
            return self;
        }
        let (ax, ay) = (self.to_f32().abs(), other.to_f32().abs());
        if ax > ay {
            return self;
        }
        if ay > ax {
            return other;
        }
        if self.is_sign_negative() {
            other
        } else {
            self
        }
    }

    /// The operand with the smaller magnitude, treating NaN as missing
    /// data; equal magnitudes prefer the negative sign.
    pub fn min_magnitude_number(self, other: Half) -> Half {
        if self.is_nan() {
            return if other.is_nan() { self } else { other };
        }
        if other.is_nan() {
            return self;
        }
        let (ax, ay) = (self.to_f32().abs(), other.to_f32().abs());
        if ax < ay {
            return self;
        }
        if ay < ax {
            return other;
        }
        if self.is_sign_negative() {
            self
        } else {
            other
        }
    }
}

impl Neg for Half {
    type Output = Half;

    /// Flips the sign bit; negating a NaN negates its sign.
    #[inline]
    fn neg(self) -> Half {
        Half(self.0 ^ SIGN_MASK)
    }
}

macro_rules! promote_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for Half {
            type Output = Half;

            fn $method(self, rhs: Half) -> Half {
                Half::from_f32(self.to_f32().$method(rhs.to_f32()))
            }
        }
    };
}

promote_binop!(Add, add);
promote_binop!(Sub, sub);
promote_binop!(Mul, mul);
promote_binop!(Div, div);
promote_binop!(Rem, rem);
