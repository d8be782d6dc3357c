//! Exact widening conversions to `f32` and `f64`.
//!
//! Every half-precision value is exactly representable in both wider
//! formats, so widening never rounds. NaN payloads are preserved by
//! shifting the 10 mantissa bits to the top of the wider mantissa; the
//! quiet bit moves with them, so signaling NaNs stay signaling.

use crate::bits::{Half, EXP_MASK, EXP_SHIFT, MAN_MASK, SIGN_MASK};

impl Half {
    /// Converts to `f32` exactly.
    pub fn to_f32(self) -> f32 {
        let sign = ((self.0 & SIGN_MASK) as u32) << 16;
        let exp = ((self.0 & EXP_MASK) >> EXP_SHIFT) as u32;
        let man = (self.0 & MAN_MASK) as u32;
        if exp == 0x1F {
            // Infinity or NaN: all-ones exponent, payload shifted up.
            return f32::from_bits(sign | 0x7F80_0000 | (man << 13));
        }
        if exp == 0 {
            if man == 0 {
                return f32::from_bits(sign);
            }
            // Subnormal: normalize into an implicit leading bit.
            let mut man = man;
            let mut exp: u32 = 113;
            while man & 0x0400 == 0 {
                man <<= 1;
                exp -= 1;
            }
            return f32::from_bits(sign | (exp << 23) | ((man & 0x03FF) << 13));
        }
        f32::from_bits(sign | ((exp + 112) << 23) | (man << 13))
    }

    /// Converts to `f64` exactly.
    ///
    /// This is a direct bit-level conversion, not a cascade through `f32`;
    /// a cascade could quiet a signaling NaN in the intermediate step.
    pub fn to_f64(self) -> f64 {
        let sign = ((self.0 & SIGN_MASK) as u64) << 48;
        let exp = ((self.0 & EXP_MASK) >> EXP_SHIFT) as u64;
        let man = (self.0 & MAN_MASK) as u64;
        if exp == 0x1F {
            return f64::from_bits(sign | 0x7FF0_0000_0000_0000 | (man << 42));
        }
        if exp == 0 {
            if man == 0 {
                return f64::from_bits(sign);
            }
            let mut man = man;
            let mut exp: u64 = 1009;
            while man & 0x0400 == 0 {
                man <<= 1;
                exp -= 1;
            }
            return f64::from_bits(sign | (exp << 52) | ((man & 0x03FF) << 42));
        }
        f64::from_bits(sign | ((exp + 1008) << 52) | (man << 42))
    }
}

impl From<Half> for f32 {
    fn from(value: Half) -> f32 {
        value.to_f32()
    }
}

impl From<Half> for f64 {
    fn from(value: Half) -> f64 {
        value.to_f64()
    }
}
