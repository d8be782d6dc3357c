//! Correctly rounded narrowing conversions from `f32` and `f64`.
//!
//! Both converters round to nearest with ties to even, using a round bit
//! plus a sticky mask over the discarded mantissa bits. A mantissa that
//! rounds up past its top bit carries into the exponent field, which also
//! turns the largest finite exponent into infinity; that carry is the
//! overflow path. Magnitudes below half the smallest subnormal flush to a
//! signed zero.
//!
//! NaN inputs keep their sign and the top ten mantissa bits, so the quiet
//! bit is inherited rather than forced. When the surviving payload bits
//! are all zero the quiet bit is set instead, because an all-zero mantissa
//! would read back as infinity.

use crate::bits::{Half, EXP_MASK, EXP_SHIFT, QUIET_BIT};

impl Half {
    /// Converts an `f32` to the nearest `Half`, ties to even.
    ///
    /// This is a bit-level conversion, independent of [`Half::from_f64`];
    /// promoting through `f64` first could quiet a signaling NaN.
    pub fn from_f32(value: f32) -> Half {
        let bits = value.to_bits();
        let sign = ((bits >> 16) & 0x8000) as u16;
        let exp = ((bits >> 23) & 0xFF) as i32;
        let man = bits & 0x007F_FFFF;
        if exp == 0xFF {
            if man == 0 {
                return Half(sign | EXP_MASK);
            }
            let mut payload = (man >> 13) as u16;
            if payload == 0 {
                payload = QUIET_BIT;
            }
            return Half(sign | EXP_MASK | payload);
        }
        let exp16 = exp - 127 + 15;
        if exp16 >= 0x1F {
            return Half(sign | EXP_MASK);
        }
        if exp16 <= 0 {
            // Result is subnormal or zero. Below 2^-25 nothing survives
            // rounding; exactly 2^-25 ties down to zero.
            if exp16 < -10 {
                return Half(sign);
            }
            let full = (1u32 << 23) | man;
            let shift = (14 - exp16) as u32;
            let round_bit = 1u32 << (shift - 1);
            let mut man16 = (full >> shift) as u16;
            if full & round_bit != 0 && full & (3 * round_bit - 1) != 0 {
                man16 += 1;
            }
            return Half(sign | man16);
        }
        let round_bit = 1u32 << 12;
        let mut out = sign | ((exp16 as u16) << EXP_SHIFT) | (man >> 13) as u16;
        if man & round_bit != 0 && man & (3 * round_bit - 1) != 0 {
            // Carries through the exponent on mantissa overflow, and into
            // infinity when the exponent was already at its maximum.
            out += 1;
        }
        Half(out)
    }

    /// Converts an `f64` to the nearest `Half`, ties to even.
    pub fn from_f64(value: f64) -> Half {
        let bits = value.to_bits();
        let sign = ((bits >> 48) & 0x8000) as u16;
        let exp = ((bits >> 52) & 0x7FF) as i32;
        let man = bits & 0x000F_FFFF_FFFF_FFFF;
        if exp == 0x7FF {
            if man == 0 {
                return Half(sign | EXP_MASK);
            }
            let mut payload = (man >> 42) as u16;
            if payload == 0 {
                payload = QUIET_BIT;
            }
            return Half(sign | EXP_MASK | payload);
        }
        let exp16 = exp - 1023 + 15;
        if exp16 >= 0x1F {
            return Half(sign | EXP_MASK);
        }
        if exp16 <= 0 {
            if exp16 < -10 {
                return Half(sign);
            }
            let full = (1u64 << 52) | man;
            let shift = (43 - exp16) as u32;
            let round_bit = 1u64 << (shift - 1);
            let mut man16 = (full >> shift) as u16;
            if full & round_bit != 0 && full & (3 * round_bit - 1) != 0 {
                man16 += 1;
            }
            return Half(sign | man16);
        }
        let round_bit = 1u64 << 41;
        let mut out = sign | ((exp16 as u16) << EXP_SHIFT) | (man >> 42) as u16;
        if man & round_bit != 0 && man & (3 * round_bit - 1) != 0 {
            out += 1;
        }
        Half(out)
    }
}

impl From<f32> for Half {
    fn from(value: f32) -> Half {
        Half::from_f32(value)
    }
}

impl From<f64> for Half {
    fn from(value: f64) -> Half {
        Half::from_f64(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_f32_exact_values() {
        let cases: &[(u32, u16)] = &[
            (0x0000_0000, 0x0000), // +0
            (0x8000_0000, 0x8000), // -0
            (0x3F80_0000, 0x3C00), // 1
            (0xBF80_0000, 0xBC00),
            (0x3FC0_0000, 0x3E00), // 1.5
            (0x3380_0000, 0x0001), // smallest subnormal
            (0x387F_C000, 0x03FF), // largest subnormal
            (0x3880_0000, 0x0400),
            (0x477F_E000, 0x7BFF), // 65504
            (0x7F80_0000, 0x7C00),
            (0xFF80_0000, 0xFC00),
        ];
        for &(single, half) in cases {
            assert_eq!(
                Half::from_f32(f32::from_bits(single)).to_bits(),
                half,
                "f32 {single:#010X}"
            );
        }
    }

    #[test]
    fn narrow_f32_rounds_to_nearest_even() {
        // 1027.5 sits between 1027 and 1028; even mantissa wins.
        let v = f32::from_bits(0b0_10001001_00000000111000000000000);
        assert_eq!(Half::from_f32(v).to_bits(), 0b0_11001_0000000100);
        // Subnormal tie rounds to the even mantissa as well.
        let v = f32::from_bits(0b0_01110000_00000001110000000000000);
        assert_eq!(Half::from_f32(v).to_bits(), 0b0_00000_1000000100);
        // A sticky bit below the tie point breaks it upward.
        let v = f32::from_bits(0b0_10001001_00000000111000000000001);
        assert_eq!(Half::from_f32(v).to_bits(), 0b0_11001_0000000100);
    }

    #[test]
    fn narrow_f32_underflow_and_overflow() {
        // Exactly 2^-25 ties down to zero.
        assert_eq!(Half::from_f32(f32::from_bits(0x3300_0000)).to_bits(), 0x0000);
        assert_eq!(Half::from_f32(f32::from_bits(0xB300_0000)).to_bits(), 0x8000);
        // Just above 2^-25 rounds to the smallest subnormal.
        assert_eq!(Half::from_f32(f32::from_bits(0x3300_0001)).to_bits(), 0x0001);
        // Below 2^-25 flushes.
        assert_eq!(Half::from_f32(f32::from_bits(0x32FF_FFFF)).to_bits(), 0x0000);
        // 65520 ties up into infinity; 65519.996 stays at MAX.
        assert_eq!(Half::from_f32(65520.0).to_bits(), 0x7C00);
        assert_eq!(Half::from_f32(-65520.0).to_bits(), 0xFC00);
        assert_eq!(Half::from_f32(65519.0).to_bits(), 0x7BFF);
        assert_eq!(Half::from_f32(1.0e30).to_bits(), 0x7C00);
    }

    #[test]
    fn narrow_f32_nan_payloads() {
        // Top ten payload bits survive; quiet bit inherited.
        assert_eq!(
            Half::from_f32(f32::from_bits(0x7FD5_5555)).to_bits(),
            0b0_11111_1010101010
        );
        assert_eq!(
            Half::from_f32(f32::from_bits(0xFFD5_5555)).to_bits(),
            0b1_11111_1010101010
        );
        // Payload entirely below the surviving bits: quiet bit forced so
        // the result is not read as infinity.
        assert_eq!(
            Half::from_f32(f32::from_bits(0x7F80_0001)).to_bits(),
            0x7C00 | 0x0200
        );
    }

    #[test]
    fn narrow_f64_exact_values() {
        let cases: &[(u64, u16)] = &[
            (0x0000_0000_0000_0000, 0x0000),
            (0x8000_0000_0000_0000, 0x8000),
            (0x3FF0_0000_0000_0000, 0x3C00),
            (0x3FF8_0000_0000_0000, 0x3E00),
            (0x3E70_0000_0000_0000, 0x0001),
            (0x3F0F_F800_0000_0000, 0x03FF),
            (0x40EF_FC00_0000_0000, 0x7BFF),
            (0x7FF0_0000_0000_0000, 0x7C00),
            (0xFFF0_0000_0000_0000, 0xFC00),
        ];
        for &(double, half) in cases {
            assert_eq!(
                Half::from_f64(f64::from_bits(double)).to_bits(),
                half,
                "f64 {double:#018X}"
            );
        }
    }

    #[test]
    fn narrow_f64_rounding_and_limits() {
        // 1027.5 again, this time from the double encoding.
        assert_eq!(
            Half::from_f64(f64::from_bits(0x4090_0E00_0000_0000)).to_bits(),
            0b0_11001_0000000100
        );
        // Exactly 2^-25 ties down to zero.
        assert_eq!(
            Half::from_f64(f64::from_bits(0x3E60_0000_0000_0000)).to_bits(),
            0x0000
        );
        assert_eq!(
            Half::from_f64(f64::from_bits(0xBE60_0000_0000_0000)).to_bits(),
            0x8000
        );
        assert_eq!(
            Half::from_f64(f64::from_bits(0x3E60_0000_0000_0001)).to_bits(),
            0x0001
        );
        assert_eq!(Half::from_f64(65520.0).to_bits(), 0x7C00);
        assert_eq!(Half::from_f64(65519.999).to_bits(), 0x7BFF);
        assert_eq!(Half::from_f64(1.0e300).to_bits(), 0x7C00);
        assert_eq!(Half::from_f64(-1.0e300).to_bits(), 0xFC00);
        // Double subnormals are far below the flush threshold.
        assert_eq!(Half::from_f64(f64::MIN_POSITIVE / 2.0).to_bits(), 0x0000);
    }

    #[test]
    fn narrow_f64_nan_payloads() {
        assert_eq!(
            Half::from_f64(f64::from_bits(0x7FFA_A800_0000_0000)).to_bits(),
            0b0_11111_1010101010
        );
        assert_eq!(
            Half::from_f64(f64::from_bits(0x7FF0_0000_0000_0001)).to_bits(),
            0x7E00
        );
        assert!(Half::from_f64(f64::NAN).is_nan());
    }
}
