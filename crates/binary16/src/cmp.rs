//! IEEE comparison operators and the total order.
//!
//! The `==`/`<` operators follow IEEE 754 semantics (NaN compares false
//! with everything, zeros are equal), while [`Half::compare`] is a total
//! order suitable for sorting: every NaN sorts below negative infinity,
//! all NaNs are mutually equal, and `-0` sorts below `+0`.

use std::any::Any;
use std::cmp::Ordering;

use crate::bits::{Half, SIGN_MASK};
use crate::error::HalfError;

impl PartialEq for Half {
    fn eq(&self, other: &Half) -> bool {
        self.to_f32() == other.to_f32()
    }
}

impl PartialOrd for Half {
    fn partial_cmp(&self, other: &Half) -> Option<Ordering> {
        self.to_f32().partial_cmp(&other.to_f32())
    }
}

/// Maps a non-NaN bit pattern to an integer with the same ordering.
///
/// Negative patterns are reflected below zero with an extra offset so that
/// `-0` keys strictly below `+0`.
fn order_key(bits: u16) -> i32 {
    let mag = (bits & !SIGN_MASK) as i32;
    if bits & SIGN_MASK != 0 {
        -mag - 1
    } else {
        mag
    }
}

impl Half {
    /// Total-order comparison for sorting.
    ///
    /// Unlike `partial_cmp`, this never fails to order: any NaN compares
    /// less than every number (including `-Infinity`), all NaNs compare
    /// equal to each other, and `-0` is less than `+0`.
    pub fn compare(self, other: Half) -> Ordering {
        match (self.is_nan(), other.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => order_key(self.0).cmp(&order_key(other.0)),
        }
    }

    /// Value equality: NaNs are equal to each other and the two zeros are
    /// equal, regardless of bit pattern.
    pub fn equals(self, other: Half) -> bool {
        if self.is_nan() {
            return other.is_nan();
        }
        self.to_f32() == other.to_f32()
    }

    /// Total-order comparison against a dynamically typed value.
    ///
    /// An absent value sorts before everything, so the result is
    /// `Greater`; a present value of any type other than `Half` is a
    /// [`HalfError::TypeMismatch`].
    pub fn compare_dyn(self, other: Option<&dyn Any>) -> Result<Ordering, HalfError> {
        match other {
            None => Ok(Ordering::Greater),
            Some(value) => match value.downcast_ref::<Half>() {
                Some(other) => Ok(self.compare(*other)),
                None => Err(HalfError::TypeMismatch),
            },
        }
    }

    /// Value equality against a dynamically typed value. Absent values and
    /// foreign types are simply unequal.
    pub fn equals_dyn(self, other: Option<&dyn Any>) -> bool {
        match other.and_then(|value| value.downcast_ref::<Half>()) {
            Some(other) => self.equals(*other),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ieee_operators() {
        let one = Half::ONE;
        let two = Half::from_f32(2.0);
        assert!(one < two);
        assert!(two > one);
        assert!(one <= one);
        assert_eq!(one, one);
        assert_eq!(Half::ZERO, Half::NEG_ZERO);
        // NaN compares false with everything, itself included.
        assert_ne!(Half::NAN, Half::NAN);
        assert!(!(Half::NAN < one));
        assert!(!(Half::NAN > one));
        assert_eq!(Half::NAN.partial_cmp(&one), None);
    }

    #[test]
    fn total_order() {
        assert_eq!(Half::NAN.compare(Half::NAN), Ordering::Equal);
        // Quiet and signaling NaNs are indistinguishable to the order.
        assert_eq!(
            Half::NAN.compare(Half::from_bits(0x7C01)),
            Ordering::Equal
        );
        assert_eq!(Half::NAN.compare(Half::NEG_INFINITY), Ordering::Less);
        assert_eq!(Half::NEG_INFINITY.compare(Half::NAN), Ordering::Greater);
        assert_eq!(Half::NEG_ZERO.compare(Half::ZERO), Ordering::Less);
        assert_eq!(Half::ZERO.compare(Half::NEG_ZERO), Ordering::Greater);
        assert_eq!(Half::MIN.compare(Half::MAX), Ordering::Less);
        assert_eq!(Half::MAX.compare(Half::INFINITY), Ordering::Less);
        assert_eq!(Half::ONE.compare(Half::ONE), Ordering::Equal);
    }

    #[test]
    fn total_order_sorts() {
        let mut values = vec![
            Half::MAX,
            Half::NAN,
            Half::ZERO,
            Half::NEG_INFINITY,
            Half::NEG_ZERO,
            Half::ONE,
            Half::MIN,
            Half::INFINITY,
        ];
        values.sort_by(|a, b| a.compare(*b));
        let bits: Vec<u16> = values.iter().map(|h| h.to_bits()).collect();
        assert_eq!(
            bits,
            vec![0xFE00, 0xFC00, 0xFBFF, 0x8000, 0x0000, 0x3C00, 0x7BFF, 0x7C00]
        );
    }

    #[test]
    fn value_equality() {
        assert!(Half::NAN.equals(Half::NAN));
        assert!(Half::NAN.equals(Half::from_bits(0x7C01)));
        assert!(Half::ZERO.equals(Half::NEG_ZERO));
        assert!(Half::ONE.equals(Half::ONE));
        assert!(!Half::ONE.equals(Half::NAN));
        assert!(!Half::ONE.equals(Half::MAX));
    }

    #[test]
    fn dynamic_comparison() {
        let one = Half::ONE;
        assert_eq!(one.compare_dyn(None), Ok(Ordering::Greater));
        assert_eq!(one.compare_dyn(Some(&Half::MAX as &dyn Any)), Ok(Ordering::Less));
        assert_eq!(one.compare_dyn(Some(&Half::ONE as &dyn Any)), Ok(Ordering::Equal));
        assert_eq!(
            one.compare_dyn(Some(&1.0f32 as &dyn Any)),
            Err(HalfError::TypeMismatch)
        );
        assert_eq!(
            one.compare_dyn(Some(&"1" as &dyn Any)),
            Err(HalfError::TypeMismatch)
        );
        assert!(one.equals_dyn(Some(&Half::ONE as &dyn Any)));
        assert!(!one.equals_dyn(Some(&1.0f32 as &dyn Any)));
        assert!(!one.equals_dyn(None));
    }
}
