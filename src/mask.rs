use std::fmt;

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

/// Integer representation of a subset of an `n` element universe.
///
/// Bit `j` (counted from the least significant bit) is set iff element `j`
/// belongs to the subset. Implemented for `u64`, which covers universes of up
/// to 63 elements, and for [`BigUint`], which covers everything else.
pub trait Mask: Clone + Ord + fmt::Debug {
    /// Whether `2^n` is representable, i.e. whether this type can scan a
    /// universe of `n` elements.
    fn supports(n: usize) -> bool;

    fn zero() -> Self;

    /// `2^n`, one past the largest mask of an `n` element universe.
    ///
    /// Callers must check [`Mask::supports`] first.
    fn universe(n: usize) -> Self;

    fn increment(&mut self);

    /// Must not be called on zero.
    fn decrement(&mut self);

    fn bit(&self, index: usize) -> bool;

    /// Population count: the number of elements in the subset.
    fn count_ones(&self) -> u64;

    /// Convert a subset count, `None` if it does not fit.
    fn from_count(count: &BigUint) -> Option<Self>;
}

impl Mask for u64 {
    fn supports(n: usize) -> bool {
        n < u64::BITS as usize
    }

    fn zero() -> Self {
        0
    }

    fn universe(n: usize) -> Self {
        debug_assert!(Self::supports(n));
        1 << n
    }

    fn increment(&mut self) {
        *self += 1;
    }

    fn decrement(&mut self) {
        debug_assert!(*self > 0);
        *self -= 1;
    }

    fn bit(&self, index: usize) -> bool {
        index < u64::BITS as usize && (self >> index) & 1 == 1
    }

    fn count_ones(&self) -> u64 {
        u64::count_ones(*self) as u64
    }

    fn from_count(count: &BigUint) -> Option<Self> {
        count.to_u64()
    }
}

impl Mask for BigUint {
    fn supports(_n: usize) -> bool {
        true
    }

    fn zero() -> Self {
        Zero::zero()
    }

    fn universe(n: usize) -> Self {
        BigUint::one() << n
    }

    fn increment(&mut self) {
        *self += 1u32;
    }

    fn decrement(&mut self) {
        debug_assert!(!self.is_zero());
        *self -= 1u32;
    }

    fn bit(&self, index: usize) -> bool {
        BigUint::bit(self, index as u64)
    }

    fn count_ones(&self) -> u64 {
        BigUint::count_ones(self)
    }

    fn from_count(count: &BigUint) -> Option<Self> {
        Some(count.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn native_masks_stop_below_word_width() {
        assert!(<u64 as Mask>::supports(0));
        assert!(<u64 as Mask>::supports(63));
        assert!(!<u64 as Mask>::supports(64));
        assert!(<BigUint as Mask>::supports(4096));
    }

    #[test]
    fn universe_is_power_of_two() {
        assert_eq!(<u64 as Mask>::universe(0), 1);
        assert_eq!(<u64 as Mask>::universe(5), 32);
        assert_eq!(<u64 as Mask>::universe(63), 1 << 63);
        assert_eq!(
            <BigUint as Mask>::universe(100),
            BigUint::from(1u128 << 100)
        );
    }

    #[test]
    fn big_masks_step_across_word_boundary() {
        let mut mask = BigUint::from(u64::MAX);
        mask.increment();
        assert_eq!(mask, <BigUint as Mask>::universe(64));
        assert!(Mask::bit(&mask, 64));
        assert_eq!(Mask::count_ones(&mask), 1);
        mask.decrement();
        assert_eq!(mask, BigUint::from(u64::MAX));
        assert_eq!(Mask::count_ones(&mask), 64);
    }

    #[test]
    fn native_bit_beyond_width_is_clear() {
        assert!(!Mask::bit(&u64::MAX, 64));
        assert!(!Mask::bit(&u64::MAX, 1000));
    }

    #[test]
    fn count_conversion() {
        assert_eq!(<u64 as Mask>::from_count(&BigUint::from(7u32)), Some(7));
        assert_eq!(
            <u64 as Mask>::from_count(&<BigUint as Mask>::universe(64)),
            None
        );
    }

    proptest! {
        #[test]
        fn native_and_big_masks_agree(value in any::<u64>(), index in 0usize..70) {
            let big = BigUint::from(value);
            prop_assert_eq!(Mask::bit(&value, index), Mask::bit(&big, index));
            prop_assert_eq!(Mask::count_ones(&value), Mask::count_ones(&big));
        }
    }
}
