//! [`Uint`] addition operations.

use crate::{Limb, Uint};
use core::ops::Add;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Computes `self + rhs + carry`, returning the result along with the new carry.
    ///
    /// This is the full-width ripple adder every wide subtraction in the divider is built on.
    #[inline(always)]
    #[must_use]
    pub const fn carrying_add(&self, rhs: &Self, mut carry: Limb) -> (Self, Limb) {
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            let (w, c) = self.limbs[i].carrying_add(rhs.limbs[i], carry);
            limbs[i] = w;
            carry = c;
            i += 1;
        }

        (Self { limbs }, carry)
    }
}

impl<const LIMBS: usize> Add for Uint<LIMBS> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let (sum, carry) = self.carrying_add(&rhs, Limb::ZERO);
        assert!(carry.0 == 0, "attempted to add with overflow");
        sum
    }
}

#[cfg(test)]
mod tests {
    use crate::{Limb, U128};

    #[test]
    fn carrying_add_no_carry() {
        let (res, carry) = U128::ZERO.carrying_add(&U128::ONE, Limb::ZERO);
        assert_eq!(res, U128::ONE);
        assert_eq!(carry, Limb::ZERO);
    }

    #[test]
    fn carrying_add_with_carry() {
        let (res, carry) = U128::MAX.carrying_add(&U128::ONE, Limb::ZERO);
        assert_eq!(res, U128::ZERO);
        assert_eq!(carry, Limb::ONE);
    }

    #[test]
    fn carrying_add_carry_in() {
        let (res, carry) = U128::from_u64(41).carrying_add(&U128::ZERO, Limb::ONE);
        assert_eq!(res, U128::from_u64(42));
        assert_eq!(carry, Limb::ZERO);
    }

    #[test]
    fn carry_crosses_limbs() {
        let (res, carry) = U128::from_u64(u64::MAX).carrying_add(&U128::ONE, Limb::ZERO);
        assert_eq!(res, U128::from_words([0, 1]));
        assert_eq!(carry, Limb::ZERO);
    }

    #[test]
    fn add() {
        assert_eq!(U128::from_u64(1) + U128::from_u64(2), U128::from_u64(3));
    }

    #[test]
    #[should_panic(expected = "attempted to add with overflow")]
    fn add_overflow_panics() {
        let _ = U128::MAX + U128::ONE;
    }
}
