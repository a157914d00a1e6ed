//! [`Uint`] bitwise AND operations.

use super::Uint;
use crate::Limb;
use core::ops::{BitAnd, BitAndAssign};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Computes bitwise `a & b`.
    #[inline(always)]
    #[must_use]
    pub const fn bitand(&self, rhs: &Self) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            limbs[i] = Limb(self.limbs[i].0 & rhs.limbs[i].0);
            i += 1;
        }

        Self { limbs }
    }
}

impl<const LIMBS: usize> BitAnd for Uint<LIMBS> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Uint<LIMBS> {
        Uint::bitand(&self, &rhs)
    }
}

impl<const LIMBS: usize> BitAnd<&Uint<LIMBS>> for Uint<LIMBS> {
    type Output = Uint<LIMBS>;

    fn bitand(self, rhs: &Uint<LIMBS>) -> Uint<LIMBS> {
        Uint::bitand(&self, rhs)
    }
}

impl<const LIMBS: usize> BitAndAssign for Uint<LIMBS> {
    fn bitand_assign(&mut self, other: Self) {
        *self = Uint::bitand(self, &other);
    }
}

impl<const LIMBS: usize> BitAndAssign<&Uint<LIMBS>> for Uint<LIMBS> {
    fn bitand_assign(&mut self, other: &Self) {
        *self = Uint::bitand(self, other);
    }
}
