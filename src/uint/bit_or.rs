//! [`Uint`] bitwise OR operations.

use super::Uint;
use crate::Limb;
use core::ops::{BitOr, BitOrAssign};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Computes bitwise `a | b`.
    #[inline(always)]
    #[must_use]
    pub const fn bitor(&self, rhs: &Self) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            limbs[i] = Limb(self.limbs[i].0 | rhs.limbs[i].0);
            i += 1;
        }

        Self { limbs }
    }
}

impl<const LIMBS: usize> BitOr for Uint<LIMBS> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Uint<LIMBS> {
        Uint::bitor(&self, &rhs)
    }
}

impl<const LIMBS: usize> BitOr<&Uint<LIMBS>> for Uint<LIMBS> {
    type Output = Uint<LIMBS>;

    fn bitor(self, rhs: &Uint<LIMBS>) -> Uint<LIMBS> {
        Uint::bitor(&self, rhs)
    }
}

impl<const LIMBS: usize> BitOrAssign for Uint<LIMBS> {
    fn bitor_assign(&mut self, other: Self) {
        *self = Uint::bitor(self, &other);
    }
}

impl<const LIMBS: usize> BitOrAssign<&Uint<LIMBS>> for Uint<LIMBS> {
    fn bitor_assign(&mut self, other: &Self) {
        *self = Uint::bitor(self, other);
    }
}
