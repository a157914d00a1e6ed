//! [`Uint`] bitwise right shift operations.

use crate::{Limb, Uint};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Computes `self >> shift` in variable time in a panic-free manner, returning zero if the
    /// shift exceeds the precision.
    ///
    /// NOTE: this operation is variable time with respect to `shift` *ONLY*.
    #[must_use]
    pub const fn unbounded_shr_vartime(&self, shift: u32) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];

        if shift >= Self::BITS {
            return Self { limbs };
        }

        let shift_num = (shift / Limb::BITS) as usize;
        let rem = shift % Limb::BITS;

        let mut i = 0;
        while i + shift_num < LIMBS {
            let src = i + shift_num;
            let mut limb = self.limbs[src].0 >> rem;
            if rem != 0 && src + 1 < LIMBS {
                limb |= self.limbs[src + 1].0 << (Limb::BITS - rem);
            }
            limbs[i] = Limb(limb);
            i += 1;
        }

        Self { limbs }
    }
}
