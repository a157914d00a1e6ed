//! [`Uint`] comparisons.

use super::Uint;
use core::cmp::Ordering;
use subtle::{Choice, ConstantTimeEq};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Returns the [`Ordering`] between `self` and `rhs` in variable time.
    pub const fn cmp_vartime(&self, rhs: &Self) -> Ordering {
        let mut i = LIMBS;
        while i > 0 {
            i -= 1;
            let (a, b) = (self.limbs[i].0, rhs.limbs[i].0);
            if a != b {
                return if a > b {
                    Ordering::Greater
                } else {
                    Ordering::Less
                };
            }
        }
        Ordering::Equal
    }
}

impl<const LIMBS: usize> ConstantTimeEq for Uint<LIMBS> {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        let mut acc = Choice::from(1);
        for (a, b) in self.limbs.iter().zip(other.limbs.iter()) {
            acc &= a.ct_eq(b);
        }
        acc
    }
}

impl<const LIMBS: usize> Eq for Uint<LIMBS> {}

impl<const LIMBS: usize> Ord for Uint<LIMBS> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_vartime(other)
    }
}

impl<const LIMBS: usize> PartialOrd for Uint<LIMBS> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const LIMBS: usize> PartialEq for Uint<LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}
