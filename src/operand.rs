//! Sign-and-magnitude operands.

use crate::Uint;
use core::ops::BitXor;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Sign bit of an operand or result.
///
/// Only used for the sign outputs; the division itself works on magnitudes.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Sign {
    /// Sign bit clear.
    #[default]
    Positive,
    /// Sign bit set.
    Negative,
}

impl Sign {
    /// Sign from a raw sign bit (`true` is negative).
    pub const fn from_bit(negative: bool) -> Self {
        if negative {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    /// Raw sign bit.
    pub const fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }
}

impl BitXor for Sign {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self::from_bit(self.is_negative() ^ rhs.is_negative())
    }
}

/// A sign bit plus an unsigned magnitude, as presented on the divider's inputs.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Operand<const LIMBS: usize> {
    sign: Sign,
    magnitude: Uint<LIMBS>,
}

impl<const LIMBS: usize> Operand<LIMBS> {
    /// Operand with the given sign and magnitude.
    pub const fn new(sign: Sign, magnitude: Uint<LIMBS>) -> Self {
        Self { sign, magnitude }
    }

    /// Non-negative operand.
    pub const fn positive(magnitude: Uint<LIMBS>) -> Self {
        Self::new(Sign::Positive, magnitude)
    }

    /// Negative operand.
    pub const fn negative(magnitude: Uint<LIMBS>) -> Self {
        Self::new(Sign::Negative, magnitude)
    }

    /// Sign bit.
    pub const fn sign(&self) -> Sign {
        self.sign
    }

    /// Unsigned magnitude.
    pub const fn magnitude(&self) -> &Uint<LIMBS> {
        &self.magnitude
    }
}

impl<const LIMBS: usize> From<Uint<LIMBS>> for Operand<LIMBS> {
    fn from(magnitude: Uint<LIMBS>) -> Self {
        Self::positive(magnitude)
    }
}

#[cfg(feature = "zeroize")]
impl<const LIMBS: usize> Zeroize for Operand<LIMBS> {
    fn zeroize(&mut self) {
        self.sign = Sign::Positive;
        self.magnitude.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::{Operand, Sign};
    use crate::U128;
    
    #[test]
    fn sign_xor() {
        assert_eq!(Sign::Positive ^ Sign::Positive, Sign::Positive);
        assert_eq!(Sign::Positive ^ Sign::Negative, Sign::Negative);
        assert_eq!(Sign::Negative ^ Sign::Positive, Sign::Negative);
        assert_eq!(Sign::Negative ^ Sign::Negative, Sign::Positive);
    }

    #[test]
    fn default_is_positive_zero() {
        let op = Operand::<{ U128::LIMBS }>::default();
        assert_eq!(op.sign(), Sign::Positive);
        assert_eq!(op.magnitude(), &U128::ZERO);
    }

    #[test]
    fn from_uint_is_positive() {
        let op = Operand::from(U128::from_u8(42));
        assert!(!op.sign().is_negative());
        assert!(Operand::negative(U128::ONE).sign().is_negative());
    }
}
