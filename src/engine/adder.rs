//! The `n`-bit add/subtract primitive every candidate subtraction is built on.

use super::geometry::Geometry;
use crate::{Limb, Uint};
use subtle::{Choice, ConditionallySelectable};

/// An `n`-bit two's-complement adder with carry in and carry out.
///
/// Storage may be wider than `n`; the sum is kept to `n` bits and the carry is taken from bit
/// `n`, exactly as an `n`-bit ripple adder would report it.
#[derive(Clone, Copy, Debug)]
pub struct WideAdder {
    width: u32,
}

impl WideAdder {
    /// Adder for the operand width of `geometry`.
    pub const fn new(geometry: &Geometry) -> Self {
        Self {
            width: geometry.width(),
        }
    }

    /// Computes `lhs + rhs + carry_in` over `n` bits, returning the sum and the carry out.
    ///
    /// Both operands must already fit in `n` bits.
    pub fn add<const LIMBS: usize>(
        &self,
        lhs: &Uint<LIMBS>,
        rhs: &Uint<LIMBS>,
        carry_in: Choice,
    ) -> (Uint<LIMBS>, Choice) {
        let carry = Limb::conditional_select(&Limb::ZERO, &Limb::ONE, carry_in);
        let (sum, carry) = lhs.carrying_add(rhs, carry);

        if self.width >= Uint::<LIMBS>::BITS {
            (sum, carry.lsb_to_choice())
        } else {
            (sum.restrict_bits(self.width), sum.bit(self.width))
        }
    }

    /// Computes `lhs - rhs` over `n` bits by inverting `rhs` and adding with a carry in of one.
    ///
    /// The carry out is truthy when the difference is non-negative (`lhs >= rhs`).
    pub fn sub<const LIMBS: usize>(
        &self,
        lhs: &Uint<LIMBS>,
        rhs: &Uint<LIMBS>,
    ) -> (Uint<LIMBS>, Choice) {
        let inverted = rhs.not().restrict_bits(self.width);
        self.add(lhs, &inverted, Choice::from(1))
    }
}

#[cfg(test)]
mod tests {
    use super::WideAdder;
    use crate::{Geometry, U256, Uint};
    use subtle::Choice;

    #[test]
    fn add_carries_out_of_narrow_width() {
        let adder = WideAdder::new(&Geometry::new(8));
        let (sum, carry) = adder.add(
            &Uint::<1>::from_u8(0xF0),
            &Uint::<1>::from_u8(0x20),
            Choice::from(0),
        );
        assert_eq!(sum, Uint::<1>::from_u8(0x10));
        assert!(bool::from(carry));
    }

    #[test]
    fn add_carry_in() {
        let adder = WideAdder::new(&Geometry::new(8));
        let (sum, carry) = adder.add(
            &Uint::<1>::from_u8(0x0F),
            &Uint::<1>::ZERO,
            Choice::from(1),
        );
        assert_eq!(sum, Uint::<1>::from_u8(0x10));
        assert!(!bool::from(carry));
    }

    #[test]
    fn sub_non_negative() {
        let adder = WideAdder::new(&Geometry::new(8));
        let (diff, carry) = adder.sub(&Uint::<1>::from_u8(23), &Uint::<1>::from_u8(20));
        assert_eq!(diff, Uint::<1>::from_u8(3));
        assert!(bool::from(carry));

        let (diff, carry) = adder.sub(&Uint::<1>::from_u8(5), &Uint::<1>::from_u8(5));
        assert_eq!(diff, Uint::<1>::ZERO);
        assert!(bool::from(carry));
    }

    #[test]
    fn sub_negative() {
        let adder = WideAdder::new(&Geometry::new(8));
        let (diff, carry) = adder.sub(&Uint::<1>::from_u8(3), &Uint::<1>::from_u8(5));
        assert_eq!(diff, Uint::<1>::from_u8(0xFE));
        assert!(!bool::from(carry));
    }

    #[test]
    fn full_width_storage() {
        let adder = WideAdder::new(&Geometry::new(256));
        let (diff, carry) = adder.sub(&U256::ZERO, &U256::ONE);
        assert_eq!(diff, U256::MAX);
        assert!(!bool::from(carry));

        let (sum, carry) = adder.add(&U256::MAX, &U256::ZERO, Choice::from(1));
        assert_eq!(sum, U256::ZERO);
        assert!(bool::from(carry));
    }
}
