//! Combinational division engine.
//!
//! Every stage is a pure function of the current remainder and divisor. An [`Iteration`] runs
//! them all once: two leading-bit searches, the shift amount, both divisor alignments with their
//! one-hot quotient bits, and both trial subtractions. The controller in [`crate::Divider`] only
//! decides whether to latch DONE or commit the result.

mod adder;
mod encoder;
mod finder;
mod geometry;
mod leaf;
mod shift_amount;
mod shifter;
mod subtractor;

pub use self::{
    adder::WideAdder,
    encoder::{QuotientBits, one_hot},
    finder::{LeadingBit, group_flags, leading_bit_index},
    geometry::Geometry,
    leaf::LeafWidth,
    shift_amount::ShiftAmount,
    shifter::Candidates,
    subtractor::{CandidateDifferences, Difference},
};

use crate::Uint;
use subtle::{Choice, ConditionallySelectable};

/// All stage outputs of one division step, computed from the current state.
#[derive(Clone, Copy, Debug)]
pub struct Iteration<const LIMBS: usize> {
    /// Leading bit of the remainder.
    pub remainder_lead: LeadingBit,
    /// Leading bit of the divisor.
    pub divisor_lead: LeadingBit,
    /// Biased shift amount and its validity flag.
    pub shift: ShiftAmount,
    /// Aligned divisors.
    pub candidates: Candidates<LIMBS>,
    /// Quotient contribution of each candidate.
    pub quotient_bits: QuotientBits<LIMBS>,
    /// Both trial subtractions.
    pub differences: CandidateDifferences<LIMBS>,
    /// Truthy when the divisor is all-zero.
    pub divisor_is_zero: Choice,
}

impl<const LIMBS: usize> Iteration<LIMBS> {
    /// Evaluate every stage against `remainder` and `divisor`.
    pub fn evaluate(remainder: &Uint<LIMBS>, divisor: &Uint<LIMBS>, geometry: &Geometry) -> Self {
        let remainder_lead = LeadingBit::find(remainder, geometry);
        let divisor_lead = LeadingBit::find(divisor, geometry);

        let shift = ShiftAmount::new(remainder_lead.index, divisor_lead.index, geometry);
        let candidates = Candidates::new(divisor, &shift, geometry);
        let quotient_bits = QuotientBits::new(&shift, geometry);
        let differences = CandidateDifferences::evaluate(remainder, &candidates, geometry);

        Self {
            remainder_lead,
            divisor_lead,
            shift,
            candidates,
            quotient_bits,
            differences,
            divisor_is_zero: divisor.is_zero(),
        }
    }

    /// Truthy when this step must latch DONE instead of committing: neither candidate fits, or
    /// the divisor is zero.
    pub fn is_terminal(&self) -> Choice {
        self.differences.both_negative() | self.divisor_is_zero
    }

    /// Truthy when the commit takes the `shamt + 1` candidate.
    pub fn takes_plus_one(&self) -> Choice {
        self.differences.plus_one.carry
    }

    /// Next `(remainder, quotient)` pair for a committing step.
    ///
    /// The `shamt + 1` candidate wins whenever its difference is non-negative; otherwise the
    /// `shamt` candidate is used. Only meaningful when [`Iteration::is_terminal`] is falsy.
    pub fn commit(&self, quotient: &Uint<LIMBS>) -> (Uint<LIMBS>, Uint<LIMBS>) {
        let plus_one = self.takes_plus_one();

        let remainder = Uint::conditional_select(
            &self.differences.exact.value,
            &self.differences.plus_one.value,
            plus_one,
        );
        let bit = Uint::conditional_select(
            &self.quotient_bits.exact,
            &self.quotient_bits.plus_one,
            plus_one,
        );

        (remainder, quotient.bitor(&bit))
    }
}

#[cfg(test)]
mod tests {
    use super::{Geometry, Iteration};
    use crate::Uint;

    type U8 = Uint<1>;

    #[test]
    fn first_step_of_23_by_5() {
        let g = Geometry::new(8);
        let it = Iteration::evaluate(&U8::from_u8(23), &U8::from_u8(5), &g);
        assert_eq!(it.remainder_lead.index, 4);
        assert_eq!(it.divisor_lead.index, 2);
        assert_eq!(it.shift.value(), 1);
        assert!(!bool::from(it.is_terminal()));
        assert!(bool::from(it.takes_plus_one()));

        let (rem, quo) = it.commit(&U8::ZERO);
        assert_eq!(rem, U8::from_u8(3));
        assert_eq!(quo, U8::from_u8(4));
    }

    #[test]
    fn remainder_below_divisor_is_terminal() {
        let g = Geometry::new(8);
        let it = Iteration::evaluate(&U8::from_u8(3), &U8::from_u8(5), &g);
        assert!(bool::from(it.is_terminal()));
    }

    #[test]
    fn aligned_leading_bits_commit_bit_zero() {
        let g = Geometry::new(8);
        let it = Iteration::evaluate(&U8::from_u8(7), &U8::from_u8(5), &g);
        assert!(!bool::from(it.shift.is_valid()));
        assert!(!bool::from(it.is_terminal()));

        let (rem, quo) = it.commit(&U8::ZERO);
        assert_eq!(rem, U8::from_u8(2));
        assert_eq!(quo, U8::ONE);
    }

    #[test]
    fn exact_candidate_when_plus_one_overshoots() {
        let g = Geometry::new(8);
        // 17: plus_one candidate 20 overshoots, exact candidate 10 fits
        let it = Iteration::evaluate(&U8::from_u8(17), &U8::from_u8(5), &g);
        assert!(!bool::from(it.takes_plus_one()));

        let (rem, quo) = it.commit(&U8::from_u8(0x80));
        assert_eq!(rem, U8::from_u8(7));
        assert_eq!(quo, U8::from_u8(0x82));
    }

    #[test]
    fn zero_divisor_is_terminal() {
        let g = Geometry::new(8);
        let it = Iteration::evaluate(&U8::from_u8(9), &U8::ZERO, &g);
        assert!(bool::from(it.divisor_is_zero));
        assert!(bool::from(it.is_terminal()));
    }
}
