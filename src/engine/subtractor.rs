//! Dual-candidate subtractor: both trial subtractions of an iteration, evaluated together.

use super::{adder::WideAdder, geometry::Geometry, shifter::Candidates};
use crate::Uint;
use subtle::Choice;

/// Result of one trial subtraction.
#[derive(Clone, Copy, Debug)]
pub struct Difference<const LIMBS: usize> {
    /// `remainder - candidate` modulo `2^n`.
    pub value: Uint<LIMBS>,
    /// Carry out of the adder; truthy iff the difference is non-negative.
    pub carry: Choice,
}

/// Both trial subtractions `remainder - candidate`.
#[derive(Clone, Copy, Debug)]
pub struct CandidateDifferences<const LIMBS: usize> {
    /// Difference against the divisor at the biased shift amount.
    pub exact: Difference<LIMBS>,
    /// Difference against the divisor at the biased shift amount plus one.
    pub plus_one: Difference<LIMBS>,
}

impl<const LIMBS: usize> CandidateDifferences<LIMBS> {
    /// Subtract both candidates from `remainder`.
    pub fn evaluate(
        remainder: &Uint<LIMBS>,
        candidates: &Candidates<LIMBS>,
        geometry: &Geometry,
    ) -> Self {
        let adder = WideAdder::new(geometry);
        let (exact, exact_carry) = adder.sub(remainder, &candidates.exact);
        let (plus_one, plus_one_carry) = adder.sub(remainder, &candidates.plus_one);

        Self {
            exact: Difference {
                value: exact,
                carry: exact_carry,
            },
            plus_one: Difference {
                value: plus_one,
                carry: plus_one_carry,
            },
        }
    }

    /// Truthy when neither candidate fits under the remainder.
    pub fn both_negative(&self) -> Choice {
        !(self.exact.carry | self.plus_one.carry)
    }
}

#[cfg(test)]
mod tests {
    use super::CandidateDifferences;
    use crate::{
        Geometry, Uint,
        engine::{shift_amount::ShiftAmount, shifter::Candidates},
    };

    fn differences(rem: u8, dr: u8, log_rem: u32, log_dr: u32) -> CandidateDifferences<1> {
        let g = Geometry::new(8);
        let shift = ShiftAmount::new(log_rem, log_dr, &g);
        let candidates = Candidates::new(&Uint::<1>::from_u8(dr), &shift, &g);
        CandidateDifferences::evaluate(&Uint::<1>::from_u8(rem), &candidates, &g)
    }

    #[test]
    fn both_fit() {
        // 23 - 10, 23 - 20
        let d = differences(23, 5, 4, 2);
        assert_eq!(d.exact.value, Uint::<1>::from_u8(13));
        assert!(bool::from(d.exact.carry));
        assert_eq!(d.plus_one.value, Uint::<1>::from_u8(3));
        assert!(bool::from(d.plus_one.carry));
        assert!(!bool::from(d.both_negative()));
    }

    #[test]
    fn only_exact_fits() {
        // 17 - 10, 17 - 20
        let d = differences(17, 5, 4, 2);
        assert_eq!(d.exact.value, Uint::<1>::from_u8(7));
        assert!(bool::from(d.exact.carry));
        assert!(!bool::from(d.plus_one.carry));
    }

    #[test]
    fn neither_fits() {
        // 3 - 5, invalid shift
        let d = differences(3, 5, 1, 2);
        assert!(!bool::from(d.exact.carry));
        assert!(!bool::from(d.plus_one.carry));
        assert!(bool::from(d.both_negative()));
    }
}
