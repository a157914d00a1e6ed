//! One-hot position encoder: the inverse of the leading-bit finder.

use super::{geometry::Geometry, shift_amount::ShiftAmount};
use crate::{Uint, Word};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Expand `position` into an `n`-bit vector with exactly that bit set.
///
/// The position is split like a finder result: the coarse part selects one `q`-bit group and the
/// fine part selects one bit of a generic `q`-bit pattern, and each group receives the pattern
/// only when it is the selected one. If `valid` is falsy the result is forced to position 0.
pub fn one_hot<const LIMBS: usize>(
    position: u32,
    valid: Choice,
    geometry: &Geometry,
) -> Uint<LIMBS> {
    let (coarse, fine) = geometry.split(position);
    let group_bits = geometry.group_bits();
    let fine_pattern: Word = 1 << fine;

    let decoded = (0..geometry.groups()).fold(Uint::ZERO, |acc: Uint<LIMBS>, g| {
        let group_select = Word::conditional_select(&0, &Word::MAX, g.ct_eq(&coarse));
        acc.with_bit_field(g * group_bits, group_bits, group_select & fine_pattern)
    });

    Uint::conditional_select(&Uint::ONE, &decoded, valid)
}

/// Quotient contributions of both candidates of one iteration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct QuotientBits<const LIMBS: usize> {
    /// One-hot vector at the biased shift amount.
    pub exact: Uint<LIMBS>,
    /// One-hot vector at the biased shift amount plus one.
    pub plus_one: Uint<LIMBS>,
}

impl<const LIMBS: usize> QuotientBits<LIMBS> {
    /// Encode the quotient bits matching the two divisor alignments of `shift`.
    ///
    /// An invalid shift means both candidates use the unshifted divisor, so both contribute
    /// position 0.
    pub fn new(shift: &ShiftAmount, geometry: &Geometry) -> Self {
        let valid = shift.is_valid();
        let exact = one_hot(shift.value(), valid, geometry);

        Self {
            exact,
            plus_one: Uint::conditional_select(&Uint::ONE, &exact.shl1(), valid),
        }
    }
}
