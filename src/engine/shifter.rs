//! Variable left shifter producing both divisor alignments of an iteration.

use super::{geometry::Geometry, shift_amount::ShiftAmount};
use crate::Uint;
use subtle::ConditionallySelectable;

/// The divisor aligned for both candidate subtractions of one iteration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Candidates<const LIMBS: usize> {
    /// Divisor shifted left by the biased shift amount.
    pub exact: Uint<LIMBS>,
    /// Divisor shifted left by the biased shift amount plus one.
    pub plus_one: Uint<LIMBS>,
}

impl<const LIMBS: usize> Candidates<LIMBS> {
    /// Align `divisor` by `shift`.
    ///
    /// The shift itself is performed once, into a double-width result of which only the low `n`
    /// bits are kept. The `plus_one` alignment appends a zero bit below the low `n - 1` bits of
    /// that result. When the shift amount is invalid both candidates are the unshifted divisor.
    pub fn new(divisor: &Uint<LIMBS>, shift: &ShiftAmount, geometry: &Geometry) -> Self {
        let width = geometry.width();

        let (lower, _upper) =
            Uint::overflowing_shl_vartime_wide((*divisor, Uint::ZERO), shift.value())
                .unwrap_or_default();

        let shifted = lower.restrict_bits(width);
        let doubled = shifted.restrict_bits(width - 1).shl1();

        Self {
            exact: Uint::conditional_select(divisor, &shifted, shift.is_valid()),
            plus_one: Uint::conditional_select(divisor, &doubled, shift.is_valid()),
        }
    }
}
