//! Two-level leading-bit finder.
//!
//! Rather than scanning all `n` bits, the search runs two small leaf lookups: one over the
//! `k` per-group "nonzero" flags to pick the highest occupied group, then one over the `q` bits
//! of that group. Both leaves are sized independently from the [`Geometry`].

use super::geometry::Geometry;
use crate::{Uint, Word};

/// Highest set bit of an `n`-bit vector, as found by the two-level search.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct LeadingBit {
    /// Index of the highest nonzero group.
    pub coarse: u32,
    /// Index of the highest set bit within that group.
    pub fine: u32,
    /// Combined bit index, `coarse * q + fine`.
    pub index: u32,
}

impl LeadingBit {
    /// Locate the highest set bit of `value`.
    ///
    /// The all-zero vector reports index 0. Callers must not treat that as meaningful: a zero
    /// divisor is caught separately by the controller.
    pub fn find<const LIMBS: usize>(value: &Uint<LIMBS>, geometry: &Geometry) -> Self {
        let group_bits = geometry.group_bits();

        let coarse = geometry
            .coarse_leaf()
            .highest_set_bit(group_flags(value, geometry));

        let group = value.bit_field(coarse * group_bits, group_bits);
        let fine = geometry.fine_leaf().highest_set_bit(group);

        Self {
            coarse,
            fine,
            index: (coarse << geometry.fine_index_bits()) | fine,
        }
    }
}

/// OR-reduce each `q`-bit group of `value` into one flag bit; bit `g` of the result is set when
/// group `g` holds any set bit.
pub fn group_flags<const LIMBS: usize>(value: &Uint<LIMBS>, geometry: &Geometry) -> Word {
    let group_bits = geometry.group_bits();

    (0..geometry.groups()).fold(0, |flags, g| {
        let nonzero = (value.bit_field(g * group_bits, group_bits) != 0) as Word;
        flags | (nonzero << g)
    })
}

/// Index of the highest set bit of `value`, or 0 for the all-zero vector.
#[inline]
pub fn leading_bit_index<const LIMBS: usize>(value: &Uint<LIMBS>, geometry: &Geometry) -> u32 {
    LeadingBit::find(value, geometry).index
}

#[cfg(test)]
mod tests {
    use super::{LeadingBit, group_flags, leading_bit_index};
    use crate::{Geometry, U256, U4096, Uint};

    #[test]
    fn zero_is_index_zero() {
        let g = Geometry::new(256);
        assert_eq!(leading_bit_index(&U256::ZERO, &g), 0);
    }

    #[test]
    fn width_8_values() {
        let g = Geometry::new(8);
        assert_eq!(leading_bit_index(&Uint::<1>::from_u8(0b0001_0111), &g), 4);
        assert_eq!(leading_bit_index(&Uint::<1>::from_u8(0b0000_0101), &g), 2);
        assert_eq!(leading_bit_index(&Uint::<1>::from_u8(1), &g), 0);
        assert_eq!(leading_bit_index(&Uint::<1>::from_u8(0x80), &g), 7);
    }

    #[test]
    fn coarse_and_fine_parts() {
        let g = Geometry::new(256);
        let v = U256::ONE.set_bit_vartime(83, true).set_bit_vartime(5, true);
        let lb = LeadingBit::find(&v, &g);
        assert_eq!(lb.coarse, 5);
        assert_eq!(lb.fine, 3);
        assert_eq!(lb.index, 83);
    }

    #[test]
    fn group_flags_marks_nonzero_groups() {
        let g = Geometry::new(32);
        let v = Uint::<1>::from_u32(0x0100_00F0);
        assert_eq!(group_flags(&v, &g), 0b1001);
    }

    #[test]
    fn every_single_bit_4096() {
        let g = Geometry::new(4096);
        for i in 0..4096 {
            let v = U4096::ZERO.set_bit_vartime(i, true).set_bit_vartime(i / 3, true);
            assert_eq!(leading_bit_index(&v, &g), i);
        }
    }

    #[test]
    fn narrow_width_in_wide_storage() {
        let g = Geometry::new(64);
        let v = U256::from_u64(0x0000_0400_0000_0001);
        assert_eq!(leading_bit_index(&v, &g), 42);
    }
}
