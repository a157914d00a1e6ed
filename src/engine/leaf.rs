//! Fixed-width "index of highest set bit" lookups used as the base case of the two-level finder.

use crate::{Word, word};

/// Highest set bit of every 4-bit value; index 0 maps to 0.
const NIBBLE_HIGHEST_BIT: [u8; 16] = [0, 0, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3];

/// Width of a leaf leading-bit lookup.
///
/// A finder is composed from two leaves, one for the coarse group flags and one for the bits of
/// a single group. The smallest width covering each side is chosen once, when the
/// [`Geometry`][`crate::Geometry`] is built.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LeafWidth {
    /// Up to 4 bits: a single table lookup.
    Bits4,
    /// Up to 8 bits.
    Bits8,
    /// Up to 16 bits.
    Bits16,
    /// Up to 32 bits.
    Bits32,
    /// Up to 64 bits.
    Bits64,
}

impl LeafWidth {
    /// Smallest leaf able to search a `bits`-wide vector.
    ///
    /// # Panics
    /// - if `bits` exceeds [`Word::BITS`].
    pub const fn for_bits(bits: u32) -> Self {
        match bits {
            0..=4 => LeafWidth::Bits4,
            5..=8 => LeafWidth::Bits8,
            9..=16 => LeafWidth::Bits16,
            17..=32 => LeafWidth::Bits32,
            33..=64 => LeafWidth::Bits64,
            _ => panic!("leaf width exceeds a word"),
        }
    }

    /// Number of input bits this leaf searches.
    pub const fn bits(self) -> u32 {
        match self {
            LeafWidth::Bits4 => 4,
            LeafWidth::Bits8 => 8,
            LeafWidth::Bits16 => 16,
            LeafWidth::Bits32 => 32,
            LeafWidth::Bits64 => 64,
        }
    }

    /// Index of the highest set bit among the low [`LeafWidth::bits`] bits of `input`.
    ///
    /// Returns 0 when none of those bits is set. Wider leaves halve the search window until a
    /// nibble remains, then finish with a table lookup.
    #[inline]
    pub const fn highest_set_bit(self, input: Word) -> u32 {
        let mut x = input & word::low_mask(self.bits());
        let mut index = 0;
        let mut half = self.bits() / 2;

        while half >= 4 {
            let step = ((x >> half != 0) as u32) * half;
            x >>= step;
            index += step;
            half /= 2;
        }

        index + NIBBLE_HIGHEST_BIT[(x & 0xF) as usize] as u32
    }
}

#[cfg(test)]
mod tests {
    use super::LeafWidth;
    use crate::Word;

    const ALL: [LeafWidth; 5] = [
        LeafWidth::Bits4,
        LeafWidth::Bits8,
        LeafWidth::Bits16,
        LeafWidth::Bits32,
        LeafWidth::Bits64,
    ];

    #[test]
    fn for_bits_picks_smallest() {
        assert_eq!(LeafWidth::for_bits(1), LeafWidth::Bits4);
        assert_eq!(LeafWidth::for_bits(4), LeafWidth::Bits4);
        assert_eq!(LeafWidth::for_bits(5), LeafWidth::Bits8);
        assert_eq!(LeafWidth::for_bits(16), LeafWidth::Bits16);
        assert_eq!(LeafWidth::for_bits(17), LeafWidth::Bits32);
        assert_eq!(LeafWidth::for_bits(64), LeafWidth::Bits64);
    }

    #[test]
    #[should_panic(expected = "leaf width exceeds a word")]
    fn for_bits_too_wide() {
        let _ = LeafWidth::for_bits(65);
    }

    #[test]
    fn zero_input_is_index_zero() {
        for leaf in ALL {
            assert_eq!(leaf.highest_set_bit(0), 0);
        }
    }

    #[test]
    fn single_bits() {
        for leaf in ALL {
            for i in 0..leaf.bits() {
                assert_eq!(leaf.highest_set_bit(1 << i), i, "{leaf:?} bit {i}");
            }
        }
    }

    #[test]
    fn matches_leading_zeros() {
        for leaf in ALL {
            let mask = if leaf.bits() == Word::BITS {
                Word::MAX
            } else {
                (1 << leaf.bits()) - 1
            };
            let mut x: Word = 0x9E37_79B9_7F4A_7C15;
            for _ in 0..256 {
                x = x.rotate_left(7) ^ x.wrapping_mul(0x2545_F491_4F6C_DD1D);
                let v = x & mask;
                if v != 0 {
                    assert_eq!(leaf.highest_set_bit(v), Word::BITS - 1 - v.leading_zeros());
                }
            }
        }
    }

    #[test]
    fn bits_above_width_are_ignored() {
        assert_eq!(LeafWidth::Bits4.highest_set_bit(0xF0), 0);
        assert_eq!(LeafWidth::Bits8.highest_set_bit(0x1_02), 1);
    }
}
