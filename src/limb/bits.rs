use super::Limb;
use crate::word;

impl Limb {
    /// Returns `true` if the bit at position `index` is set, `false` for an unset bit
    /// or for indices out of range.
    #[inline(always)]
    #[must_use]
    pub const fn bit_vartime(self, index: u32) -> bool {
        if index >= Limb::BITS {
            false
        } else {
            (self.0 >> index) & 1 == 1
        }
    }

    /// Calculate the number of bits needed to represent this number.
    #[inline(always)]
    #[must_use]
    pub const fn bits(self) -> u32 {
        Limb::BITS - self.0.leading_zeros()
    }

    /// Clear bits at or above the given bit position.
    #[inline(always)]
    #[must_use]
    pub const fn restrict_bits(self, len: u32) -> Self {
        Limb(self.0 & word::low_mask(len))
    }
}
