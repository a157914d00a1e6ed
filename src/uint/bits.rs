use crate::{Limb, Uint, Word, word};
use subtle::Choice;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Get the value of the bit at position `index`, as a truthy or falsy `Choice`.
    /// Returns the falsy value for indices out of range.
    pub fn bit(&self, index: u32) -> Choice {
        Choice::from(self.bit_vartime(index) as u8)
    }

    /// Returns `true` if the bit at position `index` is set, `false` otherwise.
    ///
    /// # Remarks
    /// This operation is variable time with respect to `index` only.
    #[inline(always)]
    pub const fn bit_vartime(&self, index: u32) -> bool {
        if index >= Self::BITS {
            false
        } else {
            self.limbs[(index / Limb::BITS) as usize].bit_vartime(index % Limb::BITS)
        }
    }

    /// Sets the bit at `index` to 0 or 1 depending on the value of `bit_value`,
    /// variable time in `self`. Indices out of range are ignored.
    #[must_use]
    pub const fn set_bit_vartime(mut self, index: u32, bit_value: bool) -> Self {
        if index < Self::BITS {
            let limb = (index / Limb::BITS) as usize;
            let mask: Word = 1 << (index % Limb::BITS);
            if bit_value {
                self.limbs[limb].0 |= mask;
            } else {
                self.limbs[limb].0 &= !mask;
            }
        }
        self
    }

    /// Calculate the number of bits needed to represent this number in variable-time with respect
    /// to `self`.
    pub const fn bits_vartime(&self) -> u32 {
        let mut i = LIMBS;
        while i > 0 {
            i -= 1;
            let limb = self.limbs[i];
            if limb.0 != 0 {
                return i as u32 * Limb::BITS + limb.bits();
            }
        }
        0
    }

    /// Determine if this value is equal to zero.
    pub fn is_zero(&self) -> Choice {
        let mut acc: Word = 0;
        for limb in &self.limbs {
            acc |= limb.0;
        }
        !word::choice_from_nz(acc)
    }

    /// Clear any bits at or above a given bit position.
    #[must_use]
    pub const fn restrict_bits(mut self, len: u32) -> Self {
        let mut i = 0;
        while i < LIMBS {
            let lo = i as u32 * Limb::BITS;
            self.limbs[i] = if len <= lo {
                Limb::ZERO
            } else {
                self.limbs[i].restrict_bits(len - lo)
            };
            i += 1;
        }
        self
    }

    /// Read the `len`-bit field starting at bit `offset` into the low bits of a [`Word`].
    ///
    /// `len` must not exceed [`Limb::BITS`]. Bits beyond the end of the integer read as zero.
    #[inline]
    pub const fn bit_field(&self, offset: u32, len: u32) -> Word {
        debug_assert!(len <= Limb::BITS);
        let limb = (offset / Limb::BITS) as usize;
        let shift = offset % Limb::BITS;

        if limb >= LIMBS {
            return 0;
        }

        let mut field = self.limbs[limb].0 >> shift;
        if shift != 0 && shift + len > Limb::BITS && limb + 1 < LIMBS {
            field |= self.limbs[limb + 1].0 << (Limb::BITS - shift);
        }

        field & word::low_mask(len)
    }

    /// Overwrite the `len`-bit field starting at bit `offset` with the low bits of `value`.
    ///
    /// `len` must not exceed [`Limb::BITS`]. Bits beyond the end of the integer are dropped.
    #[must_use]
    pub const fn with_bit_field(mut self, offset: u32, len: u32, value: Word) -> Self {
        debug_assert!(len <= Limb::BITS);
        let limb = (offset / Limb::BITS) as usize;
        let shift = offset % Limb::BITS;

        if limb >= LIMBS {
            return self;
        }

        let mask = word::low_mask(len);
        let value = value & mask;

        self.limbs[limb].0 = (self.limbs[limb].0 & !(mask << shift)) | (value << shift);

        if shift != 0 && shift + len > Limb::BITS && limb + 1 < LIMBS {
            let spill = Limb::BITS - shift;
            self.limbs[limb + 1].0 = (self.limbs[limb + 1].0 & !(mask >> spill)) | (value >> spill);
        }

        self
    }
}
