//! `Word` represents the core integer type we use as the core of `Limb`.
//!
//! It is fixed at 64 bits on every target so that any leading-bit group of up to 64 bits fits in
//! a single word and never straddles two limbs.

use subtle::Choice;

/// Unsigned integer type that the [`Limb`][`crate::Limb`] newtype wraps.
pub type Word = u64;

/// Wide integer type: double the width of [`Word`].
pub type WideWord = u128;

/// Returns the truthy value if `value != 0`, and the falsy value otherwise.
#[inline]
pub(crate) fn choice_from_nz(value: Word) -> Choice {
    Choice::from(((value | value.wrapping_neg()) >> (Word::BITS - 1)) as u8)
}

/// Returns the truthy value if `value & 1 == 1`, and the falsy value otherwise.
#[inline]
pub(crate) fn choice_from_lsb(value: Word) -> Choice {
    Choice::from((value & 1) as u8)
}

/// Mask covering the lowest `len` bits of a [`Word`]. Saturates at [`Word::BITS`].
#[inline]
pub(crate) const fn low_mask(len: u32) -> Word {
    if len == 0 {
        0
    } else if len >= Word::BITS {
        Word::MAX
    } else {
        Word::MAX >> (Word::BITS - len)
    }
}
