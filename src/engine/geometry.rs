//! Operand width configuration and the coarse/fine split derived from it.

use super::leaf::LeafWidth;
use crate::{Error, Result};

/// Per-build width configuration of a divider.
///
/// An `n`-bit vector is cut into `k` groups of `q` bits, where `q` is the smallest power of two
/// not below `√n` and `k = n / q`. A bit position `x` then splits into a coarse part `x / q`
/// (which group) and a fine part `x % q` (which bit of the group).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Geometry {
    width: u32,
    index_bits: u32,
    fine_index_bits: u32,
    coarse_index_bits: u32,
    coarse_leaf: LeafWidth,
    fine_leaf: LeafWidth,
}

impl Geometry {
    /// Smallest supported operand width.
    pub const MIN_WIDTH: u32 = 8;

    /// Largest supported operand width.
    pub const MAX_WIDTH: u32 = 4096;

    /// Build the geometry for an operand width of `width` bits.
    ///
    /// # Panics
    /// - if `width` is not a power of two between [`Geometry::MIN_WIDTH`] and
    ///   [`Geometry::MAX_WIDTH`].
    pub const fn new(width: u32) -> Self {
        match Self::checked(width) {
            Some(geometry) => geometry,
            None => panic!("operand width must be a power of two between 8 and 4096"),
        }
    }

    /// Build the geometry for an operand width of `width` bits, reporting unsupported widths.
    pub const fn try_new(width: u32) -> Result<Self> {
        match Self::checked(width) {
            Some(geometry) => Ok(geometry),
            None => Err(Error::InvalidWidth(width)),
        }
    }

    const fn checked(width: u32) -> Option<Self> {
        if !width.is_power_of_two() || width < Self::MIN_WIDTH || width > Self::MAX_WIDTH {
            return None;
        }

        let index_bits = width.trailing_zeros();
        let fine_index_bits = index_bits.div_ceil(2);
        let coarse_index_bits = index_bits - fine_index_bits;

        Some(Self {
            width,
            index_bits,
            fine_index_bits,
            coarse_index_bits,
            coarse_leaf: LeafWidth::for_bits(1 << coarse_index_bits),
            fine_leaf: LeafWidth::for_bits(1 << fine_index_bits),
        })
    }

    /// Operand width `n` in bits.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Width of a bit index, `log2 n`.
    pub const fn index_bits(&self) -> u32 {
        self.index_bits
    }

    /// Width of the fine part of a bit index, `log2 q`.
    pub const fn fine_index_bits(&self) -> u32 {
        self.fine_index_bits
    }

    /// Width of the coarse part of a bit index, `log2 k`.
    pub const fn coarse_index_bits(&self) -> u32 {
        self.coarse_index_bits
    }

    /// Bits per group, `q`.
    pub const fn group_bits(&self) -> u32 {
        1 << self.fine_index_bits
    }

    /// Number of groups, `k`.
    pub const fn groups(&self) -> u32 {
        1 << self.coarse_index_bits
    }

    /// Leaf used to search the `k` group flags.
    pub const fn coarse_leaf(&self) -> LeafWidth {
        self.coarse_leaf
    }

    /// Leaf used to search the `q` bits of one group.
    pub const fn fine_leaf(&self) -> LeafWidth {
        self.fine_leaf
    }

    /// Split a bit index into its `(coarse, fine)` parts.
    #[inline]
    pub const fn split(&self, index: u32) -> (u32, u32) {
        (
            (index >> self.fine_index_bits) & (self.groups() - 1),
            index & (self.group_bits() - 1),
        )
    }

    /// Mask selecting the low [`Geometry::index_bits`] bits of an index.
    #[inline]
    pub const fn index_mask(&self) -> u32 {
        self.width - 1
    }
}
