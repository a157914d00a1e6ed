//! Traits provided by this crate

use crate::Error;
use rand_core::RngCore;

/// Random number generation support.
pub trait Random: Sized {
    /// Generate a random value.
    ///
    /// If `rng` is a CSRNG, the generation is cryptographically secure as well.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;
}

/// Random bits generation support.
pub trait RandomBits: Sized {
    /// Generate a random value in range `[0, 2^bit_length)`.
    ///
    /// Returns [`Error::OperandTooWide`] if `bit_length` exceeds the precision of the type.
    fn try_random_bits<R: RngCore + ?Sized>(rng: &mut R, bit_length: u32) -> Result<Self, Error>;
}
