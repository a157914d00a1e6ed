//! Random number generator support

use super::Uint;
use crate::{Error, Limb, Random, RandomBits};
use rand_core::RngCore;

impl<const LIMBS: usize> Random for Uint<LIMBS> {
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];

        for limb in &mut limbs {
            *limb = Limb::random(rng);
        }

        limbs.into()
    }
}

impl<const LIMBS: usize> RandomBits for Uint<LIMBS> {
    fn try_random_bits<R: RngCore + ?Sized>(rng: &mut R, bit_length: u32) -> Result<Self, Error> {
        if bit_length > Self::BITS {
            return Err(Error::OperandTooWide {
                bits: bit_length,
                width: Self::BITS,
            });
        }

        Ok(Self::random(rng).restrict_bits(bit_length))
    }
}
