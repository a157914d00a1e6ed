//! Common functionality shared between tests.

// Different tests may use only a subset of the available functionality
#![allow(dead_code)]

use num_bigint::BigUint;
use wide_divider::{Limb, Uint};

/// `Uint` to `num_bigint::BigUint`
pub fn to_biguint<T>(uint: &T) -> BigUint
where
    T: AsRef<[Limb]>,
{
    let mut bytes = Vec::with_capacity(uint.as_ref().len() * Limb::BYTES);

    for limb in uint.as_ref() {
        bytes.extend_from_slice(&limb.to_le_bytes());
    }

    BigUint::from_bytes_le(&bytes)
}

/// `num_bigint::BigUint` to `Uint`, truncating to the storage size.
pub fn to_uint<const LIMBS: usize>(big_uint: &BigUint) -> Uint<LIMBS> {
    let encoded = big_uint.to_bytes_le();
    let l = encoded.len().min(Uint::<LIMBS>::BYTES);
    Uint::from_le_slice(&encoded[..l])
}
