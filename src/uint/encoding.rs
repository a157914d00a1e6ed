//! Const-friendly decoding and encoding operations for [`Uint`].

use crate::{Limb, Uint, Word};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Create a [`Uint`] from a `u8` (const-friendly)
    pub const fn from_u8(n: u8) -> Self {
        assert!(LIMBS >= 1, "number of limbs must be greater than zero");
        let mut limbs = [Limb::ZERO; LIMBS];
        limbs[0].0 = n as Word;
        Self { limbs }
    }

    /// Create a [`Uint`] from a `u16` (const-friendly)
    pub const fn from_u16(n: u16) -> Self {
        assert!(LIMBS >= 1, "number of limbs must be greater than zero");
        let mut limbs = [Limb::ZERO; LIMBS];
        limbs[0].0 = n as Word;
        Self { limbs }
    }

    /// Create a [`Uint`] from a `u32` (const-friendly)
    pub const fn from_u32(n: u32) -> Self {
        assert!(LIMBS >= 1, "number of limbs must be greater than zero");
        let mut limbs = [Limb::ZERO; LIMBS];
        limbs[0].0 = n as Word;
        Self { limbs }
    }

    /// Create a [`Uint`] from a `u64` (const-friendly)
    pub const fn from_u64(n: u64) -> Self {
        assert!(LIMBS >= 1, "number of limbs must be greater than zero");
        let mut limbs = [Limb::ZERO; LIMBS];
        limbs[0].0 = n;
        Self { limbs }
    }

    /// Create a [`Uint`] from a `u128` (const-friendly)
    ///
    /// # Panics
    /// - if the value does not fit in `LIMBS` limbs.
    pub const fn from_u128(n: u128) -> Self {
        assert!(LIMBS >= 1, "number of limbs must be greater than zero");
        assert!(
            LIMBS >= 2 || n >> Limb::BITS == 0,
            "u128 value does not fit in a single limb"
        );

        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;

        while i < LIMBS && i < 2 {
            limbs[i].0 = (n >> (i as u32 * Limb::BITS)) as Word;
            i += 1;
        }

        Self { limbs }
    }

    /// Create a new [`Uint`] from the provided big endian hex string.
    ///
    /// Shorter strings are zero-extended.
    ///
    /// # Panics
    /// - if the string is longer than `2 * Self::BYTES` digits or contains a non-hex character.
    pub const fn from_be_hex(hex: &str) -> Self {
        let bytes = hex.as_bytes();

        assert!(
            bytes.len() <= Self::BYTES * 2,
            "hex string is too long for this integer"
        );

        let mut limbs = [Limb::ZERO; LIMBS];
        let digits_per_limb = Limb::BYTES * 2;
        let mut i = 0;

        while i < bytes.len() {
            let digit = decode_hex_digit(bytes[bytes.len() - 1 - i]);
            let limb = i / digits_per_limb;
            let shift = (i % digits_per_limb) as u32 * 4;
            limbs[limb].0 |= (digit as Word) << shift;
            i += 1;
        }

        Self { limbs }
    }

    /// Create a new [`Uint`] from the provided little endian bytes.
    ///
    /// Shorter slices are zero-extended.
    ///
    /// # Panics
    /// - if the slice is longer than `Self::BYTES`.
    pub const fn from_le_slice(bytes: &[u8]) -> Self {
        assert!(
            bytes.len() <= Self::BYTES,
            "byte slice is too long for this integer"
        );

        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;

        while i < bytes.len() {
            let limb = i / Limb::BYTES;
            let shift = (i % Limb::BYTES) as u32 * 8;
            limbs[limb].0 |= (bytes[i] as Word) << shift;
            i += 1;
        }

        Self { limbs }
    }

    /// Write the little endian encoding of this integer into `out`.
    ///
    /// Bytes past `Self::BYTES` are zeroed; a short buffer receives the least significant bytes.
    pub fn write_le_bytes(&self, out: &mut [u8]) {
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = match self.limbs.get(i / Limb::BYTES) {
                Some(limb) => limb.to_le_bytes()[i % Limb::BYTES],
                None => 0,
            };
        }
    }
}

/// Decode a single ASCII hex digit.
const fn decode_hex_digit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => panic!("invalid hex digit"),
    }
}

impl<const LIMBS: usize> From<u8> for Uint<LIMBS> {
    fn from(n: u8) -> Self {
        Self::from_u8(n)
    }
}

impl<const LIMBS: usize> From<u16> for Uint<LIMBS> {
    fn from(n: u16) -> Self {
        Self::from_u16(n)
    }
}

impl<const LIMBS: usize> From<u32> for Uint<LIMBS> {
    fn from(n: u32) -> Self {
        Self::from_u32(n)
    }
}

impl<const LIMBS: usize> From<u64> for Uint<LIMBS> {
    fn from(n: u64) -> Self {
        Self::from_u64(n)
    }
}

impl<const LIMBS: usize> From<Limb> for Uint<LIMBS> {
    fn from(limb: Limb) -> Self {
        Self::from_u64(limb.0)
    }
}
