//! Macro definitions which are a part of the public API.

/// Calculate the number of limbs required to represent the given number of bits.
#[macro_export]
macro_rules! nlimbs {
    ($bits:expr) => {
        (($bits + $crate::Limb::BITS - 1) / $crate::Limb::BITS) as usize
    };
}
