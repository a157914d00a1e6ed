//! Wide unsigned magnitude division.
//!
//! # About
//! This library computes the quotient and remainder of two sign-and-magnitude operands of a
//! fixed power-of-two width between 8 and 4096 bits. Division is iterative: each step aligns the
//! divisor under the remainder's leading bit and commits one quotient bit, so a division takes at
//! most one step per operand bit.
//!
//! The leading bits are located with a two-level search. An `n`-bit vector is cut into `k`
//! groups of `q ≈ √n` bits; a small lookup over the per-group "nonzero" flags picks the highest
//! occupied group and a second lookup picks the highest bit inside it.
//!
//! # Goals
//! - No heap allocations i.e. `no_std`-friendly.
//! - Const generic storage ([`Uint`]) with `subtle` choices for every carry and select.
//! - A step-level API ([`Divider::step`], [`Divider::tick`]) mirroring the reset/load/start
//!   protocol of the divider, plus one-shot [`Divider::divide`].
//!
//! # Usage
//! ```
//! use wide_divider::{Divider, Geometry, Operand, Sign, U256};
//!
//! let mut divider = Divider::<{ U256::LIMBS }>::new(Geometry::new(256));
//! let dividend = Operand::negative(U256::from_be_hex("0123456789abcdef0123456789abcdef"));
//! let divisor = Operand::positive(U256::from_u64(0xfedc_ba98));
//!
//! let result = divider.divide(dividend, divisor)?;
//! assert_eq!(result.quotient.sign(), Sign::Negative);
//! assert!(result.remainder.magnitude() < divisor.magnitude());
//! # Ok::<(), wide_divider::Error>(())
//! ```
//!
//! # Cargo features
//! - `rand` (default): random [`Uint`] generation via `rand_core`.
//! - `serde`: hex/binary serialization of [`Limb`] and [`Uint`] via `serdect`.
//! - `zeroize`: scrubbing of operands and divider state.
//! - `log`: `debug!`/`trace!` records of divider transitions.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code, clippy::unwrap_used)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

#[macro_use]
mod macros;

mod divider;
pub mod engine;
mod error;
mod limb;
mod operand;
mod primitives;
#[cfg(feature = "rand_core")]
mod traits;
mod uint;
mod word;

pub use crate::{
    divider::{DivRem, Divider, Inputs, Outputs, Status},
    engine::{Geometry, LeafWidth},
    error::{Error, Result},
    limb::Limb,
    operand::{Operand, Sign},
    uint::*,
    word::{WideWord, Word},
};
pub use subtle;

#[cfg(feature = "rand_core")]
pub use crate::traits::{Random, RandomBits};
#[cfg(feature = "rand_core")]
pub use rand_core;

#[cfg(feature = "zeroize")]
pub use zeroize;
