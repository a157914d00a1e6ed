//! Error type.

use core::fmt;

/// Result type with the crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported by the host-facing divider API.
///
/// The iteration engine itself never fails: divide-by-zero is a defined outcome, not an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Operand width is not a power of two within the supported range.
    InvalidWidth(u32),

    /// An operand magnitude needs more bits than the configured width provides.
    OperandTooWide {
        /// Number of bits the value requires.
        bits: u32,
        /// Configured operand width.
        width: u32,
    },

    /// The divider was asked to run without loaded operands.
    NotLoaded,

    /// The divider did not latch DONE within its step bound.
    StepLimit {
        /// Steps taken before giving up.
        steps: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidWidth(width) => write!(
                f,
                "operand width {width} is not a power of two between {} and {}",
                crate::Geometry::MIN_WIDTH,
                crate::Geometry::MAX_WIDTH
            ),
            Error::OperandTooWide { bits, width } => {
                write!(f, "operand needs {bits} bits but the width is {width}")
            }
            Error::NotLoaded => f.write_str("no operands loaded"),
            Error::StepLimit { steps } => write!(f, "division did not finish in {steps} steps"),
        }
    }
}

impl core::error::Error for Error {}
