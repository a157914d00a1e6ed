//! Division controller: the reset/load/step state machine around the engine.

use crate::{
    Error, Result, Uint,
    engine::{Geometry, Iteration},
    operand::{Operand, Sign},
};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Operation status of a [`Divider`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Status {
    /// Nothing loaded since construction or the last reset.
    #[default]
    NotLoaded,
    /// Operands loaded; each step commits one quotient bit or latches DONE.
    Running,
    /// Terminal. Stays here until the next reset or load.
    Done,
}

impl Status {
    /// Whether operands have been loaded since the last reset.
    pub const fn is_loaded(self) -> bool {
        !matches!(self, Status::NotLoaded)
    }

    /// Whether DONE is latched.
    pub const fn is_done(self) -> bool {
        matches!(self, Status::Done)
    }
}

/// Signal-level inputs sampled on one [`Divider::tick`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Inputs<const LIMBS: usize> {
    /// Clears all state. Overrides every other input.
    pub reset: bool,
    /// One-shot initialisation pulse.
    pub load: bool,
    /// Level start: initialises only while nothing is loaded.
    pub start: bool,
    /// Dividend presented on the operand bus.
    pub dividend: Operand<LIMBS>,
    /// Divisor presented on the operand bus.
    pub divisor: Operand<LIMBS>,
}

/// Signal-level outputs after one [`Divider::tick`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Outputs<const LIMBS: usize> {
    /// Sticky DONE level.
    pub done: bool,
    /// Quotient sign and magnitude. The magnitude is final only once `done` is set.
    pub quotient: Operand<LIMBS>,
    /// Remainder sign and magnitude. The magnitude is final only once `done` is set.
    pub remainder: Operand<LIMBS>,
}

/// Result of a completed division.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DivRem<const LIMBS: usize> {
    /// Quotient: sign is the XOR of the operand signs.
    pub quotient: Operand<LIMBS>,
    /// Remainder: sign is the dividend's sign.
    pub remainder: Operand<LIMBS>,
}

/// Iterative wide divider of a fixed operand width.
///
/// The divider owns the remainder and quotient registers. Each [`Divider::step`] recomputes the
/// whole engine from those registers and either commits one quotient bit or latches DONE.
///
/// ```
/// use wide_divider::{Divider, Geometry, Uint};
///
/// let mut divider = Divider::<1>::new(Geometry::new(8));
/// let result = divider.divide(Uint::<1>::from_u8(23), Uint::<1>::from_u8(5)).unwrap();
///
/// assert_eq!(result.quotient.magnitude(), &Uint::<1>::from_u8(4));
/// assert_eq!(result.remainder.magnitude(), &Uint::<1>::from_u8(3));
/// ```
#[derive(Clone, Debug)]
pub struct Divider<const LIMBS: usize> {
    geometry: Geometry,
    dividend: Operand<LIMBS>,
    divisor: Operand<LIMBS>,
    remainder: Uint<LIMBS>,
    quotient: Uint<LIMBS>,
    status: Status,
    steps: u32,
}

impl<const LIMBS: usize> Divider<LIMBS> {
    /// Create a divider for the operand width of `geometry`.
    ///
    /// # Panics
    /// - if the width exceeds the storage size [`Uint::BITS`].
    pub const fn new(geometry: Geometry) -> Self {
        assert!(
            geometry.width() <= Uint::<LIMBS>::BITS,
            "operand width exceeds storage"
        );

        Self {
            geometry,
            dividend: Operand::positive(Uint::ZERO),
            divisor: Operand::positive(Uint::ZERO),
            remainder: Uint::ZERO,
            quotient: Uint::ZERO,
            status: Status::NotLoaded,
            steps: 0,
        }
    }

    /// Create a divider for a `width`-bit operand, reporting unsupported widths.
    pub fn with_width(width: u32) -> Result<Self> {
        let geometry = Geometry::try_new(width)?;

        if width > Uint::<LIMBS>::BITS {
            return Err(Error::InvalidWidth(width));
        }

        Ok(Self::new(geometry))
    }

    /// Width configuration of this divider.
    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Clear all state: remainder, quotient, latched operands, loaded and DONE.
    pub fn reset(&mut self) {
        *self = Self::new(self.geometry);

        #[cfg(feature = "log")]
        log::debug!("divider reset (width {})", self.geometry.width());
    }

    /// Latch both operands and start a new division.
    ///
    /// The remainder is initialised to the dividend's magnitude and the quotient to zero. A
    /// previous DONE is cleared. Magnitudes wider than the configured width are rejected and
    /// leave the divider unchanged.
    pub fn load(
        &mut self,
        dividend: impl Into<Operand<LIMBS>>,
        divisor: impl Into<Operand<LIMBS>>,
    ) -> Result<()> {
        let dividend = dividend.into();
        let divisor = divisor.into();
        let width = self.geometry.width();

        for operand in [&dividend, &divisor] {
            let bits = operand.magnitude().bits_vartime();
            if bits > width {
                return Err(Error::OperandTooWide { bits, width });
            }
        }

        self.dividend = dividend;
        self.divisor = divisor;
        self.remainder = *dividend.magnitude();
        self.quotient = Uint::ZERO;
        self.status = Status::Running;
        self.steps = 0;

        #[cfg(feature = "log")]
        log::debug!(
            "divider loaded: dividend {:x}, divisor {:x}",
            self.remainder,
            divisor.magnitude()
        );

        Ok(())
    }

    /// Level start: load the operands only if nothing is loaded yet.
    ///
    /// Returns `true` when this call initialised the divider. Holding start after a load never
    /// reinitialises the remainder or quotient.
    pub fn start(
        &mut self,
        dividend: impl Into<Operand<LIMBS>>,
        divisor: impl Into<Operand<LIMBS>>,
    ) -> Result<bool> {
        if self.status.is_loaded() {
            return Ok(false);
        }

        self.load(dividend, divisor)?;
        Ok(true)
    }

    /// Advance one discrete step.
    ///
    /// Does nothing unless the divider is running. Otherwise the engine is evaluated from the
    /// current remainder and divisor: if neither candidate fits or the divisor is zero, DONE is
    /// latched; otherwise the winning candidate is committed.
    pub fn step(&mut self) -> Status {
        if self.status != Status::Running {
            return self.status;
        }

        let iteration = Iteration::evaluate(&self.remainder, self.divisor.magnitude(), &self.geometry);

        if bool::from(iteration.is_terminal()) {
            self.status = Status::Done;

            #[cfg(feature = "log")]
            log::debug!(
                "divider done after {} steps: quotient {:x}, remainder {:x}",
                self.steps,
                self.quotient,
                self.remainder
            );

            return self.status;
        }

        let (remainder, quotient) = iteration.commit(&self.quotient);
        self.remainder = remainder;
        self.quotient = quotient;
        self.steps += 1;

        #[cfg(feature = "log")]
        log::trace!(
            "divider step {}: shift {} (valid {}), plus_one {}",
            self.steps,
            iteration.shift.value(),
            bool::from(iteration.shift.is_valid()),
            bool::from(iteration.takes_plus_one())
        );

        self.status
    }

    /// Apply one clock edge of the signal-level protocol.
    ///
    /// Priority is reset, then load (or start while not loaded), then step.
    pub fn tick(&mut self, inputs: &Inputs<LIMBS>) -> Result<Outputs<LIMBS>> {
        if inputs.reset {
            self.reset();
        } else if inputs.load || (inputs.start && !self.status.is_loaded()) {
            self.load(inputs.dividend, inputs.divisor)?;
        } else {
            self.step();
        }

        Ok(self.outputs())
    }

    /// Step until DONE and return the result.
    ///
    /// A running division needs at most one step per operand bit plus the terminal step.
    pub fn run(&mut self) -> Result<DivRem<LIMBS>> {
        if !self.status.is_loaded() {
            return Err(Error::NotLoaded);
        }

        for _ in 0..=self.geometry.width() {
            if self.step().is_done() {
                return Ok(self.div_rem());
            }
        }

        Err(Error::StepLimit { steps: self.steps })
    }

    /// Load `dividend` and `divisor` and run to DONE.
    pub fn divide(
        &mut self,
        dividend: impl Into<Operand<LIMBS>>,
        divisor: impl Into<Operand<LIMBS>>,
    ) -> Result<DivRem<LIMBS>> {
        self.load(dividend, divisor)?;
        self.run()
    }

    /// Current output signals.
    pub fn outputs(&self) -> Outputs<LIMBS> {
        let DivRem {
            quotient,
            remainder,
        } = self.div_rem();

        Outputs {
            done: self.status.is_done(),
            quotient,
            remainder,
        }
    }

    /// Final quotient and remainder, once DONE is latched.
    pub fn result(&self) -> Option<DivRem<LIMBS>> {
        self.status.is_done().then(|| self.div_rem())
    }

    /// Quotient sign: dividend sign XOR divisor sign of the loaded operands.
    pub fn quotient_sign(&self) -> Sign {
        self.dividend.sign() ^ self.divisor.sign()
    }

    /// Remainder sign: the loaded dividend's sign.
    pub fn remainder_sign(&self) -> Sign {
        self.dividend.sign()
    }

    /// Current remainder register.
    pub fn remainder(&self) -> &Uint<LIMBS> {
        &self.remainder
    }

    /// Current quotient register.
    pub fn quotient(&self) -> &Uint<LIMBS> {
        &self.quotient
    }

    /// Current operation status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Number of committed steps of the current operation.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    fn div_rem(&self) -> DivRem<LIMBS> {
        DivRem {
            quotient: Operand::new(self.quotient_sign(), self.quotient),
            remainder: Operand::new(self.remainder_sign(), self.remainder),
        }
    }
}

impl<const LIMBS: usize> Default for Divider<LIMBS> {
    /// Divider using the full storage width. Panics if [`Uint::BITS`] is not a supported width.
    fn default() -> Self {
        Self::new(Geometry::new(Uint::<LIMBS>::BITS))
    }
}

#[cfg(feature = "zeroize")]
impl<const LIMBS: usize> Zeroize for Divider<LIMBS> {
    fn zeroize(&mut self) {
        self.dividend.zeroize();
        self.divisor.zeroize();
        self.remainder.zeroize();
        self.quotient.zeroize();
        self.status = Status::NotLoaded;
        self.steps = 0;
    }
}
