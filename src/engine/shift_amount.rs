//! Shift amount between the leading bits of the remainder and the divisor.

use super::geometry::Geometry;
use subtle::Choice;

/// Biased shift amount `log_rem - log_dr - 1` together with its validity flag.
///
/// The bias places the two candidate alignments of an iteration at `value` and `value + 1`:
/// the divisor's leading bit one short of, or exactly at, the remainder's.
#[derive(Clone, Copy, Debug)]
pub struct ShiftAmount {
    value: u32,
    valid: Choice,
}

impl ShiftAmount {
    /// Compute the shift amount from the leading-bit indices of the remainder and divisor.
    ///
    /// This is a ones'-complement subtraction: `log_rem + !log_dr` with no carry in, kept to
    /// [`Geometry::index_bits`] bits. The carry out is set exactly when `log_rem > log_dr`; when
    /// the indices are equal or the divisor is higher, the flag is clear and the caller uses the
    /// unshifted divisor.
    pub fn new(log_rem: u32, log_dr: u32, geometry: &Geometry) -> Self {
        let mask = geometry.index_mask();
        let sum = (log_rem & mask) + (!log_dr & mask);

        Self {
            value: sum & mask,
            valid: Choice::from((sum >> geometry.index_bits()) as u8),
        }
    }

    /// Raw biased shift amount. Only meaningful when [`ShiftAmount::is_valid`] is set.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Carry out of the calculation: truthy iff the remainder's leading bit is strictly above
    /// the divisor's.
    pub fn is_valid(&self) -> Choice {
        self.valid
    }
}

#[cfg(test)]
mod tests {
    use super::ShiftAmount;
    use crate::Geometry;

    #[test]
    fn remainder_above_divisor() {
        let g = Geometry::new(8);
        let s = ShiftAmount::new(4, 2, &g);
        assert_eq!(s.value(), 1);
        assert!(bool::from(s.is_valid()));
    }

    #[test]
    fn adjacent_indices_give_zero() {
        let g = Geometry::new(256);
        let s = ShiftAmount::new(100, 99, &g);
        assert_eq!(s.value(), 0);
        assert!(bool::from(s.is_valid()));
    }

    #[test]
    fn equal_indices_are_invalid() {
        let g = Geometry::new(256);
        for i in 0..256 {
            assert!(!bool::from(ShiftAmount::new(i, i, &g).is_valid()));
        }
    }

    #[test]
    fn divisor_above_remainder_is_invalid() {
        let g = Geometry::new(64);
        assert!(!bool::from(ShiftAmount::new(3, 40, &g).is_valid()));
        assert!(!bool::from(ShiftAmount::new(0, 63, &g).is_valid()));
    }

    #[test]
    fn exhaustive_width_32() {
        let g = Geometry::new(32);
        for rem in 0..32 {
            for dr in 0..32 {
                let s = ShiftAmount::new(rem, dr, &g);
                assert_eq!(bool::from(s.is_valid()), rem > dr);
                if rem > dr {
                    assert_eq!(s.value(), rem - dr - 1);
                }
            }
        }
    }

    #[test]
    fn widest_shift() {
        let g = Geometry::new(4096);
        let s = ShiftAmount::new(4095, 0, &g);
        assert_eq!(s.value(), 4094);
        assert!(bool::from(s.is_valid()));
    }
}
