//! Property tests for the engine stages against `num_bigint::BigUint`.

mod common;

use common::to_biguint;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use proptest::prelude::*;
use wide_divider::{
    Geometry, U256, U4096,
    engine::{Iteration, LeadingBit, ShiftAmount, leading_bit_index, one_hot},
};

const WIDTH: u32 = 256;

prop_compose! {
    fn uint()(bytes in any::<[u8; 32]>(), bits in 0u32..=WIDTH) -> U256 {
        U256::from_le_slice(&bytes).restrict_bits(bits)
    }
}
prop_compose! {
    fn nonzero_uint()(n in uint()) -> U256 {
        if n == U256::ZERO { U256::ONE } else { n }
    }
}
prop_compose! {
    fn uint_large()(bytes in any::<[u8; 512]>(), bits in 1u32..=4096) -> U4096 {
        U4096::from_le_slice(&bytes).restrict_bits(bits).set_bit_vartime(bits - 1, true)
    }
}

proptest! {
    #[test]
    fn leading_bit_brackets_value(v in nonzero_uint()) {
        let g = Geometry::new(WIDTH);
        let index = leading_bit_index(&v, &g);

        let v_bi = to_biguint(&v);
        let low = BigUint::one() << index as usize;
        prop_assert!(low <= v_bi);
        prop_assert!(v_bi < low << 1usize);
        prop_assert_eq!(u64::from(index) + 1, v_bi.bits());
    }

    #[test]
    fn leading_bit_parts(v in nonzero_uint()) {
        let g = Geometry::new(WIDTH);
        let lead = LeadingBit::find(&v, &g);
        prop_assert_eq!(lead.index, lead.coarse * g.group_bits() + lead.fine);
        prop_assert!(lead.coarse < g.groups());
        prop_assert!(lead.fine < g.group_bits());
    }

    #[test]
    fn leading_bit_4096(v in uint_large()) {
        let g = Geometry::new(4096);
        prop_assert_eq!(leading_bit_index(&v, &g) + 1, v.bits_vartime());
    }

    #[test]
    fn one_hot_inverts_leading_bit(x in 0u32..WIDTH) {
        let g = Geometry::new(WIDTH);
        let v: U256 = one_hot(x, 1u8.into(), &g);

        prop_assert_eq!(to_biguint(&v), BigUint::one() << x as usize);
        prop_assert_eq!(leading_bit_index(&v, &g), x);
    }

    #[test]
    fn shift_amount_matches_subtraction(log_rem in 0u32..WIDTH, log_dr in 0u32..WIDTH) {
        let g = Geometry::new(WIDTH);
        let shift = ShiftAmount::new(log_rem, log_dr, &g);

        prop_assert_eq!(bool::from(shift.is_valid()), log_rem > log_dr);
        if log_rem > log_dr {
            prop_assert_eq!(shift.value(), log_rem - log_dr - 1);
        }
    }

    #[test]
    fn committed_step_keeps_invariant(remainder in uint(), divisor in nonzero_uint()) {
        let g = Geometry::new(WIDTH);
        let it = Iteration::evaluate(&remainder, &divisor, &g);
        let (rem_bi, dr_bi) = (to_biguint(&remainder), to_biguint(&divisor));

        prop_assert_eq!(bool::from(it.is_terminal()), rem_bi < dr_bi);

        if !bool::from(it.is_terminal()) {
            let (next, bit) = it.commit(&U256::ZERO);
            let bit_bi = to_biguint(&bit);

            // exactly one quotient bit, and the remainder shrinks by that multiple of the divisor
            prop_assert_eq!(bit_bi.count_ones(), 1);
            prop_assert_eq!(to_biguint(&next) + &bit_bi * &dr_bi, rem_bi.clone());
            prop_assert!(to_biguint(&next) < bit_bi * dr_bi);
        }
    }
}

#[test]
fn zero_value_reports_index_zero() {
    for width in [8, 32, 256, 4096] {
        let g = Geometry::new(width);
        assert_eq!(leading_bit_index(&U4096::ZERO, &g), 0);
    }
    assert!(to_biguint(&U256::ZERO).is_zero());
}
