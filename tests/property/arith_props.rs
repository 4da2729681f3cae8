//! Arithmetic property tests.
//!
//! Every operation is compared against the same computation in `u128`,
//! where the naive formula cannot overflow:
//! - div_round_up equals the naive ceiling and brackets `x`
//! - align_up is the smallest aligned value `>= x`, or saturates
//! - less_by never underflows

use proptest::prelude::*;
use stdaux::arith;
use stdaux::SafeArith;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Values biased toward the top of the range, where the naive formulas break.
fn near_max_u64() -> impl Strategy<Value = u64> {
    prop_oneof![
        any::<u64>(),
        (0u64..=4096).prop_map(|d| u64::MAX - d),
    ]
}

fn power_of_two_u64() -> impl Strategy<Value = u64> {
    (0u32..64).prop_map(|shift| 1u64 << shift)
}

// ============================================================================
// ORDERING PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: max/min return one of their arguments and bound the other.
    #[test]
    fn prop_max_min_bound_both(a: i64, b: i64) {
        let hi = arith::i64::max(a, b);
        let lo = arith::i64::min(a, b);
        prop_assert!(hi == a || hi == b);
        prop_assert!(lo == a || lo == b);
        prop_assert!(hi >= a && hi >= b);
        prop_assert!(lo <= a && lo <= b);
    }

    /// Property: clamp agrees with the standard library whenever lo <= hi.
    #[test]
    fn prop_clamp_matches_std(v: i32, x: i32, y: i32) {
        let (lo, hi) = if x <= y { (x, y) } else { (y, x) };
        prop_assert_eq!(arith::i32::clamp(v, lo, hi), v.clamp(lo, hi));
    }

    /// Property: the trait path clamps like the const fn.
    #[test]
    fn prop_safe_clamp_matches_const_fn(v: u32, x: u32, y: u32) {
        let (lo, hi) = if x <= y { (x, y) } else { (y, x) };
        prop_assert_eq!(v.safe_clamp(lo, hi), arith::u32::clamp(v, lo, hi));
    }

    /// Property: less_by is saturating subtraction.
    #[test]
    fn prop_less_by_saturates(a: u64, b: u64) {
        prop_assert_eq!(arith::u64::less_by(a, b), a.saturating_sub(b));
    }
}

// ============================================================================
// DIVISION PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Property: div_round_up equals the naive ceiling computed in u128.
    #[test]
    fn prop_div_round_up_matches_wide_reference(x in near_max_u64(), y in 1u64..) {
        let expected = (u128::from(x) + u128::from(y) - 1) / u128::from(y);
        prop_assert_eq!(u128::from(arith::u64::div_round_up(x, y)), expected);
        prop_assert_eq!(u128::from(x.div_round_up(y)), expected);
    }

    /// Property: (q - 1) * y < x <= q * y.
    #[test]
    fn prop_div_round_up_brackets(x: u32, y in 1u32..) {
        let q = u64::from(arith::u32::div_round_up(x, y));
        let (x, y) = (u64::from(x), u64::from(y));
        prop_assert!(q * y >= x);
        if q > 0 {
            prop_assert!((q - 1) * y < x);
        }
    }
}

// ============================================================================
// ALIGNMENT PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Property: align_up is the smallest multiple of `to` not below `x`, or
    /// MAX when that multiple does not fit.
    #[test]
    fn prop_align_up_matches_wide_reference(x in near_max_u64(), to in power_of_two_u64()) {
        let wide = (u128::from(x) + u128::from(to) - 1) / u128::from(to) * u128::from(to);
        let checked = arith::u64::checked_align_up(x, to);
        if wide > u128::from(u64::MAX) {
            prop_assert_eq!(checked, None);
            prop_assert_eq!(arith::u64::align_up(x, to), u64::MAX);
        } else {
            prop_assert_eq!(checked.map(u128::from), Some(wide));
            prop_assert_eq!(u128::from(arith::u64::align_up(x, to)), wide);
        }
    }

    /// Property: a representable result is aligned and within `to - 1` of `x`.
    #[test]
    fn prop_align_up_result_is_tight(x: u32, shift in 0u32..32) {
        let to = 1u32 << shift;
        if let Some(aligned) = arith::u32::checked_align_up(x, to) {
            prop_assert_eq!(aligned % to, 0);
            prop_assert!(aligned >= x);
            prop_assert!(aligned - x < to);
        }
    }

    /// Property: align_up never wraps to a value below its input.
    #[test]
    fn prop_align_up_never_wraps(x in near_max_u64(), to in power_of_two_u64()) {
        prop_assert!(arith::u64::align_up(x, to) >= x);
    }
}
