// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts on caller preconditions and arithmetic postconditions.
//!
//! The core trusts its callers: a misaligned "aligned" read or a divisor of
//! zero is the caller's bug. These contracts run at tier 2 only, so they
//! vanish from baseline builds and catch the bug with a diagnostic in
//! paranoid ones.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function     | Property                                      |
//! |-----------------------|-----------------------------------------------|
//! | `check_window`        | `offset + size <= len`, computed without overflow |
//! | `check_aligned`       | address is a multiple of the word alignment   |
//! | `check_power_of_two`  | `align_up` argument has one bit set           |
//! | `check_clamp_bounds`  | `lo <= hi`                                    |
//! | `check_div_round_up`  | `(q - 1) * y < x <= q * y`                    |

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The overflow boundaries of the arithmetic, checked while the crate builds.
/// If any of these fails, the crate won't compile.
const _: () = {
    use crate::arith;

    // INVARIANT: div_round_up never forms x + y - 1
    assert!(arith::u32::div_round_up(0xffff_fffa, 10) == 429_496_729);
    assert!(arith::u32::div_round_up(0xffff_fffd, 10) == 429_496_730);
    assert!(arith::u64::div_round_up(u64::MAX, 2) == 1 << 63);

    // INVARIANT: align_up saturates instead of wrapping to zero
    assert!(arith::u32::align_up(0, 8) == 0);
    assert!(arith::u32::align_up(1, 8) == 8);
    assert!(arith::u32::align_up(0xffff_fff1, 8) == 0xffff_fff8);
    assert!(arith::u32::align_up(0xffff_ffff, 8) == u32::MAX);
    assert!(arith::u32::checked_align_up(0xffff_ffff, 8).is_none());

    // INVARIANT: less_by never underflows
    assert!(arith::u8::less_by(0, u8::MAX) == 0);
};

use crate::check_on;
use crate::config::Tier;

const CONTRACT: Tier = Tier::optional(2);

// ============================================================================
// MEMORY ACCESS CONTRACTS
// ============================================================================

/// Check that a `size`-byte window at `offset` fits in `len` bytes.
#[inline]
pub fn check_window(len: usize, offset: usize, size: usize) {
    check_on!(CONTRACT, offset <= len && size <= len - offset);
}

/// Check that `addr` is a multiple of `align`.
#[inline]
pub fn check_aligned(addr: usize, align: usize) {
    check_on!(CONTRACT, addr % align == 0);
}

// ============================================================================
// ARITHMETIC CONTRACTS
// ============================================================================

/// Check the `align_up` precondition.
#[inline]
pub fn check_power_of_two(to: u128) {
    check_on!(CONTRACT, to.is_power_of_two());
}

/// Check the `clamp` precondition.
#[inline]
pub fn check_clamp_bounds<T: Ord>(lo: T, hi: T) {
    check_on!(CONTRACT, lo <= hi);
}

/// Check that `q` is the rounded-up quotient of `x / y`.
///
/// `q * y` may exceed the operand range when `x` is near its maximum, so an
/// overflowing product counts as `>= x`.
#[inline]
pub fn check_div_round_up(x: u128, y: u128, q: u128) {
    check_on!(
        CONTRACT,
        q.checked_mul(y).is_none_or(|product| product >= x)
            && (q == 0 || (q - 1).checked_mul(y).is_some_and(|product| product < x))
    );
}
