// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for overflow-safe arithmetic.
//!
//! Every result is compared with the naive formula evaluated in `u128`, where
//! it cannot overflow. The fuzzer is good at finding the values just below
//! MAX that break `x + y - 1`.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stdaux::arith;

#[derive(Debug, Arbitrary)]
struct Input {
    x: u64,
    y: u64,
    shift: u8,
}

fuzz_target!(|input: Input| {
    let Input { x, y, shift } = input;
    let (wx, wy) = (u128::from(x), u128::from(y));

    assert_eq!(u128::from(arith::u64::less_by(x, y)), wx.saturating_sub(wy));
    assert_eq!(arith::u64::max(x, y), x.max(y));
    assert_eq!(arith::u64::min(x, y), x.min(y));

    if y != 0 {
        let q = arith::u64::div_round_up(x, y);
        assert_eq!(u128::from(q), (wx + wy - 1) / wy);
    }

    let to = 1u64 << (shift % 64);
    let wto = u128::from(to);
    let wide = (wx + wto - 1) / wto * wto;
    match arith::u64::checked_align_up(x, to) {
        Some(aligned) => assert_eq!(u128::from(aligned), wide),
        None => {
            assert!(wide > u128::from(u64::MAX));
            assert_eq!(arith::u64::align_up(x, to), u64::MAX);
        }
    }
});
