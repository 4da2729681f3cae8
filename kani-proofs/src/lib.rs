// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for stdaux arithmetic and memory primitives.
//!
//! This standalone crate extracts the overflow-sensitive functions and proves
//! them for every input using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No overflow**: div_round_up and align_up never overflow or panic
//! 2. **Exactness**: both match the naive formula evaluated in a wider type
//! 3. **Saturation**: align_up returns MAX exactly when no multiple fits
//! 4. **Byte order**: composing bytes matches `from_be_bytes`/`from_le_bytes`

// ============================================================================
// ARITHMETIC (copied from src/arith.rs, u32 instantiation)
// ============================================================================

/// `ceil(x / y)` for `y > 0`.
pub const fn div_round_up(x: u32, y: u32) -> u32 {
    x / y + (x % y != 0) as u32
}

/// Smallest multiple of `to` that is `>= x`, or `None` if it exceeds MAX.
pub const fn checked_align_up(x: u32, to: u32) -> Option<u32> {
    let mask = to - 1;
    match x.checked_add(mask) {
        Some(bumped) => Some(bumped & !mask),
        None => None,
    }
}

/// Saturating form of [`checked_align_up`].
pub const fn align_up(x: u32, to: u32) -> u32 {
    match checked_align_up(x, to) {
        Some(aligned) => aligned,
        None => u32::MAX,
    }
}

// ============================================================================
// BYTE COMPOSITION (copied from src/memory.rs)
// ============================================================================

/// Big endian if `big`, little endian otherwise.
pub fn compose(window: &[u8], big: bool) -> u64 {
    let mut acc: u64 = 0;
    if big {
        for &b in window {
            acc = (acc << 8) | u64::from(b);
        }
    } else {
        for &b in window.iter().rev() {
            acc = (acc << 8) | u64::from(b);
        }
    }
    acc
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify div_round_up matches the naive ceiling for every x and y > 0.
    #[kani::proof]
    fn verify_div_round_up_exact() {
        let x: u32 = kani::any();
        let y: u32 = kani::any_where(|&y| y > 0);

        let q = div_round_up(x, y);
        let expected = (u64::from(x) + u64::from(y) - 1) / u64::from(y);
        kani::assert(u64::from(q) == expected, "div_round_up must equal the wide ceiling");
    }

    /// Verify the quotient brackets x: (q - 1) * y < x <= q * y.
    #[kani::proof]
    fn verify_div_round_up_brackets() {
        let x: u32 = kani::any();
        let y: u32 = kani::any_where(|&y| y > 0);

        let q = u64::from(div_round_up(x, y));
        let (x, y) = (u64::from(x), u64::from(y));
        kani::assert(q * y >= x, "q * y must reach x");
        kani::assert(q == 0 || (q - 1) * y < x, "q must be the smallest such quotient");
    }

    /// Verify align_up for every x and every power of two.
    #[kani::proof]
    fn verify_align_up_exact_or_saturated() {
        let x: u32 = kani::any();
        let shift: u32 = kani::any_where(|&s| s < 32);
        let to = 1u32 << shift;

        let wide = (u64::from(x) + u64::from(to) - 1) / u64::from(to) * u64::from(to);
        match checked_align_up(x, to) {
            Some(aligned) => {
                kani::assert(u64::from(aligned) == wide, "aligned value must be exact");
                kani::assert(aligned % to == 0, "aligned value must be a multiple");
                kani::assert(aligned >= x, "aligned value must not be below x");
            }
            None => {
                kani::assert(wide > u64::from(u32::MAX), "None only when nothing fits");
                kani::assert(align_up(x, to) == u32::MAX, "saturating form returns MAX");
            }
        }
    }

    /// Verify 4-byte composition agrees with the standard decoders.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_compose_u32() {
        let bytes: [u8; 4] = kani::any();
        kani::assert(
            compose(&bytes, true) == u64::from(u32::from_be_bytes(bytes)),
            "big endian composition",
        );
        kani::assert(
            compose(&bytes, false) == u64::from(u32::from_le_bytes(bytes)),
            "little endian composition",
        );
    }

    /// Verify 8-byte composition agrees with the standard decoders.
    #[kani::proof]
    #[kani::unwind(9)]
    fn verify_compose_u64() {
        let bytes: [u8; 8] = kani::any();
        kani::assert(compose(&bytes, true) == u64::from_be_bytes(bytes), "big endian composition");
        kani::assert(
            compose(&bytes, false) == u64::from_le_bytes(bytes),
            "little endian composition",
        );
    }
}
