// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Overflow-safe integer arithmetic for sizes and offsets.
//!
//! Every primitive integer type gets a module of `const fn`s
//! (`arith::u32::div_round_up`, `arith::i64::clamp`, ...), so a call with
//! constant arguments is itself a constant expression and can initialize a
//! `const`. Arguments are ordinary parameters, so each is evaluated exactly
//! once no matter which branch is taken.
//!
//! Generic code over unsigned types goes through [`SafeArith`], which
//! delegates to the same functions and adds tier-2 precondition contracts.
//!
//! | Operation      | Types    | Never forms                     |
//! |----------------|----------|---------------------------------|
//! | `max`, `min`   | all      | n/a                             |
//! | `clamp`        | all      | n/a                             |
//! | `less_by`      | unsigned | `a - b` with `b > a`            |
//! | `div_round_up` | unsigned | `x + y - 1`                     |
//! | `align_up`     | unsigned | a wrapped sum (saturates to MAX)|
//!
//! Ties in `max`/`min` return the second argument.
//!
//! The per-type modules shadow the primitive names inside this module, so
//! primitives are spelled `::core::primitive::*` here.

use crate::contracts;

/// Bytes needed to print an integer of `bytes` width in decimal, including a
/// `+`/`-` sign, excluding any terminator.
pub const fn decimal_max(bytes: ::core::primitive::usize) -> ::core::primitive::usize {
    1 + match bytes {
        1 => 3,
        2 => 5,
        3 | 4 => 10,
        5..=8 => 20,
        9..=16 => 39,
        _ => panic!("decimal_max: integers wider than 128 bits are not supported"),
    }
}

/// Overflow-safe arithmetic for generic unsigned code.
///
/// Each method is the `const fn` of the same name in the type's module.
pub trait SafeArith: Copy + Ord {
    const DECIMAL_MAX: ::core::primitive::usize;

    /// Larger of `self` and `other`; `other` on a tie.
    fn safe_max(self, other: Self) -> Self;

    /// Smaller of `self` and `other`; `other` on a tie.
    fn safe_min(self, other: Self) -> Self;

    /// `self` bounded to `[lo, hi]`. `lo <= hi` is the caller's job.
    fn safe_clamp(self, lo: Self, hi: Self) -> Self;

    /// `self - other`, or zero if `other` is larger.
    fn less_by(self, other: Self) -> Self;

    /// `ceil(self / divisor)` without forming `self + divisor - 1`.
    fn div_round_up(self, divisor: Self) -> Self;

    /// Round up to a multiple of the power of two `to`, saturating to MAX.
    fn align_up(self, to: Self) -> Self;

    /// Round up to a multiple of the power of two `to`, `None` if no such
    /// multiple is representable.
    fn checked_align_up(self, to: Self) -> Option<Self>;
}

macro_rules! ordered_ops {
    ($t:ident) => {
        /// Larger value; ties return `b`.
        #[inline]
        pub const fn max(a: $t, b: $t) -> $t {
            if a > b {
                a
            } else {
                b
            }
        }

        /// Smaller value; ties return `b`.
        #[inline]
        pub const fn min(a: $t, b: $t) -> $t {
            if a < b {
                a
            } else {
                b
            }
        }

        /// `v` bounded to `[lo, hi]`. The upper bound is tested first, and
        /// `lo <= hi` is not re-validated.
        #[inline]
        pub const fn clamp(v: $t, lo: $t, hi: $t) -> $t {
            if v > hi {
                hi
            } else if v < lo {
                lo
            } else {
                v
            }
        }

        /// See [`decimal_max`](super::decimal_max).
        pub const DECIMAL_MAX: usize = super::decimal_max(::core::mem::size_of::<$t>());
    };
}

macro_rules! unsigned_modules {
    ($($t:ident),* $(,)?) => {$(
        #[doc = concat!("Overflow-safe `const fn`s over `", stringify!($t), "`.")]
        pub mod $t {
            ordered_ops!($t);

            /// `a - b` clamped at zero.
            #[inline]
            pub const fn less_by(a: $t, b: $t) -> $t {
                if a > b {
                    a - b
                } else {
                    0
                }
            }

            /// `ceil(x / y)` for `y > 0`.
            ///
            /// Quotient and remainder are taken separately; `x + y - 1`
            /// overflows for `x` close to MAX even when the result fits.
            #[inline]
            pub const fn div_round_up(x: $t, y: $t) -> $t {
                x / y + (x % y != 0) as $t
            }

            /// Smallest multiple of `to` that is `>= x`, or `None` when that
            /// multiple would exceed MAX. `to` must be a power of two.
            #[inline]
            pub const fn checked_align_up(x: $t, to: $t) -> Option<$t> {
                let mask = to - 1;
                match x.checked_add(mask) {
                    Some(bumped) => Some(bumped & !mask),
                    None => None,
                }
            }

            /// Smallest multiple of `to` that is `>= x`, saturating to
            /// `MAX` when no such multiple is representable. `to` must be a
            /// power of two.
            ///
            /// The saturated value is not itself a multiple of `to`, but it
            /// can never be mistaken for a small valid size.
            #[inline]
            pub const fn align_up(x: $t, to: $t) -> $t {
                match checked_align_up(x, to) {
                    Some(aligned) => aligned,
                    None => $t::MAX,
                }
            }

            impl super::SafeArith for $t {
                const DECIMAL_MAX: usize = DECIMAL_MAX;

                #[inline]
                fn safe_max(self, other: Self) -> Self {
                    max(self, other)
                }

                #[inline]
                fn safe_min(self, other: Self) -> Self {
                    min(self, other)
                }

                #[inline]
                fn safe_clamp(self, lo: Self, hi: Self) -> Self {
                    super::contracts::check_clamp_bounds(lo, hi);
                    clamp(self, lo, hi)
                }

                #[inline]
                fn less_by(self, other: Self) -> Self {
                    less_by(self, other)
                }

                #[inline]
                fn div_round_up(self, divisor: Self) -> Self {
                    let quotient = div_round_up(self, divisor);
                    super::contracts::check_div_round_up(self as u128, divisor as u128, quotient as u128);
                    quotient
                }

                #[inline]
                fn align_up(self, to: Self) -> Self {
                    super::contracts::check_power_of_two(to as u128);
                    align_up(self, to)
                }

                #[inline]
                fn checked_align_up(self, to: Self) -> Option<Self> {
                    super::contracts::check_power_of_two(to as u128);
                    checked_align_up(self, to)
                }
            }
        }
    )*};
}

macro_rules! signed_modules {
    ($($t:ident),* $(,)?) => {$(
        #[doc = concat!("Overflow-safe `const fn`s over `", stringify!($t), "`.")]
        pub mod $t {
            ordered_ops!($t);
        }
    )*};
}

unsigned_modules!(u8, u16, u32, u64, u128, usize);
signed_modules!(i8, i16, i32, i64, i128, isize);
