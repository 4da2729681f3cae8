// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Assertion level and severity tiers.
//!
//! The level is decided once per compiled unit by `build.rs` and folded into
//! [`ASSERT_LEVEL`]. Nothing mutates it at runtime, so a check whose tier is
//! above the level is a constant-false branch and costs nothing.
//!
//! | Level | Baseline (`check!`) | Tier N (`check_on!`) | Condition text in binary |
//! |-------|---------------------|----------------------|--------------------------|
//! | 0     | off                 | off                  | no                       |
//! | 1     | on                  | off                  | no                       |
//! | N ≥ 2 | on                  | on if N ≥ tier       | yes                      |

use std::fmt;
use std::str::FromStr;

/// Assertion level of this compiled unit.
///
/// Resolved by the build script from the `ndebug` feature, `STDAUX_NDEBUG`
/// and `STDAUX_MORE_ASSERTS`.
pub const ASSERT_LEVEL: AssertLevel = AssertLevel::parse_const(env!("STDAUX_ASSERT_LEVEL"));

/// How paranoid the checks of a compiled unit are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssertLevel(u8);

impl AssertLevel {
    /// Every runtime check disabled.
    pub const OFF: Self = Self(0);
    /// Default: baseline checks only, diagnostics stripped.
    pub const BASELINE: Self = Self(1);
    /// Lowest level that keeps condition text and routine names.
    pub const VERBOSE: Self = Self(2);

    pub const fn new(level: u8) -> Self {
        Self(level)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Whether checks of `tier` run at this level.
    #[inline(always)]
    pub const fn enables(self, tier: Tier) -> bool {
        self.0 != 0 && self.0 >= tier.0
    }

    /// Whether a failing check reports its condition text and routine name.
    #[inline(always)]
    pub const fn keeps_diagnostics(self) -> bool {
        self.0 >= Self::VERBOSE.0
    }

    /// Resolve the level from its two inputs.
    ///
    /// `ndebug` wins over everything; a missing `more_asserts` means baseline.
    pub fn resolve(ndebug: bool, more_asserts: Option<&str>) -> Result<Self, ConfigError> {
        if ndebug {
            return Ok(Self::OFF);
        }
        match more_asserts {
            Some(raw) => raw.parse(),
            None => Ok(Self::BASELINE),
        }
    }

    /// Parse a decimal level during constant evaluation.
    ///
    /// Only ever fed the value written by `build.rs`, so a malformed string
    /// fails the build instead of producing a level.
    const fn parse_const(raw: &str) -> Self {
        let bytes = raw.as_bytes();
        assert!(!bytes.is_empty(), "STDAUX_ASSERT_LEVEL is empty");

        let mut value: u16 = 0;
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            assert!(b.is_ascii_digit(), "STDAUX_ASSERT_LEVEL is not a decimal number");
            value = value * 10 + (b - b'0') as u16;
            assert!(value <= u8::MAX as u16, "STDAUX_ASSERT_LEVEL exceeds 255");
            i += 1;
        }
        Self(value as u8)
    }
}

impl Default for AssertLevel {
    fn default() -> Self {
        Self::BASELINE
    }
}

impl fmt::Display for AssertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AssertLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConfigError::InvalidLevel {
                raw: s.to_string(),
            });
        }
        trimmed
            .parse::<u8>()
            .map(Self)
            .map_err(|_| ConfigError::LevelOutOfRange {
                raw: s.to_string(),
            })
    }
}

/// Severity of a check. Ordered: baseline first, then optional tiers 2, 3, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tier(u8);

impl Tier {
    /// Always on unless assertions are disabled entirely.
    pub const BASELINE: Self = Self(1);

    /// Optional tier `n`, active only when the level is at least `n`.
    ///
    /// # Panics
    /// If `n < 2`; in a constant context this fails the build.
    pub const fn optional(n: u8) -> Self {
        assert!(n >= 2, "optional tiers start at 2");
        Self(n)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn is_baseline(self) -> bool {
        self.0 == Self::BASELINE.0
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_baseline() {
            write!(f, "baseline")
        } else {
            write!(f, "tier-{}", self.0)
        }
    }
}

/// Error type for level parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Not a non-negative decimal number.
    InvalidLevel { raw: String },
    /// A decimal number, but above 255.
    LevelOutOfRange { raw: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidLevel { raw } => {
                write!(f, "assertion level {:?} is not a non-negative number", raw)
            }
            ConfigError::LevelOutOfRange { raw } => {
                write!(f, "assertion level {:?} exceeds 255", raw)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
