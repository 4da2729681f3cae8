// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Low-level building blocks for systems code: tiered assertions, scope-bound
//! resource release, overflow-safe size arithmetic and endian-explicit memory
//! access.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐
//! │  build.rs   │────▶│  config.rs   │  ASSERT_LEVEL, Tier
//! │ (env vars,  │     │ (const level)│
//! │  features)  │     └──────┬───────┘
//! └─────────────┘            │
//!                            ▼
//!                     ┌──────────────┐     ┌──────────────┐
//!                     │  assert.rs   │────▶│ contracts.rs │  tier-2 checks
//!                     │ (check! ...) │     └──────┬───────┘
//!                     └──────────────┘            │
//!                ┌────────────────────────────────┼──────────────┐
//!                ▼                                ▼              ▼
//!         ┌─────────────┐                  ┌────────────┐  ┌────────────┐
//!         │  arith.rs   │                  │ memory.rs  │  │ release/   │
//!         │ (const fns) │                  │(load/store)│  │(ScopeGuard)│
//!         └─────────────┘                  └────────────┘  └────────────┘
//! ```
//!
//! # Modules
//!
//! | Module      | Provides                                            |
//! |-------------|-----------------------------------------------------|
//! | `config`    | Build-time assertion level, severity tiers          |
//! | `assert`    | `check!`, `check_on!`, `check_eval!`, `check_unreachable!` |
//! | `contracts` | Precondition/postcondition checks at tier 2         |
//! | `arith`     | `max`, `min`, `clamp`, `less_by`, `div_round_up`, `align_up` |
//! | `memory`    | `load`/`store` of u8..u64, both byte orders, both access strategies |
//! | `release`   | `Release`, `release`, `ScopeGuard`, `defer`, `close`, `close_checked` |
//!
//! # Usage
//!
//! ```
//! use stdaux::{arith, check, memory};
//!
//! const BLOCKS: u32 = arith::u32::div_round_up(4097, 4096);
//! check!(BLOCKS == 2);
//!
//! let header = [0xca, 0xfe, 0xba, 0xbe];
//! assert_eq!(memory::load_u32_be_unaligned(&header, 0), 0xcafe_babe);
//! ```

pub mod arith;
pub mod assert;
pub mod config;
pub mod contracts;
pub mod memory;
pub mod release;
pub mod testing;

pub use arith::SafeArith;
pub use config::{AssertLevel, ConfigError, Tier, ASSERT_LEVEL};
pub use memory::{load, store, Access, Endian, Word};
pub use release::{defer, release, Deferred, Release, ScopeGuard};
#[cfg(unix)]
pub use release::{close, close_checked, errno, Fd};
