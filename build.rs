//! Build script for the stdaux crate.
//!
//! Resolves the assertion level for this compiled unit and hands it to rustc
//! as `STDAUX_ASSERT_LEVEL`, which `config::ASSERT_LEVEL` folds into a
//! constant. Inputs:
//!
//! 1. `ndebug` feature or `STDAUX_NDEBUG` set to anything but `0`: level 0
//! 2. `STDAUX_MORE_ASSERTS=<n>`: level `n`
//! 3. Neither: level 1 (baseline)

use std::env;

const DEFAULT_LEVEL: u8 = 1;

fn main() {
    println!("cargo:rerun-if-env-changed=STDAUX_NDEBUG");
    println!("cargo:rerun-if-env-changed=STDAUX_MORE_ASSERTS");

    let ndebug = env::var("CARGO_FEATURE_NDEBUG").is_ok()
        || env::var("STDAUX_NDEBUG").is_ok_and(|v| v != "0");

    let level = if ndebug {
        0
    } else {
        match env::var("STDAUX_MORE_ASSERTS") {
            Ok(raw) => match raw.trim().parse::<u8>() {
                Ok(level) => level,
                Err(e) => panic!("STDAUX_MORE_ASSERTS={:?} is not a level in 0..=255: {}", raw, e),
            },
            Err(_) => DEFAULT_LEVEL,
        }
    };

    println!("cargo:rustc-env=STDAUX_ASSERT_LEVEL={level}");
}
