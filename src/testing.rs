// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::cell::{Cell, RefCell};

use crate::release::Release;

/// Counts how many times an argument expression was evaluated.
#[derive(Debug, Default)]
pub struct EvalCounter {
    hits: Cell<usize>,
}

impl EvalCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one evaluation and pass `value` through.
    pub fn counted<T>(&self, value: T) -> T {
        self.hits.set(self.hits.get() + 1);
        value
    }

    /// Record one evaluation of a condition.
    pub fn hit(&self, value: bool) -> bool {
        self.counted(value)
    }

    pub fn count(&self) -> usize {
        self.hits.get()
    }
}

thread_local! {
    static RELEASED: RefCell<Vec<i32>> = const { RefCell::new(Vec::new()) };
}

/// Per-thread record of [`TrackedHandle`] releases, in release order.
#[derive(Debug)]
pub struct Ledger {
    _private: (),
}

impl Ledger {
    /// Start recording from an empty ledger on this thread.
    pub fn start() -> Self {
        RELEASED.with(|r| r.borrow_mut().clear());
        Self { _private: () }
    }

    /// Ids released since [`Ledger::start`].
    pub fn released(&self) -> Vec<i32> {
        RELEASED.with(|r| r.borrow().clone())
    }
}

/// A fake resource whose release is recorded in the thread's [`Ledger`].
///
/// `-1` is the sentinel. Releasing the same id twice shows up as a duplicate
/// entry.
#[derive(Debug, PartialEq, Eq)]
pub struct TrackedHandle(i32);

impl TrackedHandle {
    pub fn acquire(id: i32) -> Self {
        assert!(id >= 0, "negative ids are reserved for the sentinel");
        Self(id)
    }
}

impl Release for TrackedHandle {
    fn sentinel() -> Self {
        Self(-1)
    }

    fn is_sentinel(&self) -> bool {
        self.0 < 0
    }

    fn release_owned(self) {
        RELEASED.with(|r| r.borrow_mut().push(self.0));
    }
}

/// A 16-byte buffer aligned for any word up to `u64`.
#[derive(Debug, Clone, Copy, Default)]
#[repr(C, align(8))]
pub struct AlignedBuf([u8; 16]);

impl AlignedBuf {
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Copy `bytes` to the start of an aligned buffer.
    pub fn from_slice(bytes: &[u8]) -> Self {
        let mut buf = Self::zeroed();
        buf.0[..bytes.len()].copy_from_slice(bytes);
        buf
    }

    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}
