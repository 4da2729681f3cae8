// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scope-exit adapters.

use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut};

use super::{release, Release};

/// Owns a handle slot and releases its current contents at scope exit.
///
/// The guard reads the slot when it drops, not when it was built: assigning
/// through `*guard = new` hands release responsibility to the new handle.
/// The old one must already be released (or be a type whose own `Drop`
/// releases it).
pub struct ScopeGuard<T: Release> {
    slot: T,
}

impl<T: Release> ScopeGuard<T> {
    /// Guard `handle`.
    #[inline]
    pub fn new(handle: T) -> Self {
        Self { slot: handle }
    }

    /// Guard an empty slot, to be filled later.
    #[inline]
    pub fn empty() -> Self {
        Self::new(T::sentinel())
    }

    /// Whether the slot holds something that will be released.
    #[inline]
    pub fn is_armed(&self) -> bool {
        !self.slot.is_sentinel()
    }

    /// Release the slot's contents now and leave the sentinel behind.
    #[inline]
    pub fn release_now(&mut self) {
        let handle = mem::replace(&mut self.slot, T::sentinel());
        self.slot = release(handle);
    }

    /// Put `handle` in the slot and return the previous, unreleased value.
    #[inline]
    pub fn replace(&mut self, handle: T) -> T {
        mem::replace(&mut self.slot, handle)
    }

    /// Disarm the guard and hand the handle back to the caller.
    #[inline]
    pub fn into_inner(mut self) -> T {
        mem::replace(&mut self.slot, T::sentinel())
    }
}

impl<T: Release> Default for ScopeGuard<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Release> Deref for ScopeGuard<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.slot
    }
}

impl<T: Release> DerefMut for ScopeGuard<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.slot
    }
}

impl<T: Release> Drop for ScopeGuard<T> {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl<T: Release + fmt::Debug> fmt::Debug for ScopeGuard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeGuard").field("slot", &self.slot).finish()
    }
}

/// Runs a closure when dropped, unless cancelled.
#[must_use = "a Deferred runs its closure immediately if not bound to a variable"]
pub struct Deferred<F: FnOnce()> {
    action: Option<F>,
}

impl<F: FnOnce()> Deferred<F> {
    /// Drop without running the closure.
    pub fn cancel(mut self) {
        self.action = None;
    }
}

impl<F: FnOnce()> Drop for Deferred<F> {
    fn drop(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

/// Run `action` when the returned value goes out of scope.
#[inline]
pub fn defer<F: FnOnce()>(action: F) -> Deferred<F> {
    Deferred {
        action: Some(action),
    }
}
