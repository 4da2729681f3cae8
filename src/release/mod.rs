// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scope-bound resource release.
//!
//! A handle type with a "not owned" sentinel implements [`Release`]. Then:
//!
//! - [`release`] performs the release and hands back the sentinel, so the
//!   holder can be overwritten in one statement: `fd = release(fd);`
//! - [`ScopeGuard`] owns a handle slot and releases whatever the slot holds
//!   when the scope ends, on every exit path.
//!
//! Releasing the sentinel is a no-op, which makes "release early, then let
//! the scope end" safe by construction.
//!
//! ```ignore
//! use stdaux::release::{ScopeGuard, Fd};
//!
//! fn read_header(path: &CStr) -> Option<u32> {
//!     let mut fd = ScopeGuard::new(open_raw(path)?);
//!     let header = read_u32(&fd)?;     // early return: fd closed
//!     fd.release_now();                // explicit: fd closed, slot = -1
//!     Some(header)                     // scope exit: nothing left to close
//! }
//! ```

mod guard;
#[cfg(unix)]
mod unix;

pub use guard::{defer, Deferred, ScopeGuard};
#[cfg(unix)]
pub use unix::{close, close_checked, errno, Fd};

use std::fs::ReadDir;
use std::io::Write;

/// A resource handle with a sentinel meaning "owns nothing".
pub trait Release: Sized {
    /// The "owns nothing" value.
    fn sentinel() -> Self;

    fn is_sentinel(&self) -> bool;

    /// Give the resource back. Only called on non-sentinel values.
    fn release_owned(self);
}

/// Release `handle` unless it is the sentinel, and return the sentinel.
#[inline]
pub fn release<T: Release>(handle: T) -> T {
    if !handle.is_sentinel() {
        handle.release_owned();
    }
    T::sentinel()
}

/// `None` is the sentinel; dropping the value is the release.
///
/// Covers heap allocations (`Option<Box<T>>`), streams (`Option<File>`) and
/// directory handles (`Option<ReadDir>`).
impl<T> Release for Option<T> {
    #[inline]
    fn sentinel() -> Self {
        None
    }

    #[inline]
    fn is_sentinel(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn release_owned(self) {
        drop(self);
    }
}

/// Free a heap allocation. Always returns `None`.
#[inline]
pub fn free<T: ?Sized>(allocation: Option<Box<T>>) -> Option<Box<T>> {
    release(allocation)
}

/// Flush and close a stream. Always returns `None`.
///
/// A failed flush is logged and otherwise ignored; the stream is closed
/// either way.
pub fn fclose<W: Write>(stream: Option<W>) -> Option<W> {
    if let Some(mut stream) = stream {
        if let Err(e) = stream.flush() {
            log::warn!("flush before close failed: {}", e);
        }
    }
    None
}

/// Close a directory handle. Always returns `None`.
#[inline]
pub fn closedir(dir: Option<ReadDir>) -> Option<ReadDir> {
    release(dir)
}
