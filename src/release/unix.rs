// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Descriptor release and errno normalization.

use std::io;
use std::os::fd::{IntoRawFd, OwnedFd, RawFd};

use super::Release;

/// A raw file descriptor owned by whoever holds it; `-1` owns nothing.
///
/// Not `Clone`: two copies of one descriptor would both try to close it.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Fd(RawFd);

impl Fd {
    pub const INVALID: RawFd = -1;

    /// Take ownership of `fd`. Any negative value is treated as the sentinel.
    pub fn from_raw(fd: RawFd) -> Self {
        Self(fd)
    }

    pub fn raw(&self) -> RawFd {
        self.0
    }
}

impl From<OwnedFd> for Fd {
    fn from(fd: OwnedFd) -> Self {
        Self(fd.into_raw_fd())
    }
}

impl Release for Fd {
    #[inline]
    fn sentinel() -> Self {
        Self(Self::INVALID)
    }

    #[inline]
    fn is_sentinel(&self) -> bool {
        self.0 < 0
    }

    #[inline]
    fn release_owned(self) {
        close(self.0);
    }
}

/// Close `fd` unless it is negative. Always returns `-1`.
///
/// The descriptor is gone after `close(2)` returns, even on error, so a
/// failure is dropped, not retried. Safe to call from a signal handler, as
/// nothing here allocates or logs. Use [`close_checked`] to see the error.
pub fn close(fd: RawFd) -> RawFd {
    let _ = close_checked(fd);
    Fd::INVALID
}

/// Close `fd` unless it is negative, and report what `close(2)` said.
///
/// `EBADF` means the descriptor was already closed elsewhere: a double
/// release in the caller. The error carries only the raw OS code, so
/// building it does not allocate.
#[allow(unsafe_code)]
pub fn close_checked(fd: RawFd) -> io::Result<()> {
    if fd < 0 {
        return Ok(());
    }
    // SAFETY: close(2) on an integer has no memory-safety preconditions;
    // ownership of `fd` was passed in by the caller.
    if unsafe { libc::close(fd) } == 0 {
        Ok(())
    } else {
        Err(io::Error::from_raw_os_error(errno()))
    }
}

/// The last OS error code, guaranteed positive.
///
/// Falls back to `ENOTRECOVERABLE` when no error is recorded, so an error
/// path that returns `-errno()` can never return success by accident.
pub fn errno() -> i32 {
    match io::Error::last_os_error().raw_os_error() {
        Some(code) if code > 0 => code,
        _ => libc::ENOTRECOVERABLE,
    }
}
