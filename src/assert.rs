// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tiered runtime assertions.
//!
//! Three entry points:
//!
//! - [`check!`](crate::check): baseline tier, on unless the level is 0
//! - [`check_on!`](crate::check_on): explicit [`Tier`](crate::config::Tier),
//!   on when the level reaches it
//! - [`check_unreachable!`](crate::check_unreachable): diverges at every level
//!
//! A disabled check is `if false { .. }` after constant folding: its condition
//! is type-checked but never evaluated. An enabled check evaluates the
//! condition exactly once.
//!
//! [`check_eval!`](crate::check_eval) is the baseline check for conditions
//! with side effects: it evaluates once at every level and only skips the
//! report when assertions are off. `check!(false)` never returns.
//!
//! # Failure path
//!
//! [`fail`] formats into a stack buffer, hands it to stderr with one
//! `write(2)` and calls `abort(3)`. No allocation, no locks, no unwinding, so
//! checks may sit inside signal handlers as long as their conditions can.
//!
//! Below [`AssertLevel::VERBOSE`] the condition text and routine name are
//! replaced with `<dropped>` and `<unknown-fcn>` before they reach the
//! binary: `file:line` is all a developer needs, and end users gain nothing
//! from the rest.
//!
//! ```ignore
//! use stdaux::{check, check_on, check_unreachable, config::Tier};
//!
//! check!(offset <= buf.len());
//! check_on!(Tier::optional(2), is_sorted(&table)); // expensive, level >= 2 only
//!
//! match state {
//!     State::Open => {}
//!     State::Closed => check_unreachable!(),
//! }
//! ```

use std::fmt::{self, Write as _};

use crate::config::{AssertLevel, ASSERT_LEVEL};

/// Placeholder for stripped condition text.
pub const DROPPED: &str = "<dropped>";
/// Placeholder for a stripped routine name.
pub const UNKNOWN_FCN: &str = "<unknown-fcn>";

const MESSAGE_CAPACITY: usize = 512;

/// Where a check lives and what it tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Site {
    pub file: &'static str,
    pub line: u32,
    pub function: &'static str,
    pub condition: &'static str,
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}: Assertion '{}' failed.",
            self.file, self.line, self.function, self.condition
        )
    }
}

/// Condition text as it should be embedded at `level`.
#[doc(hidden)]
#[inline(always)]
pub const fn condition_text(level: AssertLevel, text: &'static str) -> &'static str {
    if level.keeps_diagnostics() {
        text
    } else {
        DROPPED
    }
}

/// Strip the helper item the [`function_name!`](crate::function_name) macro
/// plants, plus closure frames, from a `type_name` path.
#[doc(hidden)]
pub fn trim_function_name(name: &'static str) -> &'static str {
    let mut name = name.strip_suffix("::__stdaux_here").unwrap_or(name);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}

/// Report a failed check and terminate the process.
#[cold]
#[inline(never)]
pub fn fail(site: &Site) -> ! {
    let mut message = StackMessage::new();
    // A truncated message is still worth printing.
    let _ = write!(message, "{}", site);
    message.end_line();
    message.emit();
    terminate()
}

/// Report that a path which must never execute did, then terminate.
///
/// At level 0 nothing is printed, but the call still diverges.
#[cold]
#[inline(never)]
pub fn fail_unreachable(site: &Site) -> ! {
    if ASSERT_LEVEL.get() > 0 {
        fail(&Site {
            condition: "unreachable",
            ..*site
        })
    }
    terminate()
}

/// Fixed-capacity message buffer so the failure path never allocates.
///
/// Text fills at most `MESSAGE_CAPACITY - 1` bytes; the last byte is kept
/// for the terminating newline.
struct StackMessage {
    buf: [u8; MESSAGE_CAPACITY],
    len: usize,
}

impl StackMessage {
    const fn new() -> Self {
        Self {
            buf: [0; MESSAGE_CAPACITY],
            len: 0,
        }
    }

    fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    fn end_line(&mut self) {
        self.buf[self.len] = b'\n';
        self.len += 1;
    }

    #[cfg(unix)]
    #[allow(unsafe_code)]
    fn emit(&self) {
        let bytes = self.as_bytes();
        // SAFETY: `bytes` is a live, initialized slice for the whole call.
        // write(2) is async-signal-safe; a short or failed write is ignored
        // because the process is about to abort anyway.
        unsafe {
            libc::write(
                libc::STDERR_FILENO,
                bytes.as_ptr().cast::<libc::c_void>(),
                bytes.len(),
            );
        }
    }

    #[cfg(not(unix))]
    fn emit(&self) {
        use std::io::Write;
        let _ = std::io::stderr().write_all(self.as_bytes());
    }
}

impl fmt::Write for StackMessage {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = (MESSAGE_CAPACITY - 1).saturating_sub(self.len);
        let take = s.len().min(room);
        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        if take < s.len() {
            Err(fmt::Error)
        } else {
            Ok(())
        }
    }
}

#[cfg(unix)]
#[allow(unsafe_code)]
fn terminate() -> ! {
    // SAFETY: abort(3) takes no arguments and never returns.
    unsafe { libc::abort() }
}

#[cfg(not(unix))]
fn terminate() -> ! {
    std::process::abort()
}

/// Name of the enclosing function, or [`UNKNOWN_FCN`] below the verbose level.
#[macro_export]
#[doc(hidden)]
macro_rules! function_name {
    () => {{
        if $crate::config::ASSERT_LEVEL.keeps_diagnostics() {
            fn __stdaux_here() {}
            fn type_name_of<T>(_: T) -> &'static str {
                ::core::any::type_name::<T>()
            }
            $crate::assert::trim_function_name(type_name_of(__stdaux_here))
        } else {
            $crate::assert::UNKNOWN_FCN
        }
    }};
}

/// Check `cond` at an explicit [`Tier`](crate::config::Tier).
///
/// `tier` must be a constant expression. When the build's assertion level is
/// below it, `cond` is not evaluated. Otherwise it is evaluated exactly once
/// and a `false` result terminates the process.
#[macro_export]
macro_rules! check_on {
    ($tier:expr, $cond:expr $(,)?) => {{
        const __STDAUX_ACTIVE: bool = $crate::config::ASSERT_LEVEL.enables($tier);
        if __STDAUX_ACTIVE && !($cond) {
            $crate::assert::fail(&$crate::assert::Site {
                file: ::core::file!(),
                line: ::core::line!(),
                function: $crate::function_name!(),
                condition: $crate::assert::condition_text(
                    $crate::config::ASSERT_LEVEL,
                    ::core::stringify!($cond),
                ),
            });
        }
    }};
}

/// Baseline check: on at every level except 0.
///
/// `check!(false)` is the exception: it diverges at every level, reporting
/// like any failed check when assertions are on and aborting silently when
/// they are off.
#[macro_export]
macro_rules! check {
    (false $(,)?) => {{
        $crate::check_on!($crate::config::Tier::BASELINE, false);
        $crate::check_unreachable!()
    }};
    ($cond:expr $(,)?) => {
        $crate::check_on!($crate::config::Tier::BASELINE, $cond)
    };
}

/// Baseline check whose condition runs at every level.
///
/// `cond` is evaluated exactly once even when assertions are off, so side
/// effects it carries are kept. Only the failure report depends on the
/// level: a `false` result terminates the process unless the level is 0.
#[macro_export]
macro_rules! check_eval {
    ($cond:expr $(,)?) => {{
        let __stdaux_ok: bool = $cond;
        const __STDAUX_ACTIVE: bool =
            $crate::config::ASSERT_LEVEL.enables($crate::config::Tier::BASELINE);
        if __STDAUX_ACTIVE && !__stdaux_ok {
            $crate::assert::fail(&$crate::assert::Site {
                file: ::core::file!(),
                line: ::core::line!(),
                function: $crate::function_name!(),
                condition: $crate::assert::condition_text(
                    $crate::config::ASSERT_LEVEL,
                    ::core::stringify!($cond),
                ),
            });
        }
    }};
}

/// Mark a path that must never execute.
///
/// Diverges at every assertion level, so code after it is dead to both the
/// optimizer and the type checker. Reports `unreachable` with the site unless
/// assertions are disabled.
#[macro_export]
macro_rules! check_unreachable {
    () => {
        $crate::assert::fail_unreachable(&$crate::assert::Site {
            file: ::core::file!(),
            line: ::core::line!(),
            function: $crate::function_name!(),
            condition: "unreachable",
        })
    };
}
