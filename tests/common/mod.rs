//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::env;
use std::process::{Command, Output};

// Re-export canonical test utilities from stdaux::testing
pub use stdaux::testing::{AlignedBuf, EvalCounter, Ledger, TrackedHandle};

// ============================================================================
// LOGGING
// ============================================================================

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ============================================================================
// CHILD PROCESSES
// ============================================================================

/// Set in a re-executed test binary to select the terminating half of a test.
pub const CHILD_ENV: &str = "STDAUX_TEST_CHILD";

/// Whether this process is a re-executed child.
pub fn in_child() -> bool {
    env::var_os(CHILD_ENV).is_some()
}

/// Re-run the current test binary with only `test_name` selected, in child
/// mode, and collect its exit status and output.
pub fn run_child(test_name: &str) -> Output {
    let exe = env::current_exe().expect("current test binary path");
    Command::new(exe)
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
        .expect("failed to spawn child test process")
}

/// Child stderr as text.
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Whether the child was killed by `SIGABRT`.
#[cfg(unix)]
pub fn aborted(output: &Output) -> bool {
    use std::os::unix::process::ExitStatusExt;
    output.status.signal() == Some(libc::SIGABRT)
}

#[cfg(not(unix))]
pub fn aborted(output: &Output) -> bool {
    !output.status.success()
}
