#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))] // This is all test code, no need to test it.

//! Private helpers for testing the overflow harness packages.

use std::process::{Command, Output};
use std::sync::mpsc;
use std::time::Duration;
use std::{env, thread};

/// Environment variable that marks a test process as an isolated child started by
/// [`run_isolated()`].
pub const ISOLATED_CHILD_ENV: &str = "OVERFLOW_HARNESS_ISOLATED_CHILD";

/// Runs a test with a timeout to prevent infinite hangs.
///
/// This function wraps a test closure with a timeout mechanism. If the test
/// takes longer than the timeout to complete, the test fails instead of
/// hanging the build.
///
/// When the `MUTATION_TESTING` environment variable is set to "1", the watchdog
/// is disabled and the test function is executed directly. This allows mutation
/// testing to properly detect hanging mutations.
///
/// # Panics
///
/// Panics if the test exceeds the timeout (when not in mutation testing mode).
///
/// # Example
///
/// ```rust
/// use testing::with_watchdog;
///
/// with_watchdog(|| {
///     // Your test code here
///     assert_eq!(2 + 2, 4);
/// });
/// ```
pub fn with_watchdog<F, R>(test_fn: F) -> R
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    if env::var("MUTATION_TESTING").as_deref() == Ok("1") {
        return test_fn();
    }

    let (tx, rx) = mpsc::channel();

    let test_handle = thread::spawn(move || {
        let result = test_fn();
        // If this fails, the receiver has timed out.
        drop(tx.send(result));
    });

    match rx.recv_timeout(Duration::from_secs(10)) {
        Ok(result) => {
            test_handle.join().expect("Test thread should not panic");
            result
        }
        Err(mpsc::RecvTimeoutError::Timeout) => {
            panic!("Test exceeded 10-second timeout");
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => match test_handle.join() {
            Ok(()) => panic!("Test thread disconnected unexpectedly"),
            Err(e) => std::panic::resume_unwind(e),
        },
    }
}

/// Whether the current process is an isolated child started by [`run_isolated()`].
///
/// A test that needs to observe process termination checks this first: in the child it performs
/// the terminating action, in the parent it calls [`run_isolated()`] and inspects the outcome.
#[must_use]
pub fn is_isolated_child() -> bool {
    env::var(ISOLATED_CHILD_ENV).as_deref() == Ok("1")
}

/// Runs exactly one test of the current test binary in a separate process and returns its
/// captured output, including the exit status.
///
/// `test_path` is the path of the test function within the test binary, e.g. `tests::my_test`
/// for a unit test or `my_test` for a top-level integration test function.
///
/// # Panics
///
/// Panics if the current test binary cannot be located or started.
#[must_use]
pub fn run_isolated(test_path: &str) -> Output {
    let current_exe = env::current_exe().expect("test binary must have a known location");

    Command::new(current_exe)
        .args([test_path, "--exact", "--nocapture", "--test-threads=1"])
        .env(ISOLATED_CHILD_ENV, "1")
        .output()
        .expect("test binary must be able to start a copy of itself")
}

/// Returns the captured stderr of a process as text, for diagnostics assertions.
#[must_use]
pub fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
