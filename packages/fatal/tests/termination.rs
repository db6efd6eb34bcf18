//! The reporters terminate the process, so each scenario runs in an isolated child process and
//! the parent inspects the exit status and the diagnostic written to stderr.

use std::io;

use fatal::{EXIT_FAILURE, die_at, here, term_at};
use testing::{is_isolated_child, run_isolated, stderr_text};

#[test]
#[cfg_attr(miri, ignore)] // Miri cannot start child processes.
fn term_at_reports_location_and_message() {
    if is_isolated_child() {
        term_at(here!(), "250 + 10 should not overflow");
    }

    let output = run_isolated("term_at_reports_location_and_message");
    let stderr = stderr_text(&output);

    assert_eq!(output.status.code(), Some(EXIT_FAILURE));
    assert!(
        stderr.contains(
            "tests/termination.rs:13:term_at_reports_location_and_message(): error: 250 + 10 should not overflow\n"
        ),
        "unexpected diagnostic: {stderr}"
    );
}

#[test]
#[cfg_attr(miri, ignore)] // Miri cannot start child processes.
fn die_at_appends_system_error() {
    if is_isolated_child() {
        let error = io::Error::new(io::ErrorKind::PermissionDenied, "Operation not permitted");
        die_at(here!(), "sched_setaffinity", &error);
    }

    let output = run_isolated("die_at_appends_system_error");
    let stderr = stderr_text(&output);

    assert_eq!(output.status.code(), Some(EXIT_FAILURE));
    assert!(
        stderr.contains(
            "die_at_appends_system_error(): error: sched_setaffinity: Operation not permitted\n"
        ),
        "unexpected diagnostic: {stderr}"
    );
}

#[test]
#[cfg(target_os = "linux")]
#[cfg_attr(miri, ignore)] // Miri cannot start child processes.
fn die_at_reports_os_error_like_strerror() {
    const EPERM: i32 = 1;

    if is_isolated_child() {
        die_at(
            here!(),
            "sched_setaffinity",
            &io::Error::from_raw_os_error(EPERM),
        );
    }

    let output = run_isolated("die_at_reports_os_error_like_strerror");
    let stderr = stderr_text(&output);

    assert_eq!(output.status.code(), Some(EXIT_FAILURE));
    assert!(
        stderr.contains(
            "die_at_reports_os_error_like_strerror(): error: sched_setaffinity: Operation not permitted\n"
        ),
        "unexpected diagnostic: {stderr}"
    );
    assert!(!stderr.contains("os error"), "unexpected diagnostic: {stderr}");
}
