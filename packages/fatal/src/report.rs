use std::fmt::Display;
use std::io::{self, Write};
use std::process;

use crate::Location;

/// The exit status of a process terminated by [`die_at()`] or [`term_at()`].
pub const EXIT_FAILURE: i32 = 1;

/// Formats a diagnostic line (without the trailing newline).
///
/// The system error text is appended after the message when present.
///
/// # Examples
///
/// ```
/// use fatal::{Location, format_diagnostic};
///
/// let location = Location::new("src/pin.rs", 12, "pin");
///
/// assert_eq!(
///     format_diagnostic(location, "sched_getcpu", None),
///     "src/pin.rs:12:pin(): error: sched_getcpu"
/// );
/// ```
#[must_use]
pub fn format_diagnostic(
    location: Location,
    message: impl Display,
    system_error: Option<&dyn Display>,
) -> String {
    system_error.map_or_else(
        || format!("{location}: error: {message}"),
        |system_error| format!("{location}: error: {message}: {system_error}"),
    )
}

/// Returns the operating system's description of an I/O error.
///
/// For errors that carry an OS error code this is the `strerror()` text, without the
/// ` (os error N)` suffix that the [`Display`] implementation of [`io::Error`] adds. Other errors
/// are returned as displayed.
///
/// # Examples
///
/// ```
/// use std::io;
///
/// let error = io::Error::from_raw_os_error(2);
/// let text = fatal::system_error_text(&error);
///
/// assert!(error.to_string().starts_with(&text));
/// assert!(!text.contains("os error"));
/// ```
#[must_use]
pub fn system_error_text(error: &io::Error) -> String {
    let text = error.to_string();

    let Some(code) = error.raw_os_error() else {
        return text;
    };

    text.strip_suffix(&format!(" (os error {code})"))
        .map_or_else(|| text.clone(), ToOwned::to_owned)
}

/// Reports an environment failure and terminates the process.
///
/// The diagnostic names the failing operation in `message` and ends with the
/// [system error text][system_error_text] of the error that caused the failure.
#[cfg_attr(coverage_nightly, coverage(off))] // Terminates the process; covered by child-process tests.
pub fn die_at(location: Location, message: impl Display, system_error: &io::Error) -> ! {
    let system_error = system_error_text(system_error);

    terminate(&format_diagnostic(location, message, Some(&system_error)))
}

/// Reports an assertion failure and terminates the process.
#[cfg_attr(coverage_nightly, coverage(off))] // Terminates the process; covered by child-process tests.
pub fn term_at(location: Location, message: impl Display) -> ! {
    terminate(&format_diagnostic(location, message, None))
}

#[cfg_attr(test, mutants::skip)] // Only observable from a child process, see tests/termination.rs.
#[expect(
    clippy::exit,
    reason = "terminating the process is the contract of this package"
)]
fn terminate(diagnostic: &str) -> ! {
    // Nothing useful can be done if stderr is gone; the exit status still signals failure.
    drop(writeln!(io::stderr().lock(), "{diagnostic}"));

    process::exit(EXIT_FAILURE)
}
