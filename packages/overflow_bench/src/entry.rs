use std::io;

use fatal::{die_at, here, term_at};
use tracing::{Level, debug};

use crate::{BenchConfig, Session};

/// Runs a fixed-duration benchmark of `step` as the whole of a benchmark executable.
///
/// Installs stderr logging, pins the process to the processor it is executing on and then
/// samples `step` until the configured duration has elapsed, writing one sample per line to
/// stdout.
///
/// Any failure is fatal: a failed pin or a failed write to stdout terminates the process with a
/// diagnostic on stderr and a non-zero exit status.
///
/// ```no_run
/// use overflow_bench::{BenchConfig, main_fixed_duration, steps};
///
/// fn main() {
///     main_fixed_duration(BenchConfig::DEFAULT, steps::add_step);
/// }
/// ```
#[cfg_attr(coverage_nightly, coverage(off))] // Terminates or pins the test process.
#[cfg_attr(test, mutants::skip)] // Exercised by the benchmark executables.
pub fn main_fixed_duration(config: BenchConfig, step: impl FnMut()) {
    init_logging();
    pin_or_die();

    let mut session = Session::new(config);

    if let Err(e) = session.run_for_duration(step, &mut io::stdout().lock()) {
        die_at(here!(), "write to stdout", &e);
    }
}

/// Runs a fixed-iteration benchmark of `step` as the whole of a benchmark executable.
///
/// Like [`main_fixed_duration()`] but runs the configured number of iterations, yielding the
/// processor between them, and writes a single total to stdout.
#[cfg_attr(coverage_nightly, coverage(off))] // Terminates or pins the test process.
#[cfg_attr(test, mutants::skip)] // Exercised by the benchmark executables.
pub fn main_fixed_iterations(config: BenchConfig, step: impl FnMut()) {
    init_logging();
    pin_or_die();

    let mut session = Session::new(config);

    if let Err(e) = session.run_iterations(step, &mut io::stdout().lock()) {
        die_at(here!(), "write to stdout", &e);
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
fn init_logging() {
    // Samples own stdout, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .init();
}

#[cfg_attr(coverage_nightly, coverage(off))]
fn pin_or_die() {
    match core_pin::pin_to_current_cpu() {
        Ok(processor_id) => debug!(processor_id, "pinned to current processor"),
        Err(e) => {
            if let Some(system_error) = e.system_error() {
                die_at(here!(), e.failing_call(), system_error);
            }

            term_at(here!(), e);
        }
    }
}
