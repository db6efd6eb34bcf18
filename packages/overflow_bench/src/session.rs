use std::io::{self, Write};
use std::thread;

use cycle_clock::{Clock, Timespec};
use tracing::{debug, trace};

use crate::{BenchConfig, Sample, Timer};

/// The state of one benchmark run: the elapsed-cycle accumulator and the run deadline.
///
/// A session is owned by the single thread that executes the measured step. Each thread that
/// benchmarks needs its own session, as the accumulator and deadline must never be shared.
///
/// Two sampling modes are offered:
///
/// * [`run_for_duration()`][Self::run_for_duration] repeats reporting windows of
///   [`batch_size()`][BenchConfig::batch_size] steps until the configured duration has elapsed,
///   emitting one sample per window. Prefer this mode; it is robust to environment noise.
/// * [`run_iterations()`][Self::run_iterations] runs a fixed number of steps, yielding the
///   processor between them, and emits a single total.
///
/// ```
/// use overflow_bench::{BenchConfig, Session};
///
/// let config = BenchConfig::DEFAULT.with_duration_millis(10).with_batch_size(10);
/// let mut session = Session::new(config);
/// let mut output = Vec::new();
///
/// let windows = session
///     .run_for_duration(|| opaque_value::sink(opaque_value::launder(1_u32)), &mut output)
///     .unwrap();
///
/// assert!(windows >= 1);
/// assert_eq!(String::from_utf8(output).unwrap().lines().count() as u64, windows);
/// ```
#[derive(Debug)]
pub struct Session<T = Clock> {
    config: BenchConfig,
    timer: T,
    total: u64,
    deadline: Option<Timespec>,
}

impl Session {
    /// Creates a session that reads the real cycle counter and monotonic clock.
    ///
    /// The caller is responsible for pinning the thread before running the session, as cycle
    /// counter readings are only comparable on one core.
    #[must_use]
    pub const fn new(config: BenchConfig) -> Self {
        Self::with_timer(config, Clock::new())
    }
}

impl<T: Timer> Session<T> {
    /// Creates a session that reads the given timestamp sources.
    #[must_use]
    pub const fn with_timer(config: BenchConfig, timer: T) -> Self {
        Self {
            config,
            timer,
            total: 0,
            deadline: None,
        }
    }

    /// The configuration the session runs with.
    #[must_use]
    pub const fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Sets the accumulated cycle count to zero.
    pub fn reset(&mut self) {
        self.total = 0;
    }

    /// The cycles accumulated since the last [`reset()`][Self::reset].
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Executes `step` once between two cycle counter readings and adds the delta to the
    /// accumulated total.
    #[inline(always)]
    pub fn bracket(&mut self, step: &mut impl FnMut()) {
        let start = self.timer.cycles();
        step();
        let end = self.timer.cycles();

        self.total = self.total.wrapping_add(end.wrapping_sub(start));
    }

    /// Whether the run deadline has passed.
    ///
    /// The first call only computes the deadline as the current monotonic time plus the
    /// configured duration and returns `false`. Every later call compares the current monotonic
    /// time against that deadline.
    pub fn deadline_reached(&mut self) -> bool {
        let now = self.timer.monotonic();

        match self.deadline {
            Some(deadline) => now >= deadline,
            None => {
                let deadline = now.plus_millis(self.config.duration_millis());
                debug!(%deadline, "benchmark deadline established");

                self.deadline = Some(deadline);
                false
            }
        }
    }

    /// Runs one reporting window: resets the accumulator, brackets `batch_size` executions of
    /// `step` and returns the accumulated total.
    pub fn run_window(&mut self, step: &mut impl FnMut()) -> Sample {
        self.reset();

        for _ in 0..self.config.batch_size() {
            self.bracket(step);
        }

        Sample::new(self.total)
    }

    /// Runs reporting windows until the deadline passes, writing one sample per line to `out`.
    ///
    /// Each line is flushed as soon as its window completes, so samples appear in completion
    /// order with no buffering. Returns the number of windows run. At least one window always
    /// runs, because the first deadline check only establishes the deadline.
    ///
    /// # Errors
    ///
    /// Returns the error of a failed write or flush. The run stops at the first failure.
    pub fn run_for_duration(
        &mut self,
        mut step: impl FnMut(),
        out: &mut impl Write,
    ) -> io::Result<u64> {
        let mut windows: u64 = 0;

        while !self.deadline_reached() {
            let sample = self.run_window(&mut step);
            trace!(%sample, "window complete");

            writeln!(out, "{sample}")?;
            out.flush()?;

            windows = windows.wrapping_add(1);
        }

        debug!(windows, "fixed-duration run complete");

        Ok(windows)
    }

    /// Runs `iterations` executions of `step`, yielding the processor after each one, and writes
    /// the single accumulated total as one line to `out`.
    ///
    /// The yields happen outside the timing brackets, so they do not count towards the total.
    ///
    /// # Errors
    ///
    /// Returns the error of a failed write or flush.
    pub fn run_iterations(
        &mut self,
        mut step: impl FnMut(),
        out: &mut impl Write,
    ) -> io::Result<Sample> {
        self.reset();

        for _ in 0..self.config.iterations() {
            self.bracket(&mut step);
            thread::yield_now();
        }

        let sample = Sample::new(self.total);
        debug!(%sample, iterations = self.config.iterations(), "fixed-iteration run complete");

        writeln!(out, "{sample}")?;
        out.flush()?;

        Ok(sample)
    }
}
