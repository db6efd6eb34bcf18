use cycle_clock::{Clock, Timespec};

/// The timestamp sources a benchmark session reads.
///
/// [`Clock`] is the real implementation. Other implementations exist to drive a
/// [`Session`][crate::Session] with predetermined readings.
#[cfg_attr(test, mockall::automock)]
pub trait Timer {
    /// Reads the cycle counter of the executing core.
    fn cycles(&self) -> u64;

    /// Reads the monotonic wall clock.
    fn monotonic(&self) -> Timespec;
}

impl Timer for Clock {
    #[cfg_attr(test, mutants::skip)] // Pass-through, tested in `cycle_clock`.
    #[inline(always)]
    fn cycles(&self) -> u64 {
        Self::cycles(self)
    }

    #[cfg_attr(test, mutants::skip)] // Pass-through, tested in `cycle_clock`.
    #[inline]
    fn monotonic(&self) -> Timespec {
        Self::monotonic(self)
    }
}
