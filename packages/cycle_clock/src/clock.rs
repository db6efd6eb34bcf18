use crate::Timespec;
use crate::pal::{Bindings, BindingsFacade, BuildTargetBindings};

/// Reads the cycle counter of the executing core.
///
/// The read is bracketed by compiler fences so it is not reordered with the code being measured.
/// Subtract two readings with [`u64::wrapping_sub()`] to obtain elapsed cycles; counter
/// wraparound is not otherwise handled.
#[inline(always)]
#[must_use]
pub fn now() -> u64 {
    BuildTargetBindings.read_cycle_counter()
}

/// Reads the monotonic wall clock.
#[must_use]
pub fn monotonic_now() -> Timespec {
    BuildTargetBindings.clock_gettime_monotonic()
}

/// A timestamp source that provides both cycle counter and monotonic clock readings.
///
/// Reading through a `Clock` costs the same as calling [`now()`] and [`monotonic_now()`]
/// directly; the type exists so measurement code can own its timestamp source as state.
#[derive(Clone, Debug)]
pub struct Clock {
    bindings: BindingsFacade,
}

impl Clock {
    /// Creates a clock that reads the real hardware counter and operating system clock.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bindings: BindingsFacade::target(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_bindings(bindings: BindingsFacade) -> Self {
        Self { bindings }
    }

    /// Reads the cycle counter of the executing core.
    #[inline(always)]
    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.bindings.read_cycle_counter()
    }

    /// Returns the cycles elapsed since an earlier [`cycles()`][Self::cycles] reading.
    #[inline(always)]
    #[must_use]
    pub fn cycles_since(&self, start: u64) -> u64 {
        self.cycles().wrapping_sub(start)
    }

    /// Reads the monotonic wall clock.
    #[must_use]
    pub fn monotonic(&self) -> Timespec {
        self.bindings.clock_gettime_monotonic()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
