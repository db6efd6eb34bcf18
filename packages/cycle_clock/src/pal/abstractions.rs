use std::fmt::Debug;

use crate::Timespec;

/// Bindings for reading hardware counters and operating system clocks.
///
/// All PAL reads must go through this trait, enabling them to be mocked.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Bindings: Debug + Send + Sync + 'static {
    fn read_cycle_counter(&self) -> u64;

    fn clock_gettime_monotonic(&self) -> Timespec;
}
