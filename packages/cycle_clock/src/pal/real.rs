#[cfg(not(unix))]
use std::sync::OnceLock;
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
use std::sync::atomic::{Ordering, compiler_fence};
#[cfg(not(unix))]
use std::time::Instant;
#[cfg(unix)]
use std::{io, mem};

use crate::Timespec;
use crate::pal::Bindings;

/// Bindings that target the real hardware and operating system that the build is targeting.
///
/// You would only use different bindings in PAL unit tests that need to use mock bindings.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetBindings;

// Real bindings are excluded from coverage measurement because the failure paths require
// OS-level failures that are impractical to trigger in tests.
#[cfg_attr(coverage_nightly, coverage(off))]
impl Bindings for BuildTargetBindings {
    #[inline(always)]
    fn read_cycle_counter(&self) -> u64 {
        read_cycle_counter()
    }

    #[cfg(unix)]
    fn clock_gettime_monotonic(&self) -> Timespec {
        // SAFETY: All-zero is a valid initial value for this type.
        let mut ts: libc::timespec = unsafe { mem::zeroed() };

        // SAFETY: We are passing valid arguments, no other safety requirements.
        let result = unsafe { libc::clock_gettime(libc::CLOCK_MONOTONIC, &raw mut ts) };

        assert!(result == 0, "{}", io::Error::last_os_error());

        Timespec::new(
            u64::try_from(ts.tv_sec).expect("monotonic clock never reports negative seconds"),
            u32::try_from(ts.tv_nsec).expect("monotonic clock reports nanoseconds below one second"),
        )
    }

    #[cfg(not(unix))]
    fn clock_gettime_monotonic(&self) -> Timespec {
        Timespec::from(process_epoch().elapsed())
    }
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn read_cycle_counter() -> u64 {
    compiler_fence(Ordering::SeqCst);

    // SAFETY: RDTSC has no preconditions, it only reads the time-stamp counter.
    let cycles = unsafe { std::arch::x86_64::_rdtsc() };

    compiler_fence(Ordering::SeqCst);

    cycles
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn read_cycle_counter() -> u64 {
    let cycles: u64;

    compiler_fence(Ordering::SeqCst);

    // SAFETY: CNTVCT_EL0 is readable from user mode on every operating system we target and
    // reading it has no side effects. The asm block is volatile, so it is never elided.
    unsafe {
        std::arch::asm!("mrs {}, cntvct_el0", out(reg) cycles, options(nostack));
    }

    compiler_fence(Ordering::SeqCst);

    cycles
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
fn read_cycle_counter() -> u64 {
    // No user-mode cycle counter we can rely on; nanoseconds are the next best unit.
    BuildTargetBindings.clock_gettime_monotonic().as_nanos()
}

#[cfg(not(unix))]
fn process_epoch() -> Instant {
    static EPOCH: OnceLock<Instant> = OnceLock::new();

    *EPOCH.get_or_init(Instant::now)
}
