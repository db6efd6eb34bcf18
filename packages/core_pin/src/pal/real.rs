use std::io;

use libc::cpu_set_t;

use crate::pal::Bindings;

/// FFI bindings that target the real operating system that the build is targeting.
///
/// You would only use different bindings in PAL unit tests that need to use mock bindings.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetBindings;

// Real OS bindings are excluded from coverage measurement because error paths require
// OS-level failures that are impractical to trigger in tests.
#[cfg_attr(coverage_nightly, coverage(off))]
impl Bindings for BuildTargetBindings {
    fn sched_getcpu(&self) -> Result<u32, io::Error> {
        // SAFETY: No safety requirements.
        let result = unsafe { libc::sched_getcpu() };

        // Negative means failure, with the reason in errno.
        u32::try_from(result).map_err(|_| io::Error::last_os_error())
    }

    fn processor_count_configured(&self) -> Result<usize, io::Error> {
        // SAFETY: No safety requirements.
        let result = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_CONF) };

        usize::try_from(result).map_err(|_| io::Error::last_os_error())
    }

    fn sched_setaffinity_current(&self, cpuset: &cpu_set_t) -> Result<(), io::Error> {
        // 0 means current thread.
        // SAFETY: No safety requirements beyond passing valid arguments.
        let result = unsafe { libc::sched_setaffinity(0, size_of::<cpu_set_t>(), cpuset) };

        if result == 0 {
            Ok(())
        } else {
            Err(io::Error::last_os_error())
        }
    }
}
