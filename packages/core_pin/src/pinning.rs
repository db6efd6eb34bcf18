#[cfg(target_os = "linux")]
use std::mem;

#[cfg(target_os = "linux")]
use tracing::debug;

use crate::Result;
#[cfg(target_os = "linux")]
use crate::Error;
#[cfg(target_os = "linux")]
use crate::pal::{Bindings, BindingsFacade};

/// Identifies a logical processor, as numbered by the operating system.
pub type ProcessorId = u32;

/// Pins the calling thread to the processor it is currently executing on.
///
/// The harness is single-threaded, so pinning the calling thread pins the whole measuring
/// process. Call this once, before the first measurement window starts.
///
/// Returns the processor the thread is now pinned to.
///
/// # Errors
///
/// Returns an error if the current processor cannot be identified, cannot be represented in an
/// affinity mask or if the operating system refuses the new affinity. None of these are worth
/// retrying: they indicate an environment in which cycle-accurate measurement is not possible.
#[cfg(target_os = "linux")]
pub fn pin_to_current_cpu() -> Result<ProcessorId> {
    pin_with(&BindingsFacade::target())
}

/// Pins the calling thread to the processor it is currently executing on.
///
/// # Errors
///
/// Always returns [`Error::Unsupported`][crate::Error::Unsupported] on this platform.
#[cfg(not(target_os = "linux"))]
pub fn pin_to_current_cpu() -> Result<ProcessorId> {
    Err(crate::Error::Unsupported)
}

#[cfg(target_os = "linux")]
fn pin_with(bindings: &impl Bindings) -> Result<ProcessorId> {
    let processor_id = bindings
        .sched_getcpu()
        .map_err(|source| Error::CurrentProcessor { source })?;

    let configured = bindings
        .processor_count_configured()
        .map_err(|source| Error::ProcessorCount { source })?;

    let limit = configured.min(mask_capacity());

    // Widening conversion on every supported target; a failure means "does not fit" regardless.
    let fits = usize::try_from(processor_id).is_ok_and(|index| index < limit);

    if !fits {
        return Err(Error::ProcessorOutOfRange {
            processor_id,
            limit,
        });
    }

    bindings
        .sched_setaffinity_current(&single_processor_mask(processor_id))
        .map_err(|source| Error::SetAffinity {
            processor_id,
            source,
        })?;

    debug!(processor_id, "pinned to current processor");

    Ok(processor_id)
}

/// The number of processors an affinity mask can hold.
#[cfg(target_os = "linux")]
const fn mask_capacity() -> usize {
    // CPU_SETSIZE is a positive `c_int`, so its absolute value is the value itself.
    libc::CPU_SETSIZE.unsigned_abs() as usize
}

/// Creates an affinity mask that contains exactly one processor.
///
/// The caller must have verified that the processor fits in the mask.
#[cfg(target_os = "linux")]
fn single_processor_mask(processor_id: ProcessorId) -> libc::cpu_set_t {
    // SAFETY: Zero-initialized cpu_set_t is a valid (empty) value.
    let mut cpu_set: libc::cpu_set_t = unsafe { mem::zeroed() };

    // SAFETY: No safety requirements; the caller has verified the index is within the mask.
    unsafe {
        libc::CPU_SET(processor_id as usize, &mut cpu_set);
    }

    cpu_set
}

#[cfg(test)]
#[cfg(target_os = "linux")]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::io;

    use super::*;
    use crate::pal::MockBindings;

    fn mask_contains_only(cpu_set: &libc::cpu_set_t, processor_id: ProcessorId) -> bool {
        // SAFETY: No safety requirements.
        let count = unsafe { libc::CPU_COUNT(cpu_set) };

        // SAFETY: No safety requirements; the index is within the mask in every test.
        let contains = unsafe { libc::CPU_ISSET(processor_id as usize, cpu_set) };

        count == 1 && contains
    }

    #[test]
    fn mask_capacity_matches_cpu_setsize() {
        assert_eq!(mask_capacity(), 1024);
        assert_eq!(mask_capacity(), usize::try_from(libc::CPU_SETSIZE).unwrap());
    }

    #[test]
    fn pins_to_current_processor() {
        let mut bindings = MockBindings::new();

        bindings.expect_sched_getcpu().times(1).returning(|| Ok(3));
        bindings
            .expect_processor_count_configured()
            .times(1)
            .returning(|| Ok(8));
        bindings
            .expect_sched_setaffinity_current()
            .withf(|cpu_set| mask_contains_only(cpu_set, 3))
            .times(1)
            .returning(|_| Ok(()));

        let processor_id = pin_with(&BindingsFacade::from_mock(bindings)).unwrap();

        assert_eq!(processor_id, 3);
    }

    #[test]
    fn current_processor_failure_stops_before_pinning() {
        let mut bindings = MockBindings::new();

        bindings
            .expect_sched_getcpu()
            .times(1)
            .returning(|| Err(io::Error::from_raw_os_error(38)));
        bindings.expect_processor_count_configured().never();
        bindings.expect_sched_setaffinity_current().never();

        let error = pin_with(&BindingsFacade::from_mock(bindings)).unwrap_err();

        assert!(matches!(error, Error::CurrentProcessor { .. }));
        assert_eq!(error.failing_call(), "sched_getcpu");
    }

    #[test]
    fn processor_count_failure_is_reported() {
        let mut bindings = MockBindings::new();

        bindings.expect_sched_getcpu().returning(|| Ok(0));
        bindings
            .expect_processor_count_configured()
            .returning(|| Err(io::Error::from_raw_os_error(22)));
        bindings.expect_sched_setaffinity_current().never();

        let error = pin_with(&BindingsFacade::from_mock(bindings)).unwrap_err();

        assert!(matches!(error, Error::ProcessorCount { .. }));
    }

    #[test]
    fn processor_beyond_configured_count_is_rejected() {
        let mut bindings = MockBindings::new();

        bindings.expect_sched_getcpu().returning(|| Ok(4));
        bindings.expect_processor_count_configured().returning(|| Ok(4));
        bindings.expect_sched_setaffinity_current().never();

        let error = pin_with(&BindingsFacade::from_mock(bindings)).unwrap_err();

        assert!(matches!(
            error,
            Error::ProcessorOutOfRange {
                processor_id: 4,
                limit: 4
            }
        ));
    }

    #[test]
    fn processor_beyond_mask_capacity_is_rejected() {
        let mut bindings = MockBindings::new();

        let huge_processor_id = ProcessorId::try_from(mask_capacity()).unwrap();

        bindings
            .expect_sched_getcpu()
            .returning(move || Ok(huge_processor_id));
        bindings
            .expect_processor_count_configured()
            .returning(|| Ok(100_000));
        bindings.expect_sched_setaffinity_current().never();

        let error = pin_with(&BindingsFacade::from_mock(bindings)).unwrap_err();

        assert!(matches!(
            error,
            Error::ProcessorOutOfRange { limit, .. } if limit == mask_capacity()
        ));
    }

    #[test]
    fn refused_affinity_is_reported_with_system_error() {
        let mut bindings = MockBindings::new();

        bindings.expect_sched_getcpu().returning(|| Ok(1));
        bindings.expect_processor_count_configured().returning(|| Ok(2));
        bindings
            .expect_sched_setaffinity_current()
            .times(1)
            .returning(|_| Err(io::Error::from_raw_os_error(1)));

        let error = pin_with(&BindingsFacade::from_mock(bindings)).unwrap_err();

        assert_eq!(error.failing_call(), "sched_setaffinity");
        assert_eq!(
            error.system_error().and_then(io::Error::raw_os_error),
            Some(1)
        );
    }
}
