//! Pinning changes process-level scheduler state, so this runs in its own test binary.

#![cfg(target_os = "linux")]

#[test]
#[cfg_attr(miri, ignore)] // Miri cannot call platform APIs.
fn pins_to_a_processor_and_stays_there() {
    let processor_id = core_pin::pin_to_current_cpu().unwrap();

    for _ in 0..1_000 {
        std::thread::yield_now();
    }

    // SAFETY: No safety requirements.
    let current = unsafe { libc::sched_getcpu() };

    assert_eq!(u32::try_from(current).unwrap(), processor_id);
}
