use std::fmt;
use std::time::Duration;

const NANOS_PER_SEC: u32 = 1_000_000_000;
const NANOS_PER_MILLI: u32 = 1_000_000;
const MILLIS_PER_SEC: u64 = 1_000;

/// A reading of the monotonic clock, split into whole seconds and the nanoseconds within the
/// current second.
///
/// The nanosecond part is always normalized to be less than one second, so ordering compares
/// seconds first and nanoseconds second, exactly like the underlying clock.
///
/// # Examples
///
/// ```
/// use cycle_clock::Timespec;
///
/// let start = Timespec::new(4, 990_000_000);
/// let deadline = start.plus_millis(50);
///
/// assert_eq!(deadline, Timespec::new(5, 40_000_000));
/// assert!(deadline > start);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Timespec {
    secs: u64,
    nanos: u32,
}

impl Timespec {
    /// Creates a timestamp, carrying any whole seconds contained in `nanos` into `secs`.
    #[must_use]
    #[expect(
        clippy::integer_division,
        reason = "the remainder is kept as the nanosecond part"
    )]
    pub const fn new(secs: u64, nanos: u32) -> Self {
        Self {
            secs: secs.saturating_add((nanos / NANOS_PER_SEC) as u64),
            nanos: nanos % NANOS_PER_SEC,
        }
    }

    /// Whole seconds since the clock's epoch.
    #[must_use]
    pub const fn secs(&self) -> u64 {
        self.secs
    }

    /// Nanoseconds within the current second, always less than one second.
    #[must_use]
    pub const fn nanos(&self) -> u32 {
        self.nanos
    }

    /// Returns the timestamp `millis` milliseconds after this one.
    ///
    /// The milliseconds are split into seconds and nanoseconds, and a nanosecond sum that
    /// reaches one second carries into the seconds.
    #[must_use]
    #[expect(
        clippy::integer_division,
        reason = "the remainder is converted into the nanosecond part"
    )]
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "sub-second parts are below one second, so their sum cannot overflow u32"
    )]
    pub const fn plus_millis(self, millis: u64) -> Self {
        let extra_secs = millis / MILLIS_PER_SEC;
        let extra_nanos = (millis % MILLIS_PER_SEC) as u32 * NANOS_PER_MILLI;

        let mut secs = self.secs.saturating_add(extra_secs);
        let mut nanos = self.nanos + extra_nanos;

        if nanos >= NANOS_PER_SEC {
            secs = secs.saturating_add(1);
            nanos -= NANOS_PER_SEC;
        }

        Self { secs, nanos }
    }

    /// The time elapsed from `earlier` to this timestamp, or zero if `earlier` is later.
    #[must_use]
    pub fn saturating_duration_since(self, earlier: Self) -> Duration {
        Duration::from(self).saturating_sub(Duration::from(earlier))
    }

    /// The timestamp in nanoseconds since the clock's epoch, saturating at `u64::MAX`.
    #[must_use]
    pub fn as_nanos(self) -> u64 {
        u64::try_from(Duration::from(self).as_nanos()).unwrap_or(u64::MAX)
    }
}

impl From<Timespec> for Duration {
    fn from(value: Timespec) -> Self {
        Self::new(value.secs, value.nanos)
    }
}

impl From<Duration> for Timespec {
    fn from(value: Duration) -> Self {
        Self::new(value.as_secs(), value.subsec_nanos())
    }
}

impl fmt::Display for Timespec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.secs, self.nanos)
    }
}
