/// Compile-time configuration of a benchmark run.
///
/// The benchmark executables take no arguments and read no files or environment variables, so
/// every knob is fixed when the executable is built. Start from [`BenchConfig::DEFAULT`] and
/// override individual values with the `with_*` builders:
///
/// ```
/// use overflow_bench::BenchConfig;
///
/// const QUICK: BenchConfig = BenchConfig::DEFAULT
///     .with_duration_millis(50)
///     .with_batch_size(100);
///
/// assert_eq!(QUICK.duration_millis(), 50);
/// assert_eq!(QUICK.iterations(), BenchConfig::DEFAULT.iterations());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BenchConfig {
    duration_millis: u64,
    batch_size: u64,
    iterations: u64,
}

impl BenchConfig {
    /// One second of fixed-duration sampling in windows of 1000 steps; 10 000 legacy iterations.
    pub const DEFAULT: Self = Self {
        duration_millis: 1000,
        batch_size: 1000,
        iterations: 10_000,
    };

    /// Sets the total wall-clock length of a fixed-duration run, in milliseconds.
    ///
    /// The run stops starting new windows once this much time has passed since the first
    /// deadline check. A window in progress is never interrupted.
    #[must_use]
    pub const fn with_duration_millis(self, duration_millis: u64) -> Self {
        Self {
            duration_millis,
            ..self
        }
    }

    /// Sets the number of measured steps in one fixed-duration window.
    #[must_use]
    pub const fn with_batch_size(self, batch_size: u64) -> Self {
        Self { batch_size, ..self }
    }

    /// Sets the number of measured steps in a fixed-iteration run.
    #[must_use]
    pub const fn with_iterations(self, iterations: u64) -> Self {
        Self { iterations, ..self }
    }

    /// Total wall-clock length of a fixed-duration run, in milliseconds.
    #[must_use]
    pub const fn duration_millis(&self) -> u64 {
        self.duration_millis
    }

    /// Number of measured steps in one fixed-duration window.
    #[must_use]
    pub const fn batch_size(&self) -> u64 {
        self.batch_size
    }

    /// Number of measured steps in a fixed-iteration run.
    #[must_use]
    pub const fn iterations(&self) -> u64 {
        self.iterations
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(BenchConfig: Send, Sync, Copy);

    #[test]
    fn defaults() {
        let config = BenchConfig::default();

        assert_eq!(config.duration_millis(), 1000);
        assert_eq!(config.batch_size(), 1000);
        assert_eq!(config.iterations(), 10_000);
    }

    #[test]
    fn builders_replace_one_value() {
        let config = BenchConfig::DEFAULT.with_batch_size(7);

        assert_eq!(config.batch_size(), 7);
        assert_eq!(config.duration_millis(), 1000);
        assert_eq!(config.iterations(), 10_000);

        let config = config.with_duration_millis(3).with_iterations(5);

        assert_eq!(config.duration_millis(), 3);
        assert_eq!(config.batch_size(), 7);
        assert_eq!(config.iterations(), 5);
    }
}
