use derive_more::{Display, From, Into};

/// Elapsed cycles accumulated over one reporting window.
///
/// Displays as a bare decimal integer, which is the line format of the benchmark output.
#[derive(Clone, Copy, Debug, Default, Display, Eq, From, Hash, Into, Ord, PartialEq, PartialOrd)]
#[display("{_0}")]
pub struct Sample(u64);

impl Sample {
    /// Creates a sample from a cycle count.
    #[must_use]
    pub const fn new(cycles: u64) -> Self {
        Self(cycles)
    }

    /// The accumulated cycle count.
    #[must_use]
    pub const fn cycles(self) -> u64 {
        self.0
    }
}
