use std::fmt::Debug;
#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use crate::pal::MockBindings;
use crate::pal::{Bindings, BuildTargetBindings};
use crate::Timespec;

/// Enum to hide the real/mock choice behind a single wrapper type.
///
/// Outside of tests there is only one variant, so dispatch compiles down to a direct call.
#[derive(Clone)]
pub(crate) enum BindingsFacade {
    Target(&'static BuildTargetBindings),

    #[cfg(test)]
    Mock(Arc<MockBindings>),
}

impl BindingsFacade {
    pub(crate) const fn target() -> Self {
        Self::Target(&BuildTargetBindings)
    }
}

impl Bindings for BindingsFacade {
    #[inline]
    fn read_cycle_counter(&self) -> u64 {
        match self {
            Self::Target(bindings) => bindings.read_cycle_counter(),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.read_cycle_counter(),
        }
    }

    fn clock_gettime_monotonic(&self) -> Timespec {
        match self {
            Self::Target(bindings) => bindings.clock_gettime_monotonic(),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.clock_gettime_monotonic(),
        }
    }
}

#[cfg(test)]
impl From<MockBindings> for BindingsFacade {
    fn from(bindings: MockBindings) -> Self {
        Self::Mock(Arc::new(bindings))
    }
}

#[cfg_attr(coverage_nightly, coverage(off))] // No API contract to test.
impl Debug for BindingsFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Target(bindings) => bindings.fmt(f),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.fmt(f),
        }
    }
}
