use std::io;

use thiserror::Error;

use crate::ProcessorId;

/// Errors that can occur when pinning the calling thread to a processor.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The operating system could not tell which processor the thread is executing on.
    #[error("cannot identify the current processor: {source}")]
    CurrentProcessor {
        /// The system error reported by the operating system.
        source: io::Error,
    },

    /// The operating system could not tell how many processors are configured.
    #[error("cannot determine the configured processor count: {source}")]
    ProcessorCount {
        /// The system error reported by the operating system.
        source: io::Error,
    },

    /// The current processor cannot be represented in an affinity mask.
    #[error("processor {processor_id} is outside the affinity mask capacity of {limit} processors")]
    ProcessorOutOfRange {
        /// The processor the thread is executing on.
        processor_id: ProcessorId,

        /// The number of processors an affinity mask can hold on this system.
        limit: usize,
    },

    /// The operating system refused to apply the affinity mask.
    #[error("cannot pin to processor {processor_id}: {source}")]
    SetAffinity {
        /// The processor the thread was to be pinned to.
        processor_id: ProcessorId,

        /// The system error reported by the operating system.
        source: io::Error,
    },

    /// Pinning is not implemented for the build target.
    #[error("processor pinning is not supported on this platform")]
    Unsupported,
}

impl Error {
    /// The name of the operation that failed, for diagnostics.
    #[must_use]
    pub fn failing_call(&self) -> &'static str {
        match self {
            Self::CurrentProcessor { .. } => "sched_getcpu",
            Self::ProcessorCount { .. } => "sysconf",
            Self::ProcessorOutOfRange { .. } => "CPU_SET",
            Self::SetAffinity { .. } | Self::Unsupported => "sched_setaffinity",
        }
    }

    /// The system error that caused the failure, if the failure came from the operating system.
    #[must_use]
    pub fn system_error(&self) -> Option<&io::Error> {
        match self {
            Self::CurrentProcessor { source }
            | Self::ProcessorCount { source }
            | Self::SetAffinity { source, .. } => Some(source),
            Self::ProcessorOutOfRange { .. } | Self::Unsupported => None,
        }
    }
}

/// A specialized `Result` type for pinning operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
