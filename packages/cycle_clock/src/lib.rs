#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Timestamp sources for measuring operations that take a handful of cycles.
//!
//! The narrow interface is [`now()`], which reads the hardware cycle counter of the executing
//! core. On `x86_64` this is the time-stamp counter, on `aarch64` the virtual counter
//! register. The read is fenced so the compiler cannot move surrounding code across it. Other
//! targets fall back to the monotonic clock in nanoseconds, so callers never need to care which
//! source is in use.
//!
//! The counter is only comparable to itself on one core. Pin the measuring thread before taking
//! readings that are subtracted from each other.
//!
//! [`monotonic_now()`] reads the monotonic wall clock as a [`Timespec`], which is what
//! measurement loops use to decide when to stop.
//!
//! ```
//! let start = cycle_clock::now();
//! let sum = std::hint::black_box(2_u32) + std::hint::black_box(3_u32);
//! let elapsed = cycle_clock::now().wrapping_sub(start);
//!
//! println!("{sum} computed in {elapsed} cycles");
//! ```
//!
//! The [`Clock`] type offers the same readings as a value, for code that wants to hold its
//! timestamp source as state.

mod clock;
mod pal;
mod timespec;

pub use clock::*;
pub use timespec::*;
