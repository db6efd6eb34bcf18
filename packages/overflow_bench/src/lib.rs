#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! A cycle-precise benchmark driver for operations that take a handful of cycles.
//!
//! A benchmark executable pins itself to the processor it starts on and then repeatedly runs a
//! measured step, reading the cycle counter immediately before and after each execution. The
//! deltas are summed over a reporting window and each window total is written to stdout as one
//! decimal number per line. Diagnostics go to stderr.
//!
//! The measured step is responsible for hiding its inputs and outputs from the optimizer, which
//! the [`steps`] module does with [`opaque_value`].
//!
//! A benchmark executable is one line:
//!
//! ```no_run
//! use overflow_bench::{BenchConfig, main_fixed_duration, steps};
//!
//! fn main() {
//!     main_fixed_duration(BenchConfig::DEFAULT, steps::mul_step);
//! }
//! ```
//!
//! The [`Session`] type drives the sampling loops directly, writing to any [`std::io::Write`],
//! for callers that manage pinning and output themselves.

mod config;
mod entry;
mod sample;
mod session;
pub mod steps;
mod timer;

pub use config::*;
pub use entry::*;
pub use sample::*;
pub use session::*;
pub use timer::*;
