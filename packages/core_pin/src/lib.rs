#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Pins the calling thread to the processor it is currently executing on.
//!
//! Cycle counters are per-core and the scheduler is free to migrate a thread between cores at
//! any time. A migration in the middle of a measurement makes the cycle delta meaningless and
//! even without migration, cache state is lost. Call [`pin_to_current_cpu()`] once, before the
//! first measurement, and the scheduler will keep the thread where it already is.
//!
//! ```no_run
//! match core_pin::pin_to_current_cpu() {
//!     Ok(processor_id) => println!("measuring on processor {processor_id}"),
//!     Err(e) => eprintln!("cannot measure reliably: {e}"),
//! }
//! ```
//!
//! Only Linux is supported. On other platforms pinning fails with [`Error::Unsupported`].

mod error;
#[cfg(target_os = "linux")]
mod pal;
mod pinning;

pub use error::*;
pub use pinning::*;
