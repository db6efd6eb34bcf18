#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Fail-fast diagnostics for test oracles and measurement harnesses.
//!
//! Every fault detected by the overflow harnesses is fatal: there is no degraded mode and no
//! retry. This package captures where the fault was detected and prints a single diagnostic line
//! to stderr before terminating the process with a non-zero exit status:
//!
//! ```text
//! <file>:<line>:<function>(): error: <message>[: <system error text>]
//! ```
//!
//! Two reporters exist:
//!
//! * [`die_at()`] for environment failures, which appends the text of the system error that
//!   caused the failure.
//! * [`term_at()`] for assertion failures, which reports only the message.
//!
//! The [`here!`] macro captures the [`Location`] of the code that invokes it:
//!
//! ```no_run
//! use fatal::{here, term_at};
//!
//! fn verify_answer(answer: u32) {
//!     if answer != 42 {
//!         term_at(here!(), format_args!("{answer} is not the answer"));
//!     }
//! }
//! # verify_answer(42);
//! ```

mod location;
mod report;

pub use location::*;
pub use report::*;
