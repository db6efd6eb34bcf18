#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! A test oracle for overflow-reporting arithmetic.
//!
//! For each of the three operations there are two entry points, both taking an operand pair:
//!
//! * "must not overflow" ([`check_add!`], [`check_sub!`], [`check_mul!`]) requires that no
//!   overflow is signaled **and** that the result is bit-exact with native wraparound arithmetic.
//!   Only use these with operand pairs whose exact result is representable.
//! * "must overflow" ([`fail_add!`], [`fail_sub!`], [`fail_mul!`]) requires only that overflow is
//!   signaled. The wrapped result is not inspected.
//!
//! A violated expectation terminates the process with a diagnostic naming the caller location,
//! the operands and the offending result. The oracle never returns an error: it exists to fail
//! fast and loud.
//!
//! ```
//! use overflow_check::{check_add, fail_add, fail_mul};
//!
//! check_add!(5_u8, 3);
//! fail_add!(250_u8, 10);
//! fail_mul!(i32::MIN, -1);
//! ```
//!
//! The verification itself is available without the termination as [`verify_no_overflow()`]
//! and [`verify_overflow()`], which return a [`Violation`] describing what went wrong.

mod oracle;
mod violation;

pub use oracle::*;
pub use violation::*;

#[doc(hidden)]
pub mod __private {
    pub use fatal::here;
}

/// Verifies that `a + b` does not overflow and equals the native wraparound sum.
///
/// Terminates the process with a diagnostic otherwise.
#[macro_export]
macro_rules! check_add {
    ($a:expr, $b:expr $(,)?) => {
        $crate::check_add_at($a, $b, $crate::__private::here!())
    };
}

/// Verifies that `a - b` does not overflow and equals the native wraparound difference.
///
/// Terminates the process with a diagnostic otherwise.
#[macro_export]
macro_rules! check_sub {
    ($a:expr, $b:expr $(,)?) => {
        $crate::check_sub_at($a, $b, $crate::__private::here!())
    };
}

/// Verifies that `a * b` does not overflow and equals the native wraparound product.
///
/// Terminates the process with a diagnostic otherwise.
#[macro_export]
macro_rules! check_mul {
    ($a:expr, $b:expr $(,)?) => {
        $crate::check_mul_at($a, $b, $crate::__private::here!())
    };
}

/// Verifies that `a + b` signals overflow.
///
/// Terminates the process with a diagnostic otherwise.
#[macro_export]
macro_rules! fail_add {
    ($a:expr, $b:expr $(,)?) => {
        $crate::fail_add_at($a, $b, $crate::__private::here!())
    };
}

/// Verifies that `a - b` signals overflow.
///
/// Terminates the process with a diagnostic otherwise.
#[macro_export]
macro_rules! fail_sub {
    ($a:expr, $b:expr $(,)?) => {
        $crate::fail_sub_at($a, $b, $crate::__private::here!())
    };
}

/// Verifies that `a * b` signals overflow.
///
/// Terminates the process with a diagnostic otherwise.
#[macro_export]
macro_rules! fail_mul {
    ($a:expr, $b:expr $(,)?) => {
        $crate::fail_mul_at($a, $b, $crate::__private::here!())
    };
}
