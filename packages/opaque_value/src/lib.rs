#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Primitives that hide values from the optimizer without changing them.
//!
//! Measuring an operation that takes a handful of cycles only works if the compiler actually
//! emits that operation. An optimizing compiler will happily delete a computation whose result
//! is unused, or fold it into a constant if its inputs are known at compile time. This package
//! provides the two opaque operations that prevent both:
//!
//! * [`sink()`] consumes a value as if it had an external effect, so the computation producing
//!   it cannot be eliminated.
//! * [`blind_zero()`] returns zero from a source the optimizer cannot evaluate, so a value
//!   combined with it cannot be constant-folded.
//!
//! [`launder()`] combines a value with [`blind_zero()`] via exclusive-or: at runtime the result
//! is equal to the input, statically it is unknown.
//!
//! ```
//! use opaque_value::{launder, sink};
//!
//! let (sum, overflowed) = launder(250_u8).overflowing_add(launder(10_u8));
//!
//! // Without laundering, both results would be compile-time constants.
//! sink(sum);
//! sink(overflowed);
//! ```

use std::hint::black_box;

use num_traits::PrimInt;

/// Consumes a value in a way the optimizer must treat as an observable effect.
///
/// Use this on the final result of a measured computation so the computation is not removed.
#[inline(never)]
pub fn sink<T>(value: T) {
    black_box(value);
}

/// Returns zero, in a way the optimizer cannot prove to be zero.
#[inline(never)]
#[must_use]
pub fn blind_zero<T: PrimInt>() -> T {
    black_box(T::zero())
}

/// Returns `value` unchanged at runtime while making it opaque to static analysis.
#[inline]
#[must_use]
pub fn launder<T: PrimInt>(value: T) -> T {
    value ^ blind_zero()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn assert_launder_preserves<T: PrimInt + std::fmt::Debug>() {
        for value in [
            T::min_value(),
            T::max_value(),
            T::zero(),
            T::one(),
            T::max_value().saturating_sub(T::one()),
            T::min_value().saturating_add(T::one()),
        ] {
            assert_eq!(launder(value), value);
        }
    }

    #[test]
    fn blind_zero_is_zero() {
        assert_eq!(blind_zero::<u8>(), 0);
        assert_eq!(blind_zero::<i32>(), 0);
        assert_eq!(blind_zero::<u128>(), 0);
    }

    #[test]
    fn launder_preserves_all_widths() {
        assert_launder_preserves::<u8>();
        assert_launder_preserves::<u16>();
        assert_launder_preserves::<u32>();
        assert_launder_preserves::<u64>();
        assert_launder_preserves::<u128>();
        assert_launder_preserves::<usize>();
        assert_launder_preserves::<i8>();
        assert_launder_preserves::<i16>();
        assert_launder_preserves::<i32>();
        assert_launder_preserves::<i64>();
        assert_launder_preserves::<i128>();
        assert_launder_preserves::<isize>();
    }

    #[test]
    fn launder_preserves_every_byte() {
        for value in u8::MIN..=u8::MAX {
            assert_eq!(launder(value), value);
        }

        for value in i8::MIN..=i8::MAX {
            assert_eq!(launder(value), value);
        }
    }

    #[test]
    fn sink_accepts_any_value() {
        sink(42_u64);
        sink((true, 7_i8));
        sink("consumed");
    }
}
