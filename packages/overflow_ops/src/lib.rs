#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Overflow-reporting arithmetic on fixed-width integers.
//!
//! Each operation returns a pair `(overflowed, result)`:
//!
//! * `overflowed` is `true` if and only if the mathematically exact result is not representable
//!   in the operand type.
//! * `result` is the exact result when no overflow occurred, or its low-order bits
//!   (two's-complement wraparound) when it did.
//!
//! ```
//! use overflow_ops::OverflowArithmetic;
//!
//! assert_eq!(5_u8.overflow_add(3), (false, 8));
//! assert_eq!(250_u8.overflow_add(10), (true, 4));
//! assert_eq!((-128_i8).overflow_sub(1), (true, 127));
//! ```
//!
//! [`ModularArithmetic`] provides the same operations with plain two's-complement wraparound and
//! no overflow detection, which serves as ground truth when verifying an implementation.
//!
//! The [`Operator`] type selects one of the three operations at runtime, which lets oracles and
//! measurement loops treat them uniformly.

mod arithmetic;
mod operator;

pub use arithmetic::*;
pub use operator::*;
