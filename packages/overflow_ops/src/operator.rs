use derive_more::Display;

use crate::{ModularArithmetic, OverflowArithmetic};

/// One of the three overflow-reporting operations.
///
/// Displays as the operator symbol, for use in diagnostics such as `250 + 10 should not overflow`.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "the set of operations is fixed by the arithmetic contract"
)]
pub enum Operator {
    /// Addition.
    #[display("+")]
    Add,

    /// Subtraction.
    #[display("-")]
    Sub,

    /// Multiplication.
    #[display("*")]
    Mul,
}

impl Operator {
    /// All operators, in a fixed order.
    pub const ALL: [Self; 3] = [Self::Add, Self::Sub, Self::Mul];

    /// Applies the overflow-reporting operation, returning `(overflowed, result)`.
    #[inline]
    #[must_use]
    pub fn checked<T: OverflowArithmetic>(self, a: T, b: T) -> (bool, T) {
        match self {
            Self::Add => a.overflow_add(b),
            Self::Sub => a.overflow_sub(b),
            Self::Mul => a.overflow_mul(b),
        }
    }

    /// Applies the operation with two's-complement wraparound and no overflow detection.
    #[inline]
    #[must_use]
    pub fn modular<T: ModularArithmetic>(self, a: T, b: T) -> T {
        match self {
            Self::Add => a.modular_add(b),
            Self::Sub => a.modular_sub(b),
            Self::Mul => a.modular_mul(b),
        }
    }
}
