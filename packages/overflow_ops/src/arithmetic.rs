use std::fmt::{Debug, Display};

use num_traits::PrimInt;
use num_traits::ops::overflowing::{OverflowingAdd, OverflowingMul, OverflowingSub};
use num_traits::ops::wrapping::{WrappingAdd, WrappingMul, WrappingSub};

/// Arithmetic on a fixed-width integer type that reports whether the exact result overflowed.
///
/// This is the contract the overflow oracles verify. It is implemented for every primitive
/// integer type; other implementations (e.g. a hand-written overflow check on a newtype) can be
/// verified against the same oracles.
pub trait OverflowArithmetic: Copy + Debug + Display + Eq {
    /// Adds `rhs`, returning whether the exact sum overflowed and the (wrapped) sum.
    #[must_use]
    fn overflow_add(self, rhs: Self) -> (bool, Self);

    /// Subtracts `rhs`, returning whether the exact difference overflowed and the (wrapped)
    /// difference.
    #[must_use]
    fn overflow_sub(self, rhs: Self) -> (bool, Self);

    /// Multiplies by `rhs`, returning whether the exact product overflowed and the (wrapped)
    /// product.
    #[must_use]
    fn overflow_mul(self, rhs: Self) -> (bool, Self);
}

/// Native two's-complement wraparound arithmetic, without overflow detection.
///
/// Serves as the ground truth that [`OverflowArithmetic`] results are compared against.
pub trait ModularArithmetic: Copy + Eq {
    /// Adds `rhs` with two's-complement wraparound.
    #[must_use]
    fn modular_add(self, rhs: Self) -> Self;

    /// Subtracts `rhs` with two's-complement wraparound.
    #[must_use]
    fn modular_sub(self, rhs: Self) -> Self;

    /// Multiplies by `rhs` with two's-complement wraparound.
    #[must_use]
    fn modular_mul(self, rhs: Self) -> Self;
}

impl<T> OverflowArithmetic for T
where
    T: PrimInt + OverflowingAdd + OverflowingSub + OverflowingMul + Debug + Display,
{
    #[inline]
    fn overflow_add(self, rhs: Self) -> (bool, Self) {
        let (result, overflowed) = OverflowingAdd::overflowing_add(&self, &rhs);
        (overflowed, result)
    }

    #[inline]
    fn overflow_sub(self, rhs: Self) -> (bool, Self) {
        let (result, overflowed) = OverflowingSub::overflowing_sub(&self, &rhs);
        (overflowed, result)
    }

    #[inline]
    fn overflow_mul(self, rhs: Self) -> (bool, Self) {
        let (result, overflowed) = OverflowingMul::overflowing_mul(&self, &rhs);
        (overflowed, result)
    }
}

impl<T> ModularArithmetic for T
where
    T: PrimInt + WrappingAdd + WrappingSub + WrappingMul,
{
    #[inline]
    fn modular_add(self, rhs: Self) -> Self {
        WrappingAdd::wrapping_add(&self, &rhs)
    }

    #[inline]
    fn modular_sub(self, rhs: Self) -> Self {
        WrappingSub::wrapping_sub(&self, &rhs)
    }

    #[inline]
    fn modular_mul(self, rhs: Self) -> Self {
        WrappingMul::wrapping_mul(&self, &rhs)
    }
}
