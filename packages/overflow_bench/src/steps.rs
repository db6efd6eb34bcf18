//! Measured steps for the benchmark executables.
//!
//! Every operand passes through [`launder()`] and every result through [`sink()`], so the
//! optimizer can neither fold the operation into a constant nor discard it as unused.

use opaque_value::{launder, sink};
use overflow_ops::OverflowArithmetic;

/// The integer type the benchmark executables measure.
pub type Operand = i32;

const LHS: Operand = 1_234_567;
const RHS: Operand = 891;

/// One overflow-reporting addition.
#[inline]
pub fn add_step() {
    let (overflowed, sum) = launder(LHS).overflow_add(launder(RHS));
    sink(overflowed);
    sink(sum);
}

/// One overflow-reporting subtraction.
#[inline]
pub fn sub_step() {
    let (overflowed, difference) = launder(LHS).overflow_sub(launder(RHS));
    sink(overflowed);
    sink(difference);
}

/// One overflow-reporting multiplication.
#[inline]
pub fn mul_step() {
    let (overflowed, product) = launder(LHS).overflow_mul(launder(RHS));
    sink(overflowed);
    sink(product);
}

/// No arithmetic at all, only the cost of laundering and sinking one value.
///
/// Subtract its samples from those of the other steps to isolate the cost of the operation.
#[inline]
pub fn baseline_step() {
    sink(launder::<Operand>(1));
}
