use fatal::{Location, term_at};
use overflow_ops::{ModularArithmetic, Operator, OverflowArithmetic};

use crate::Violation;

/// Verifies that `a <op> b` signals no overflow and that its result equals native wraparound
/// arithmetic.
///
/// Returns the verified result.
///
/// # Errors
///
/// Returns [`Violation::UnexpectedOverflow`] if overflow was signaled and
/// [`Violation::WrongResult`] if the result differs from native wraparound arithmetic.
///
/// # Examples
///
/// ```
/// use overflow_check::{Violation, verify_no_overflow};
/// use overflow_ops::Operator;
///
/// assert_eq!(verify_no_overflow(Operator::Add, 5_u8, 3), Ok(8));
/// assert!(matches!(
///     verify_no_overflow(Operator::Add, 250_u8, 10),
///     Err(Violation::UnexpectedOverflow { .. })
/// ));
/// ```
pub fn verify_no_overflow<T>(op: Operator, a: T, b: T) -> Result<T, Violation<T>>
where
    T: OverflowArithmetic + ModularArithmetic,
{
    let (overflowed, actual) = op.checked(a, b);

    if overflowed {
        return Err(Violation::UnexpectedOverflow { op, a, b });
    }

    let expected = op.modular(a, b);

    if actual != expected {
        return Err(Violation::WrongResult {
            op,
            a,
            b,
            actual,
            expected,
        });
    }

    Ok(actual)
}

/// Verifies that `a <op> b` signals overflow.
///
/// The result that accompanies the overflow signal is not inspected.
///
/// # Errors
///
/// Returns [`Violation::MissingOverflow`] if no overflow was signaled.
pub fn verify_overflow<T>(op: Operator, a: T, b: T) -> Result<(), Violation<T>>
where
    T: OverflowArithmetic,
{
    let (overflowed, actual) = op.checked(a, b);

    if overflowed {
        Ok(())
    } else {
        Err(Violation::MissingOverflow { op, a, b, actual })
    }
}

fn expect_no_overflow<T>(op: Operator, a: T, b: T, location: Location)
where
    T: OverflowArithmetic + ModularArithmetic,
{
    if let Err(violation) = verify_no_overflow(op, a, b) {
        term_at(location, violation);
    }
}

fn expect_overflow<T>(op: Operator, a: T, b: T, location: Location)
where
    T: OverflowArithmetic,
{
    if let Err(violation) = verify_overflow(op, a, b) {
        term_at(location, violation);
    }
}

/// Verifies that `a + b` does not overflow and equals the native wraparound sum, terminating
/// the process with a diagnostic attributed to `location` otherwise.
///
/// Prefer the [`check_add!`][crate::check_add] macro, which captures the location for you.
pub fn check_add_at<T>(a: T, b: T, location: Location)
where
    T: OverflowArithmetic + ModularArithmetic,
{
    expect_no_overflow(Operator::Add, a, b, location);
}

/// Verifies that `a - b` does not overflow and equals the native wraparound difference,
/// terminating the process with a diagnostic attributed to `location` otherwise.
///
/// Prefer the [`check_sub!`][crate::check_sub] macro, which captures the location for you.
pub fn check_sub_at<T>(a: T, b: T, location: Location)
where
    T: OverflowArithmetic + ModularArithmetic,
{
    expect_no_overflow(Operator::Sub, a, b, location);
}

/// Verifies that `a * b` does not overflow and equals the native wraparound product,
/// terminating the process with a diagnostic attributed to `location` otherwise.
///
/// Prefer the [`check_mul!`][crate::check_mul] macro, which captures the location for you.
pub fn check_mul_at<T>(a: T, b: T, location: Location)
where
    T: OverflowArithmetic + ModularArithmetic,
{
    expect_no_overflow(Operator::Mul, a, b, location);
}

/// Verifies that `a + b` signals overflow, terminating the process with a diagnostic
/// attributed to `location` otherwise.
///
/// Prefer the [`fail_add!`][crate::fail_add] macro, which captures the location for you.
pub fn fail_add_at<T>(a: T, b: T, location: Location)
where
    T: OverflowArithmetic,
{
    expect_overflow(Operator::Add, a, b, location);
}

/// Verifies that `a - b` signals overflow, terminating the process with a diagnostic
/// attributed to `location` otherwise.
///
/// Prefer the [`fail_sub!`][crate::fail_sub] macro, which captures the location for you.
pub fn fail_sub_at<T>(a: T, b: T, location: Location)
where
    T: OverflowArithmetic,
{
    expect_overflow(Operator::Sub, a, b, location);
}

/// Verifies that `a * b` signals overflow, terminating the process with a diagnostic
/// attributed to `location` otherwise.
///
/// Prefer the [`fail_mul!`][crate::fail_mul] macro, which captures the location for you.
pub fn fail_mul_at<T>(a: T, b: T, location: Location)
where
    T: OverflowArithmetic,
{
    expect_overflow(Operator::Mul, a, b, location);
}
