use overflow_ops::{Operator, OverflowArithmetic};
use thiserror::Error;

/// Describes how an overflow-reporting operation disagreed with the oracle's expectation.
///
/// The display form is the diagnostic message the oracle terminates with.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum Violation<T: OverflowArithmetic> {
    /// Overflow was signaled for an operand pair that was expected not to overflow.
    #[error("{a} {op} {b} should not overflow")]
    UnexpectedOverflow {
        /// The operation.
        op: Operator,
        /// The left operand.
        a: T,
        /// The right operand.
        b: T,
    },

    /// No overflow was signaled but the result differs from native wraparound arithmetic.
    #[error("{a} {op} {b} = {actual}, should be {expected}")]
    WrongResult {
        /// The operation.
        op: Operator,
        /// The left operand.
        a: T,
        /// The right operand.
        b: T,
        /// The result reported by the operation.
        actual: T,
        /// The result of native wraparound arithmetic.
        expected: T,
    },

    /// No overflow was signaled for an operand pair that was expected to overflow.
    #[error("{a} {op} {b} = {actual}, should overflow")]
    MissingOverflow {
        /// The operation.
        op: Operator,
        /// The left operand.
        a: T,
        /// The right operand.
        b: T,
        /// The result reported by the operation.
        actual: T,
    },
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Violation<u8>: Send, Sync, Debug, std::error::Error);

    #[test]
    fn messages_name_operands_and_results() {
        let unexpected = Violation::UnexpectedOverflow {
            op: Operator::Add,
            a: 250_u8,
            b: 10,
        };
        assert_eq!(unexpected.to_string(), "250 + 10 should not overflow");

        let wrong = Violation::WrongResult {
            op: Operator::Mul,
            a: -3_i16,
            b: 7,
            actual: 21,
            expected: -21,
        };
        assert_eq!(wrong.to_string(), "-3 * 7 = 21, should be -21");

        let missing = Violation::MissingOverflow {
            op: Operator::Sub,
            a: 0_u32,
            b: 1,
            actual: 7,
        };
        assert_eq!(missing.to_string(), "0 - 1 = 7, should overflow");
    }
}
