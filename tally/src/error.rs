//! Error types for summation and moment operations.

use thiserror::Error;

use crate::moments::Moment;

/// Precondition failures. Each case is reported before any output is produced.
///
/// NaN, infinities and signed zeros produced by valid arithmetic are results,
/// not errors, and never appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("{moment} requires at least {required} values, got {actual}")]
    TooFewValues {
        moment: Moment,
        required: usize,
        actual: usize,
    },

    #[error("Division by zero while computing {moment}")]
    DivisionByZero { moment: Moment },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Fail with [`Error::LengthMismatch`] unless both lengths agree.
#[inline]
pub(crate) fn check_lengths(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        tracing::debug!(expected, actual, "Rejecting arrays of different length");
        return Err(Error::LengthMismatch { expected, actual });
    }
    Ok(())
}
