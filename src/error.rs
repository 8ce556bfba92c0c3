//! Error types for time-value-of-money calculations.
//!
//! Every entry point returns [`TvmResult`]. Three things can go wrong:
//! the caller passes a parameter outside its valid range, the arithmetic
//! asks for a division by zero, or an intermediate value leaves the range
//! of the numeric type.

use thiserror::Error;

/// The error type for all calculations in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TvmError {
    /// A parameter failed validation before any computation ran.
    #[error("Invalid input for `{parameter}`: {reason}")]
    InvalidInput {
        /// Name of the offending parameter.
        parameter: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The calculation is undefined for the given inputs (division by zero).
    #[error("Domain error: {reason}")]
    DomainError {
        /// Description of the undefined operation.
        reason: String,
    },

    /// An intermediate or final value is not representable.
    #[error("Arithmetic overflow in {operation}")]
    Overflow {
        /// The arithmetic operation that overflowed.
        operation: &'static str,
    },
}

impl TvmError {
    /// Creates an invalid input error for the named parameter.
    #[must_use]
    pub fn invalid_input(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Creates a domain error.
    #[must_use]
    pub fn domain_error(reason: impl Into<String>) -> Self {
        Self::DomainError {
            reason: reason.into(),
        }
    }

    /// Creates an overflow error.
    #[must_use]
    pub fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }

    /// Name of the rejected parameter, if this is an input error.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::InvalidInput { parameter, .. } => Some(parameter),
            _ => None,
        }
    }
}

impl From<garde::Report> for TvmError {
    fn from(report: garde::Report) -> Self {
        // Report entries follow field declaration order, so the first one
        // names the first invalid parameter.
        match report.iter().next() {
            Some((path, error)) => Self::invalid_input(path.to_string(), error.message()),
            None => Self::invalid_input("", "validation failed"),
        }
    }
}
