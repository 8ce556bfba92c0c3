//! # Numeric Tracks
//!
//! Every calculation in this crate is written once, generically over
//! [`TvmNumber`], and instantiated for two numeric tracks:
//!
//! - **Floating point** (`f64`): native IEEE-754 arithmetic. Any operation
//!   producing infinity or NaN is reported as [`TvmError::Overflow`] and a
//!   zero divisor as [`TvmError::DomainError`].
//! - **Decimal** ([`Decimal`]): 96-bit exact base-10 arithmetic through the
//!   checked operations of `rust_decimal`, for currency-correct results.
//!
//! The two tracks never mix: a calculation takes and returns one type only.

use crate::TvmResult;
use crate::error::TvmError;
use rust_decimal::{Decimal, MathematicalOps};
use std::fmt::{Debug, Display};
use std::ops::Neg;

/// The arithmetic capabilities required by the time-value-of-money procedures.
pub trait TvmNumber: Copy + PartialEq + Neg<Output = Self> + Debug + Display {
    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Converts a whole number (period counts, fixed conventions).
    fn from_i64(value: i64) -> Self;

    fn is_zero(&self) -> bool;

    /// Whether the value is a genuine number (not NaN and not infinite).
    fn is_finite(&self) -> bool;

    fn try_add(self, rhs: Self) -> TvmResult<Self>;

    fn try_sub(self, rhs: Self) -> TvmResult<Self>;

    fn try_mul(self, rhs: Self) -> TvmResult<Self>;

    /// Division; a zero divisor is a [`TvmError::DomainError`].
    fn try_div(self, rhs: Self) -> TvmResult<Self>;

    /// Raises `self` to a non-negative integer power.
    fn try_powi(self, exponent: i64) -> TvmResult<Self>;
}

// ================================================
// FLOATING POINT TRACK
// ================================================

impl TvmNumber for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn from_i64(value: i64) -> Self {
        value as f64
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }

    fn try_add(self, rhs: Self) -> TvmResult<Self> {
        finite(self + rhs, "addition")
    }

    fn try_sub(self, rhs: Self) -> TvmResult<Self> {
        finite(self - rhs, "subtraction")
    }

    fn try_mul(self, rhs: Self) -> TvmResult<Self> {
        finite(self * rhs, "multiplication")
    }

    fn try_div(self, rhs: Self) -> TvmResult<Self> {
        if rhs == 0.0 {
            return Err(division_by_zero(self));
        }
        finite(self / rhs, "division")
    }

    fn try_powi(self, exponent: i64) -> TvmResult<Self> {
        let exponent = i32::try_from(exponent).map_err(|_| {
            TvmError::invalid_input(
                "periods",
                format!("exponent {exponent} exceeds the supported range"),
            )
        })?;
        finite(self.powi(exponent), "exponentiation")
    }
}

fn finite(value: f64, operation: &'static str) -> TvmResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TvmError::overflow(operation))
    }
}

// ================================================
// DECIMAL TRACK
// ================================================

impl TvmNumber for Decimal {
    fn zero() -> Self {
        Decimal::ZERO
    }

    fn one() -> Self {
        Decimal::ONE
    }

    fn from_i64(value: i64) -> Self {
        Decimal::from(value)
    }

    fn is_zero(&self) -> bool {
        Decimal::is_zero(self)
    }

    fn is_finite(&self) -> bool {
        true
    }

    fn try_add(self, rhs: Self) -> TvmResult<Self> {
        self.checked_add(rhs)
            .ok_or_else(|| TvmError::overflow("addition"))
    }

    fn try_sub(self, rhs: Self) -> TvmResult<Self> {
        self.checked_sub(rhs)
            .ok_or_else(|| TvmError::overflow("subtraction"))
    }

    fn try_mul(self, rhs: Self) -> TvmResult<Self> {
        self.checked_mul(rhs)
            .ok_or_else(|| TvmError::overflow("multiplication"))
    }

    fn try_div(self, rhs: Self) -> TvmResult<Self> {
        if rhs.is_zero() {
            return Err(division_by_zero(self));
        }
        self.checked_div(rhs)
            .ok_or_else(|| TvmError::overflow("division"))
    }

    fn try_powi(self, exponent: i64) -> TvmResult<Self> {
        self.checked_powi(exponent)
            .ok_or_else(|| TvmError::overflow("exponentiation"))
    }
}

fn division_by_zero<T: Display>(numerator: T) -> TvmError {
    TvmError::domain_error(format!("division of {numerator} by zero"))
}
