//! # Time Values
//!
//! Future and present value of a level end-of-period payment stream plus a
//! lump sum, on both numeric tracks. These are the inverses of
//! [`pmt`](crate::payments::pmt): with the same sign convention,
//! `fv(i, n, pmt(i, n, pv, fv), pv) == fv`.

use crate::TvmResult;
use crate::interest_factors::fvif_procedure;
use crate::numeric::TvmNumber;
use crate::params::TvmParams;
use bon::builder;
use rust_decimal::Decimal;

/// Future value of a present amount and level payments.
///
/// # Formula
/// ```text
/// FV = -(PV · F + PMT · (F - 1) / i)     F = FVIF(i, n), i ≠ 0
/// FV = -(PV + PMT · n)                   i = 0
/// ```
///
/// # Parameters
/// - `interest_rate`: Rate per period
/// - `periods`: Number of payment periods
/// - `payment`: Payment made each period (default 0)
/// - `present_value`: Value at the start of the term (default 0)
///
/// # Example
/// ```rust
/// # use rstvm::prelude::*;
/// let balance = fv().interest_rate(0.05).periods(10).present_value(-100.0).call()?;
/// assert!((balance - 162.8894626777442).abs() < 1e-9);
/// # TvmResult::Ok(())
/// ```
#[builder]
pub fn fv(
    interest_rate: f64,
    periods: i64,
    #[builder(default)] payment: f64,
    #[builder(default)] present_value: f64,
    #[builder(default = true)] validate: bool,
) -> TvmResult<f64> {
    fv_procedure(interest_rate, periods, payment, present_value, validate)
}

/// Future value with exact decimal arithmetic.
#[builder]
pub fn decimal_fv(
    interest_rate: Decimal,
    periods: i64,
    #[builder(default)] payment: Decimal,
    #[builder(default)] present_value: Decimal,
    #[builder(default = true)] validate: bool,
) -> TvmResult<Decimal> {
    fv_procedure(interest_rate, periods, payment, present_value, validate)
}

/// Present value of level payments and a future amount.
///
/// # Formula
/// ```text
/// PV = -(FV + PMT · (F - 1) / i) / F     F = FVIF(i, n), i ≠ 0
/// PV = -(FV + PMT · n)                   i = 0
/// ```
///
/// A zero factor `F` (rate of -100%) has no present value and is a
/// [`TvmError::DomainError`](crate::TvmError::DomainError).
///
/// # Example
/// ```rust
/// # use rstvm::prelude::*;
/// let loan = pv().interest_rate(0.0).periods(10).payment(-2.5).call()?;
/// assert_eq!(loan, 25.0);
/// # TvmResult::Ok(())
/// ```
#[builder]
pub fn pv(
    interest_rate: f64,
    periods: i64,
    #[builder(default)] payment: f64,
    #[builder(default)] future_value: f64,
    #[builder(default = true)] validate: bool,
) -> TvmResult<f64> {
    pv_procedure(interest_rate, periods, payment, future_value, validate)
}

/// Present value with exact decimal arithmetic.
#[builder]
pub fn decimal_pv(
    interest_rate: Decimal,
    periods: i64,
    #[builder(default)] payment: Decimal,
    #[builder(default)] future_value: Decimal,
    #[builder(default = true)] validate: bool,
) -> TvmResult<Decimal> {
    pv_procedure(interest_rate, periods, payment, future_value, validate)
}

// ================================================
// PRIVATE FUNCTIONS
// ================================================

fn fv_procedure<T: TvmNumber>(
    interest_rate: T,
    periods: i64,
    payment: T,
    present_value: T,
    validate: bool,
) -> TvmResult<T> {
    if validate {
        TvmParams {
            interest_rate,
            periods,
        }
        .validate_all()?;
    }

    if interest_rate.is_zero() {
        let paid = payment.try_mul(T::from_i64(periods))?;
        return Ok(-present_value.try_add(paid)?);
    }

    let factor = fvif_procedure(interest_rate, periods, false)?;
    let accumulated = present_value.try_mul(factor)?;
    let paid = annuity_accumulation(payment, factor, interest_rate)?;
    Ok(-accumulated.try_add(paid)?)
}

fn pv_procedure<T: TvmNumber>(
    interest_rate: T,
    periods: i64,
    payment: T,
    future_value: T,
    validate: bool,
) -> TvmResult<T> {
    if validate {
        TvmParams {
            interest_rate,
            periods,
        }
        .validate_all()?;
    }

    if interest_rate.is_zero() {
        let paid = payment.try_mul(T::from_i64(periods))?;
        return Ok(-future_value.try_add(paid)?);
    }

    let factor = fvif_procedure(interest_rate, periods, false)?;
    let paid = annuity_accumulation(payment, factor, interest_rate)?;
    Ok(-future_value.try_add(paid)?.try_div(factor)?)
}

// PMT · (F - 1) / i
fn annuity_accumulation<T: TvmNumber>(payment: T, factor: T, interest_rate: T) -> TvmResult<T> {
    payment
        .try_mul(factor.try_sub(T::one())?)?
        .try_div(interest_rate)
}
