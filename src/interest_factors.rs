//! # Interest Factors
//!
//! Compound interest factors on both numeric tracks.
//!
//! - [`fvif`] / [`decimal_fvif`]: Future Value Interest Factor `(1 + i)ⁿ`
//! - [`pvif`] / [`decimal_pvif`]: Present Value Interest Factor `(1 + i)⁻ⁿ`
//!
//! Negative period counts discount instead of accumulate: `(1 + i)⁻ⁿ` is
//! evaluated as `(1 / (1 + i))ⁿ`, so the exponent handed to the numeric
//! track is always a positive integer.

use crate::TvmResult;
use crate::numeric::TvmNumber;
use crate::params::TvmParams;
use bon::builder;
use log::{debug, trace};
use rust_decimal::Decimal;

/// Future Value Interest Factor.
///
/// The amount a unit invested now grows to after `periods` compounding
/// periods at `interest_rate` per period.
///
/// # Formula
/// ```text
/// FVIF = (1 + i)ⁿ
/// ```
///
/// # Edge cases
/// - `n = 0` returns exactly `1`
/// - `i = -1` (factor `1 + i` of zero) returns `0` for any `n ≠ 0`
/// - `n = 1` returns `1 + i` exactly
/// - `n < 0` returns `(1 / (1 + i))⁻ⁿ`
///
/// # Errors
/// - [`TvmError::InvalidInput`](crate::TvmError::InvalidInput) naming `interest_rate` when the rate
///   is NaN or infinite, or naming `periods` when `|periods|` exceeds [`MAX_PERIODS`](crate::params::MAX_PERIODS)
/// - [`TvmError::Overflow`](crate::TvmError::Overflow) when the factor is not representable
///
/// # Example
/// ```rust
/// # use rstvm::prelude::*;
/// let factor = fvif().interest_rate(0.05).periods(10).call()?;
/// assert!((factor - 1.628894626777442).abs() < 1e-12);
/// # TvmResult::Ok(())
/// ```
#[builder]
pub fn fvif(
    interest_rate: f64,
    periods: i64,
    #[builder(default = true)] validate: bool,
) -> TvmResult<f64> {
    fvif_procedure(interest_rate, periods, validate)
}

/// Future Value Interest Factor with exact decimal arithmetic.
///
/// Same branches as [`fvif`]. The reciprocal taken for negative periods is
/// rounded to 28 significant digits.
///
/// # Example
/// ```rust
/// # use rstvm::prelude::*;
/// let factor = decimal_fvif().interest_rate(Decimal::new(1, 1)).periods(3).call()?;
/// assert_eq!(factor, Decimal::new(1331, 3));
/// # TvmResult::Ok(())
/// ```
#[builder]
pub fn decimal_fvif(
    interest_rate: Decimal,
    periods: i64,
    #[builder(default = true)] validate: bool,
) -> TvmResult<Decimal> {
    fvif_procedure(interest_rate, periods, validate)
}

/// Present Value Interest Factor: the value now of a unit due after `periods`.
///
/// # Formula
/// ```text
/// PVIF = (1 + i)⁻ⁿ = FVIF(i, -n)
/// ```
#[builder]
pub fn pvif(
    interest_rate: f64,
    periods: i64,
    #[builder(default = true)] validate: bool,
) -> TvmResult<f64> {
    pvif_procedure(interest_rate, periods, validate)
}

/// Present Value Interest Factor with exact decimal arithmetic.
#[builder]
pub fn decimal_pvif(
    interest_rate: Decimal,
    periods: i64,
    #[builder(default = true)] validate: bool,
) -> TvmResult<Decimal> {
    pvif_procedure(interest_rate, periods, validate)
}

// ================================================
// PRIVATE FUNCTIONS
// ================================================

pub(crate) fn fvif_procedure<T: TvmNumber>(
    interest_rate: T,
    periods: i64,
    validate: bool,
) -> TvmResult<T> {
    if validate {
        let params = TvmParams {
            interest_rate,
            periods,
        };
        params.validate_all()?;
    }

    // No compounding
    if periods == 0 {
        return Ok(T::one());
    }

    let mut interest_factor = interest_rate.try_add(T::one())?;

    // Rate of -100%: every power of a zero factor collapses to zero
    if interest_factor.is_zero() {
        debug!("interest factor is zero for rate {interest_rate}, fvif reported as zero");
        return Ok(T::zero());
    }

    if periods == 1 {
        return Ok(interest_factor);
    }

    let mut periods = periods;
    if periods < 0 {
        trace!("discounting {interest_factor} over {} periods", -periods);
        periods = -periods;
        interest_factor = T::one().try_div(interest_factor)?;
    }

    interest_factor.try_powi(periods)
}

pub(crate) fn pvif_procedure<T: TvmNumber>(
    interest_rate: T,
    periods: i64,
    validate: bool,
) -> TvmResult<T> {
    if validate {
        let params = TvmParams {
            interest_rate,
            periods,
        };
        params.validate_all()?;
    }
    // The validated range is symmetric, so negation cannot overflow
    fvif_procedure(interest_rate, -periods, false)
}
