//! # Level Payments
//!
//! The constant periodic payment (PMT) that amortizes a present value to a
//! target future value, and a monthly loan helper built on it.
//!
//! Sign convention: money received is positive, money paid out is negative.
//! Borrowing 25 (`present_value = -25` from the lender's side) yields a
//! positive payment.

use crate::TvmResult;
use crate::int_rate_convert::nom_i_to_periodic_i;
use crate::interest_factors::fvif_procedure;
use crate::numeric::TvmNumber;
use crate::params::TvmParams;
use bon::builder;
use log::debug;
use rust_decimal::Decimal;

/// Conversion periods per year assumed by [`payment`] and [`decimal_payment`].
pub const MONTHS_PER_YEAR: u32 = 12;

/// Present value assumed by [`payment`] and [`decimal_payment`].
///
/// A fixed unit-principal convention of the loan helpers, not a general
/// purpose parameter. Call [`pmt`] directly for any other principal.
pub const LOAN_PRESENT_VALUE: i64 = -25;

/// Level payment per period.
///
/// # Formula
/// ```text
/// PMT = -((PV + FV) / (FVIF(i, n) - 1) + PV) · i     for i ≠ 0
/// PMT = -(FV + PV) / n                              for i = 0
/// ```
///
/// # Parameters
/// - `interest_rate`: Rate per period
/// - `periods`: Number of payment periods
/// - `present_value`: Value at the start of the term
/// - `future_value`: Value at the end of the term (default 0)
///
/// # Errors
/// - [`TvmError::InvalidInput`](crate::TvmError::InvalidInput) as for [`fvif`](crate::interest_factors::fvif)
/// - [`TvmError::DomainError`](crate::TvmError::DomainError) when `periods = 0` with a zero rate, or when
///   the interest factor is exactly one so the annuity denominator vanishes
///
/// # Example
/// ```rust
/// # use rstvm::prelude::*;
/// // 1% a month for a year on 25 borrowed
/// let installment = pmt()
///     .interest_rate(0.01)
///     .periods(12)
///     .present_value(-25.0)
///     .call()?;
/// assert!((installment - 2.221219716958542).abs() < 1e-9);
/// # TvmResult::Ok(())
/// ```
#[builder]
pub fn pmt(
    interest_rate: f64,
    periods: i64,
    present_value: f64,
    #[builder(default)] future_value: f64,
    #[builder(default = true)] validate: bool,
) -> TvmResult<f64> {
    pmt_procedure(interest_rate, periods, present_value, future_value, validate)
}

/// Level payment per period with exact decimal arithmetic.
///
/// # Example
/// ```rust
/// # use rstvm::prelude::*;
/// let installment = decimal_pmt()
///     .interest_rate(Decimal::ZERO)
///     .periods(10)
///     .present_value(Decimal::new(-25, 0))
///     .call()?;
/// assert_eq!(installment, Decimal::new(25, 1));
/// # TvmResult::Ok(())
/// ```
#[builder]
pub fn decimal_pmt(
    interest_rate: Decimal,
    periods: i64,
    present_value: Decimal,
    #[builder(default)] future_value: Decimal,
    #[builder(default = true)] validate: bool,
) -> TvmResult<Decimal> {
    pmt_procedure(interest_rate, periods, present_value, future_value, validate)
}

/// Monthly loan payment for a nominal annual rate.
///
/// Converts `annual_interest_rate` to a monthly rate and returns
/// `pmt(annual_interest_rate / 12, months, -25, 0)`, see [`LOAN_PRESENT_VALUE`].
///
/// # Example
/// ```rust
/// # use rstvm::prelude::*;
/// let monthly = payment().annual_interest_rate(0.12).months(12).call()?;
/// assert!((monthly - 2.221219716958542).abs() < 1e-9);
/// # TvmResult::Ok(())
/// ```
#[builder]
pub fn payment(
    annual_interest_rate: f64,
    months: i64,
    #[builder(default = true)] validate: bool,
) -> TvmResult<f64> {
    payment_procedure(annual_interest_rate, months, validate)
}

/// Monthly loan payment for a nominal annual rate, exact decimal arithmetic.
#[builder]
pub fn decimal_payment(
    annual_interest_rate: Decimal,
    months: i64,
    #[builder(default = true)] validate: bool,
) -> TvmResult<Decimal> {
    payment_procedure(annual_interest_rate, months, validate)
}

// ================================================
// PRIVATE FUNCTIONS
// ================================================

pub(crate) fn pmt_procedure<T: TvmNumber>(
    interest_rate: T,
    periods: i64,
    present_value: T,
    future_value: T,
    validate: bool,
) -> TvmResult<T> {
    if validate {
        let params = TvmParams {
            interest_rate,
            periods,
        };
        params.validate_all()?;
    }

    let total_value = present_value.try_add(future_value)?;

    // Straight-line amortization, no compounding
    if interest_rate.is_zero() {
        debug!("zero interest rate, amortizing {total_value} over {periods} periods");
        let installment = total_value.try_div(T::from_i64(periods))?;
        return Ok(-installment);
    }

    let denominator = fvif_procedure(interest_rate, periods, false)?.try_sub(T::one())?;
    let installment = total_value
        .try_div(denominator)?
        .try_add(present_value)?
        .try_mul(interest_rate)?;
    Ok(-installment)
}

fn payment_procedure<T: TvmNumber>(
    annual_interest_rate: T,
    months: i64,
    validate: bool,
) -> TvmResult<T> {
    // Validate the caller's annual rate, not the converted monthly one
    if validate {
        let params = TvmParams {
            interest_rate: annual_interest_rate,
            periods: months,
        };
        params.validate_all()?;
    }

    let interest_rate = nom_i_to_periodic_i(annual_interest_rate, MONTHS_PER_YEAR)?;
    pmt_procedure(
        interest_rate,
        months,
        T::from_i64(LOAN_PRESENT_VALUE),
        T::zero(),
        false,
    )
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TvmError;
    use crate::interest_factors::fvif;
    use approx::assert_abs_diff_eq;
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fn_pmt_01() {
        let rates = [0.01, 0.05, 0.005, 0.1];
        let terms = [12, 10, 360, 3];
        let expected = [2.2212197, 3.2376144, 0.1498876, 10.0528701];
        for (i, (rate, term)) in rates.iter().zip(terms.iter()).enumerate() {
            let ans = pmt()
                .interest_rate(*rate)
                .periods(*term)
                .present_value(-25.0)
                .call()
                .unwrap();
            assert_abs_diff_eq!(ans, expected[i], epsilon = 1e-6);
        }
    }

    #[test]
    fn test_fn_pmt_matches_fvif_formula() {
        let (rate, periods, pv, fv) = (0.01, 12, -25.0, 0.0);
        let factor = fvif().interest_rate(rate).periods(periods).call().unwrap();
        let expected = -1.0 * ((pv + fv) / (factor - 1.0) + pv) * rate;
        let ans = pmt()
            .interest_rate(rate)
            .periods(periods)
            .present_value(pv)
            .future_value(fv)
            .call()
            .unwrap();
        assert_eq!(ans, expected);
    }

    #[test]
    fn test_fn_pmt_with_future_value() {
        // Saving towards 1000 from nothing at 5% for 10 periods
        let ans = pmt()
            .interest_rate(0.05)
            .periods(10)
            .present_value(0.0)
            .future_value(1000.0)
            .call()
            .unwrap();
        assert_abs_diff_eq!(ans, -79.5045750, epsilon = 1e-6);
    }

    #[test]
    fn test_fn_pmt_zero_rate_is_straight_line() {
        let ans = pmt()
            .interest_rate(0.0)
            .periods(10)
            .present_value(-25.0)
            .future_value(5.0)
            .call()
            .unwrap();
        assert_eq!(ans, 2.0);

        let ans = decimal_pmt()
            .interest_rate(Decimal::ZERO)
            .periods(-4)
            .present_value(dec!(10))
            .call()
            .unwrap();
        assert_eq!(ans, dec!(2.5));
    }

    #[test]
    fn test_fn_pmt_zero_rate_zero_periods_is_domain_error() {
        let err = pmt()
            .interest_rate(0.0)
            .periods(0)
            .present_value(-25.0)
            .call()
            .unwrap_err();
        assert!(matches!(err, TvmError::DomainError { .. }));

        let err = decimal_pmt()
            .interest_rate(Decimal::ZERO)
            .periods(0)
            .present_value(dec!(-25))
            .call()
            .unwrap_err();
        assert!(matches!(err, TvmError::DomainError { .. }));
    }

    #[test]
    fn test_fn_pmt_zero_periods_is_domain_error() {
        // FVIF of zero periods is one, so the denominator vanishes
        let err = pmt()
            .interest_rate(0.05)
            .periods(0)
            .present_value(-25.0)
            .call()
            .unwrap_err();
        assert!(matches!(err, TvmError::DomainError { .. }));
    }

    #[test]
    fn test_fn_pmt_invalid_input() {
        let err = pmt()
            .interest_rate(f64::INFINITY)
            .periods(12)
            .present_value(-25.0)
            .call()
            .unwrap_err();
        assert_eq!(err.parameter(), Some("interest_rate"));

        let err = pmt()
            .interest_rate(0.01)
            .periods(i64::MIN)
            .present_value(-25.0)
            .call()
            .unwrap_err();
        assert_eq!(err.parameter(), Some("periods"));
    }

    #[test]
    fn test_fn_decimal_pmt_matches_float() {
        let ans = decimal_pmt()
            .interest_rate(dec!(0.05))
            .periods(10)
            .present_value(dec!(-25))
            .call()
            .unwrap();
        let float = pmt()
            .interest_rate(0.05)
            .periods(10)
            .present_value(-25.0)
            .call()
            .unwrap();
        let ans = ans.to_f64().unwrap();
        assert_abs_diff_eq!(ans, float, epsilon = 1e-9);
    }

    #[test]
    fn test_fn_payment_is_monthly_pmt() {
        let ans = payment().annual_interest_rate(0.12).months(12).call().unwrap();
        let expected = pmt()
            .interest_rate(0.12 / 12.0)
            .periods(12)
            .present_value(-25.0)
            .future_value(0.0)
            .call()
            .unwrap();
        assert_eq!(ans, expected);
        assert_abs_diff_eq!(ans, 2.2212197, epsilon = 1e-6);
    }

    #[test]
    fn test_fn_decimal_payment() {
        let ans = decimal_payment()
            .annual_interest_rate(dec!(0.12))
            .months(12)
            .call()
            .unwrap();
        let expected = decimal_pmt()
            .interest_rate(dec!(0.01))
            .periods(12)
            .present_value(dec!(-25))
            .call()
            .unwrap();
        assert_eq!(ans, expected);

        let interest_free = decimal_payment()
            .annual_interest_rate(Decimal::ZERO)
            .months(24)
            .call()
            .unwrap();
        assert_eq!(interest_free, dec!(25) / dec!(24));
    }

    #[test]
    fn test_fn_payment_rejects_non_finite_annual_rate() {
        for rate in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = payment()
                .annual_interest_rate(rate)
                .months(12)
                .call()
                .unwrap_err();
            assert!(matches!(err, TvmError::InvalidInput { .. }));
            assert_eq!(err.parameter(), Some("interest_rate"));
        }
    }

    #[test]
    fn test_fn_payment_rejects_out_of_range_months() {
        let err = payment()
            .annual_interest_rate(0.12)
            .months(i64::MAX)
            .call()
            .unwrap_err();
        assert_eq!(err.parameter(), Some("periods"));

        for months in [i64::MAX, i64::MIN] {
            let err = decimal_payment()
                .annual_interest_rate(dec!(0.12))
                .months(months)
                .call()
                .unwrap_err();
            assert!(matches!(err, TvmError::InvalidInput { .. }));
            assert_eq!(err.parameter(), Some("periods"));
        }
    }
}
