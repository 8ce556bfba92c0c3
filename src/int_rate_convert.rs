//! Conversions from nominal annual rates.
//!
//! Generic over both numeric tracks: pass `f64` for floating point results
//! or [`Decimal`](rust_decimal::Decimal) for exact ones.

use crate::TvmResult;
use crate::numeric::TvmNumber;

/// Convert nominal interest rate to the rate per conversion period.
///
/// # Formula
/// ```text
/// iₚ = i⁽ᵐ⁾ / m
/// ```
/// where:
/// - `nom_i` is the nominal interest rate convertible m times per year
/// - `m` is the number of conversion periods per year
///
/// # Errors
/// `m = 0` is a [`TvmError::DomainError`](crate::TvmError::DomainError).
///
/// # Example
/// ```rust
/// # use rstvm::prelude::nom_i_to_periodic_i;
/// let monthly = nom_i_to_periodic_i(0.12, 12)?; // 12% convertible monthly
/// assert_eq!(monthly, 0.01);
/// # rstvm::TvmResult::Ok(())
/// ```
pub fn nom_i_to_periodic_i<T: TvmNumber>(nom_i: T, m: u32) -> TvmResult<T> {
    nom_i.try_div(T::from_i64(i64::from(m)))
}

/// Convert nominal interest rate to effective annual interest rate.
///
/// # Formula
/// ```text
/// i = (1 + i⁽ᵐ⁾/m)^m - 1
/// ```
/// where:
/// - `nom_i` is the nominal interest rate convertible m times per year
/// - `m` is the number of conversion periods per year
///
/// # Example
/// ```rust
/// # use rstvm::prelude::*;
/// let eff = nom_i_to_eff_i(Decimal::new(6, 2), 2)?; // semi-annual nominal 6%
/// assert_eq!(eff, Decimal::new(609, 4));
/// # TvmResult::Ok(())
/// ```
pub fn nom_i_to_eff_i<T: TvmNumber>(nom_i: T, m: u32) -> TvmResult<T> {
    let periodic_i = nom_i_to_periodic_i(nom_i, m)?;
    periodic_i
        .try_add(T::one())?
        .try_powi(i64::from(m))?
        .try_sub(T::one())
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TvmError;
    use approx::assert_abs_diff_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fn_nom_i_to_periodic_i() {
        assert_eq!(nom_i_to_periodic_i(0.12, 12).unwrap(), 0.12 / 12.0);
        assert_eq!(nom_i_to_periodic_i(dec!(0.06), 12).unwrap(), dec!(0.005));
        assert_eq!(nom_i_to_periodic_i(0.05, 1).unwrap(), 0.05);
    }

    #[test]
    fn test_fn_nom_i_to_periodic_i_zero_frequency() {
        let err = nom_i_to_periodic_i(0.12, 0).unwrap_err();
        assert!(matches!(err, TvmError::DomainError { .. }));

        let err = nom_i_to_periodic_i(Decimal::ONE, 0).unwrap_err();
        assert!(matches!(err, TvmError::DomainError { .. }));
    }

    #[test]
    fn test_fn_nom_i_to_eff_i() {
        let rates = [0.12, 0.06, 0.05];
        let frequencies = [12, 2, 1];
        let expected = [0.1268250, 0.0609, 0.05];
        for (i, (rate, m)) in rates.iter().zip(frequencies.iter()).enumerate() {
            let ans = nom_i_to_eff_i(*rate, *m).unwrap();
            assert_abs_diff_eq!(ans, expected[i], epsilon = 1e-6);
        }

        assert_eq!(nom_i_to_eff_i(dec!(0.04), 4).unwrap(), dec!(0.04060401));
    }
}
