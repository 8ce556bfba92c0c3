//! # RSTvm
//!
//! Time-value-of-money building blocks: compound interest factors and level
//! payments, in native floating point or exact decimal arithmetic.
//!
//! ## Features
//! - **Two precision tracks**: every function has an `f64` form and a
//!   [`Decimal`](rust_decimal::Decimal) form (`decimal_` prefix) sharing one algorithm
//! - **No silent infinities**: division by zero and overflow are errors, never `inf` or `NaN`
//! - **Builder Pattern**: All functions use builder pattern with automatic parameter validation
//!
//! ## Quick Start
//!
//! ```rust
//! use rstvm::prelude::*;
//!
//! // Growth of 1 over 10 periods at 5%
//! let factor = fvif().interest_rate(0.05).periods(10).call()?;
//!
//! // Monthly payment on 25 borrowed at 1% a month for a year
//! let installment = pmt()
//!     .interest_rate(0.01)
//!     .periods(12)
//!     .present_value(-25.0)
//!     .call()?;
//!
//! // Same loan with exact decimal arithmetic, from a 12% nominal annual rate
//! let exact = decimal_payment()
//!     .annual_interest_rate(Decimal::new(12, 2))
//!     .months(12)
//!     .call()?;
//!
//! println!("FVIF: {:.6}", factor);
//! println!("PMT: {:.6}", installment);
//! println!("Decimal payment: {}", exact.round_dp(6));
//! # TvmResult::Ok(())
//! ```
//!
//! ## Supported Functions
//!
//! - **Interest Factors**: `fvif`, `pvif`
//! - **Payments**: `pmt`, `payment` (monthly loan helper)
//! - **Time Values**: `fv`, `pv`
//! - **Interest Rate Conversions**: nominal annual rates to periodic and effective rates
//!
//! ## Notes
//! - Rates are per period in decimal form (0.01 for 1%)
//! - Periods may be zero or negative; negative periods discount
//! - Cash paid out is negative, cash received is positive

pub type TvmResult<T> = Result<T, TvmError>;
pub mod error;
pub mod int_rate_convert;
pub mod interest_factors;
pub mod numeric;
pub mod params;
pub mod payments;
pub mod prelude;
pub mod time_values;

pub use error::TvmError;
