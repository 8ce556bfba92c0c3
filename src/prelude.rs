//! # RSTvm Prelude
//!
//! Conveniently re-exports every calculation and the types needed to call them.
//!
//! ## Example
//!
//! ```rust
//! # use rstvm::prelude::*;
//! let float = pmt().interest_rate(0.05).periods(10).present_value(-25.0).call()?;
//! let exact = decimal_pmt()
//!     .interest_rate(Decimal::new(5, 2))
//!     .periods(10)
//!     .present_value(Decimal::new(-25, 0))
//!     .call()?;
//! println!("{float:.6} vs {}", exact.round_dp(6));
//! # TvmResult::Ok(())
//! ```

// Package Result and error types
pub use crate::TvmResult;
pub use crate::error::TvmError;

// Numeric tracks
pub use crate::numeric::TvmNumber;
pub use rust_decimal::Decimal;

// Interest rate conversion functions
pub use crate::int_rate_convert::*;

// Calculations
pub use crate::interest_factors::*;
pub use crate::payments::*;
pub use crate::time_values::*;
