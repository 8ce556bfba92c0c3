use crate::numeric::TvmNumber;
use garde::Validate;
use log::debug;

/// Largest period count (in absolute value) accepted by any entry point.
///
/// Integer exponentiation on the floating point track is defined over `i32`,
/// and negative counts are negated before exponentiation, so the range is
/// symmetric around zero.
pub const MAX_PERIODS: i64 = i32::MAX as i64;

// =======================================
// RATE AND TERM PARAMETER STRUCT
// =======================================
#[derive(Debug, Clone, Validate)]
pub struct TvmParams<T: TvmNumber> {
    // Per-period interest rate, e.g. 0.01 for 1%
    // NaN and infinities are not rates
    #[garde(custom(validate_rate))]
    pub interest_rate: T,

    // Number of compounding periods
    // Zero and negative counts are meaningful, magnitude is bounded
    #[garde(range(min = -MAX_PERIODS, max = MAX_PERIODS))]
    pub periods: i64,
}

impl<T: TvmNumber> TvmParams<T> {
    /// Validate all parameters, returning the garde report on failure.
    pub fn validate_all(&self) -> Result<(), garde::Report> {
        self.validate().inspect_err(|report| {
            debug!("rejected rate/term parameters {self:?}: {report}");
        })
    }
}

// =======================================
// PRIVATE FUNCTIONS
// =======================================

fn validate_rate<T: TvmNumber>(value: &T, _context: &()) -> garde::Result {
    if !value.is_finite() {
        return Err(garde::Error::new(format!(
            "interest rate {value} is not a finite number"
        )));
    }
    Ok(())
}
