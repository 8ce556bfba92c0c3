//! # RSTvm Basic Usage Example
//!
//! This example demonstrates the basic usage of the rstvm crate
//! for time-value-of-money calculations using the builder pattern API.

use rstvm::prelude::*;

fn main() -> TvmResult<()> {
    println!("RSTvm Basic Usage Example");
    println!("=========================");
    println!();

    // Interest factors
    println!("=== Interest Factors (5% per period) ===");
    let growth = fvif().interest_rate(0.05).periods(10).call()?;
    let discount = fvif().interest_rate(0.05).periods(-10).call()?;
    let present = pvif().interest_rate(0.05).periods(10).call()?;

    println!("  FVIF over 10 periods: {growth:.6}");
    println!("  FVIF over -10 periods: {discount:.6}");
    println!("  PVIF over 10 periods: {present:.6}");
    println!("  Product (should be 1.0): {:.6}", growth * discount);

    // Level payments on the float track
    println!("\n=== Payments ===");
    let mortgage = pmt()
        .interest_rate(0.06 / 12.0)
        .periods(360)
        .present_value(-300_000.0)
        .call()?;
    let savings = pmt()
        .interest_rate(0.04)
        .periods(10)
        .present_value(0.0)
        .future_value(10_000.0)
        .call()?;
    let monthly = payment().annual_interest_rate(0.12).months(12).call()?;

    println!("  30-year mortgage on 300,000 at 6%: {mortgage:.2}");
    println!("  Saving 10,000 over 10 years at 4%: {savings:.2}");
    println!("  Loan helper (12% nominal, 12 months): {monthly:.6}");

    // Exact decimal arithmetic
    println!("\n=== Decimal Track ===");
    let exact = decimal_payment()
        .annual_interest_rate(Decimal::new(12, 2))
        .months(12)
        .call()?;
    let effective = nom_i_to_eff_i(Decimal::new(12, 2), MONTHS_PER_YEAR)?;

    println!("  Loan helper (12% nominal, 12 months): {}", exact.round_dp(10));
    println!("  Effective rate of 12% monthly: {}", effective.round_dp(10));

    // Undefined calculations are errors
    println!("\n=== Domain Errors ===");
    match pmt().interest_rate(0.0).periods(0).present_value(-25.0).call() {
        Ok(value) => println!("  Unexpected value: {value}"),
        Err(err) => println!("  Zero rate over zero periods: {err}"),
    }

    println!("\n✓ All calculations completed successfully!");

    Ok(())
}
