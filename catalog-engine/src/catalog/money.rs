//! Money conversion helpers
//!
//! Catalog prices live on the wire as `f64`, but delta sums are computed
//! on [`Decimal`] so repeated additions cannot drift. Results come back
//! to `f64` rounded to cents, half away from zero.

use rust_decimal::prelude::*;

/// Monetary values round to 2 decimal places
pub const DECIMAL_PLACES: u32 = 2;

/// Lift an `f64` price into `Decimal` for arithmetic
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Round a computed amount back to an `f64` with cent precision
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Compare two prices for equality at cent precision
pub fn money_eq(a: f64, b: f64) -> bool {
    (to_decimal(a) - to_decimal(b)).abs() < Decimal::new(1, DECIMAL_PLACES)
}
