//! Rounding rules.
//!
//! Values are rounded at exactly two points: when a duration is computed and
//! when pay is computed. Everything downstream sums already-rounded values.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept for hours and money.
pub const DECIMAL_PLACES: u32 = 2;

/// Rounds a duration in hours to 2 decimal places (half to even).
pub fn round_hours(hours: Decimal) -> Decimal {
    hours.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven)
}

/// Rounds a monetary amount to 2 decimal places (half to even).
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven)
}
