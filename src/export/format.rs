//! Formatting helpers shared by the renderers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to cents, halves away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount with the currency prefix and exactly two decimals.
///
/// # Example
///
/// ```
/// use salary_calculator::export::format_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_money("₱", Decimal::from(20000)), "₱20000.00");
/// assert_eq!(format_money("₱", Decimal::new(113636, 3)), "₱113.64");
/// ```
pub fn format_money(symbol: &str, amount: Decimal) -> String {
    format!("{}{:.2}", symbol, round_money(amount))
}

/// Formats an hour count without trailing zeros, e.g. "2.5".
pub fn format_hours(hours: Decimal) -> String {
    hours.normalize().to_string()
}
