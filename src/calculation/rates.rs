//! Monthly rate derivation.
//!
//! A monthly amount is spread evenly over the working days of the selected
//! month and then over an eight-hour working day.

use rust_decimal::Decimal;

use crate::config::RatePolicy;
use crate::error::{SalaryError, SalaryResult};
use crate::models::MonthlyRates;

/// Billable hours in one working day.
pub const HOURS_PER_DAY: u32 = 8;

/// Derives daily and hourly rates for both tiers from a period's working days.
///
/// # Arguments
///
/// * `working_days` - Working days in the selected period; must be non-zero
/// * `policy` - The monthly amounts for both tiers
///
/// # Returns
///
/// `NoWorkingDays` when `working_days` is zero, since no daily rate exists.
///
/// # Example
///
/// ```
/// use salary_calculator::calculation::monthly_rates;
/// use salary_calculator::config::RatePolicy;
///
/// let rates = monthly_rates(22, &RatePolicy::default()).unwrap();
/// assert_eq!(rates.premium_daily_rate.round_dp(2).to_string(), "909.09");
/// assert_eq!(rates.premium_hourly_rate.round_dp(2).to_string(), "113.64");
/// assert_eq!(rates.standard_daily_rate.round_dp(2).to_string(), "454.55");
/// assert_eq!(rates.standard_hourly_rate.round_dp(2).to_string(), "56.82");
/// ```
pub fn monthly_rates(working_days: u32, policy: &RatePolicy) -> SalaryResult<MonthlyRates> {
    if working_days == 0 {
        return Err(SalaryError::NoWorkingDays { working_days });
    }

    let days = Decimal::from(working_days);
    let hours = Decimal::from(HOURS_PER_DAY);

    let premium_daily_rate = policy.premium_monthly / days;
    let standard_daily_rate = policy.standard_monthly / days;

    Ok(MonthlyRates {
        working_days,
        premium_monthly_rate: policy.premium_monthly,
        premium_daily_rate,
        premium_hourly_rate: premium_daily_rate / hours,
        standard_monthly_rate: policy.standard_monthly,
        standard_daily_rate,
        standard_hourly_rate: standard_daily_rate / hours,
    })
}
