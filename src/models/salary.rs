//! Derived salary models.
//!
//! Nothing in this module is stored. Every value is recomputed from the
//! current projects and reimbursements whenever they change.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::RateTier;

/// Daily and hourly rates for both tiers in a given period.
///
/// # Example
///
/// ```
/// use salary_calculator::calculation::monthly_rates;
/// use salary_calculator::config::RatePolicy;
/// use rust_decimal::Decimal;
///
/// let rates = monthly_rates(20, &RatePolicy::default()).unwrap();
/// assert_eq!(rates.premium_daily_rate, Decimal::from(1000));
/// assert_eq!(rates.premium_hourly_rate, Decimal::from(125));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRates {
    /// Working days the monthly amounts are spread over.
    pub working_days: u32,
    /// Premium monthly amount.
    pub premium_monthly_rate: Decimal,
    /// Premium monthly amount divided by the working days.
    pub premium_daily_rate: Decimal,
    /// Premium daily rate divided by the hours in a working day.
    pub premium_hourly_rate: Decimal,
    /// Standard monthly amount.
    pub standard_monthly_rate: Decimal,
    /// Standard monthly amount divided by the working days.
    pub standard_daily_rate: Decimal,
    /// Standard daily rate divided by the hours in a working day.
    pub standard_hourly_rate: Decimal,
}

/// The salary breakdown for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryCalculation {
    /// The project this breakdown belongs to.
    pub project_id: Uuid,
    /// The project's creation-order position.
    pub position: u32,
    /// The tier the position mapped to.
    pub tier: RateTier,
    /// Calendar days in the project's range, inclusive.
    pub total_days: u32,
    /// Monday to Friday days in the project's range.
    pub working_days: u32,
    /// `working_days * 8`.
    pub working_hours: u32,
    /// Hourly rate applied to the regular hours.
    pub hourly_rate: Decimal,
    /// `hourly_rate * working_hours`.
    pub regular_pay: Decimal,
    /// Overtime hours billed; always zero for standard projects.
    pub ot_hours: Decimal,
    /// Overtime pay at the premium hourly rate.
    pub ot_pay: Decimal,
    /// `regular_pay + ot_pay`.
    pub total_salary: Decimal,
}

/// Column sums over a set of salary calculations plus reimbursements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryTotals {
    /// Sum of working days.
    pub working_days: u32,
    /// Sum of working hours.
    pub working_hours: u32,
    /// Sum of regular pay.
    pub regular_pay: Decimal,
    /// Sum of overtime hours.
    pub ot_hours: Decimal,
    /// Sum of overtime pay.
    pub ot_pay: Decimal,
    /// Regular plus overtime pay.
    pub total_salary: Decimal,
    /// Sum of reimbursement amounts.
    pub reimbursements: Decimal,
    /// Salary plus reimbursements.
    pub grand_total: Decimal,
}

/// A calendar month selected for rate derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthInfo {
    /// Calendar year.
    pub year: i32,
    /// Zero-based month index (January is 0).
    pub month: u32,
    /// Long label, e.g. "January 2024".
    pub month_name: String,
    /// Monday to Friday days in the month.
    pub working_days: u32,
}
