//! Per-project salary calculation.
//!
//! This module turns a project's date range into a salary breakdown.
//!
//! ## Tier Rule
//!
//! **The premium rate belongs to creation-order position 1, not to whichever
//! project is listed first.** A project keeps its tier through edits, through
//! being retired and reactivated, and through other projects being removed.
//! Once the position-1 project is removed, no project is ever premium again.
//!
//! Overtime is billed only on the premium project, at the premium hourly rate.

use rust_decimal::Decimal;

use crate::models::{Project, RateTier, SalaryCalculation};

use super::calendar::{total_days, working_days};
use super::rates::HOURS_PER_DAY;

/// Calculates the salary breakdown for one project.
///
/// # Arguments
///
/// * `project` - The project to bill
/// * `premium_hourly_rate` - Hourly rate for the position-1 project
/// * `standard_hourly_rate` - Hourly rate for every other project
/// * `overtime_hours` - Overtime to bill when the project is premium
///
/// # Returns
///
/// The full breakdown. Overtime fields are non-zero only when the project is
/// premium and `overtime_hours` is positive.
///
/// # Example
///
/// ```
/// use salary_calculator::calculation::calculate_project_salary;
/// use salary_calculator::models::Project;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let project = Project {
///     id: Uuid::new_v4(),
///     name: "Data Migration".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
///     position: 1,
///     disbanded: false,
/// };
///
/// let calc = calculate_project_salary(
///     &project,
///     Decimal::from(125),
///     Decimal::new(625, 1),
///     Decimal::from(2),
/// );
/// assert_eq!(calc.working_hours, 40);
/// assert_eq!(calc.regular_pay, Decimal::from(5000));
/// assert_eq!(calc.ot_pay, Decimal::from(250));
/// assert_eq!(calc.total_salary, Decimal::from(5250));
/// ```
pub fn calculate_project_salary(
    project: &Project,
    premium_hourly_rate: Decimal,
    standard_hourly_rate: Decimal,
    overtime_hours: Decimal,
) -> SalaryCalculation {
    let total_days = total_days(project.start_date, project.end_date);
    let working_days = working_days(project.start_date, project.end_date);
    let working_hours = working_days.saturating_mul(HOURS_PER_DAY);

    let tier = project.tier();
    let hourly_rate = match tier {
        RateTier::Premium => premium_hourly_rate,
        RateTier::Standard => standard_hourly_rate,
    };
    let regular_pay = hourly_rate * Decimal::from(working_hours);

    let (ot_hours, ot_pay) = if tier == RateTier::Premium && overtime_hours > Decimal::ZERO {
        (overtime_hours, overtime_hours * premium_hourly_rate)
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    SalaryCalculation {
        project_id: project.id,
        position: project.position,
        tier,
        total_days,
        working_days,
        working_hours,
        hourly_rate,
        regular_pay,
        ot_hours,
        ot_pay,
        total_salary: regular_pay + ot_pay,
    }
}
