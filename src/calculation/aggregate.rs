//! Aggregate salary calculation.
//!
//! This module applies the per-project calculation across a project list and
//! reduces the results into totals.

use rust_decimal::Decimal;

use crate::models::{Project, ReimbursementItem, SalaryCalculation, SalaryTotals};

use super::project_salary::calculate_project_salary;

/// Calculates salaries for every active project, in list order.
///
/// Retired projects are skipped. Each remaining project is billed by its own
/// creation-order `position`, never by where it lands after filtering, so
/// removing or retiring the position-1 project does not promote another one.
///
/// # Example
///
/// ```
/// use salary_calculator::calculation::calculate_all_project_salaries;
/// use salary_calculator::models::{Project, RateTier};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let january = |position: u32, disbanded: bool| Project {
///     id: Uuid::new_v4(),
///     name: format!("Project {}", position),
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
///     position,
///     disbanded,
/// };
///
/// let projects = vec![january(1, true), january(2, false)];
/// let calcs = calculate_all_project_salaries(
///     &projects,
///     Decimal::from(125),
///     Decimal::new(625, 1),
///     Decimal::ZERO,
/// );
/// assert_eq!(calcs.len(), 1);
/// assert_eq!(calcs[0].tier, RateTier::Standard);
/// ```
pub fn calculate_all_project_salaries(
    projects: &[Project],
    premium_hourly_rate: Decimal,
    standard_hourly_rate: Decimal,
    overtime_hours: Decimal,
) -> Vec<SalaryCalculation> {
    projects
        .iter()
        .filter(|project| project.is_active())
        .map(|project| {
            calculate_project_salary(
                project,
                premium_hourly_rate,
                standard_hourly_rate,
                overtime_hours,
            )
        })
        .collect()
}

/// Sums reimbursement amounts.
///
/// # Example
///
/// ```
/// use salary_calculator::calculation::total_reimbursements;
///
/// assert_eq!(total_reimbursements(&[]), rust_decimal::Decimal::ZERO);
/// ```
pub fn total_reimbursements(items: &[ReimbursementItem]) -> Decimal {
    items.iter().map(|item| item.amount).sum()
}

/// Reduces salary calculations and reimbursements into column totals.
pub fn summarize(
    calculations: &[SalaryCalculation],
    reimbursements: &[ReimbursementItem],
) -> SalaryTotals {
    let mut totals = calculations
        .iter()
        .fold(SalaryTotals::default(), |mut acc, calc| {
            acc.working_days = acc.working_days.saturating_add(calc.working_days);
            acc.working_hours = acc.working_hours.saturating_add(calc.working_hours);
            acc.regular_pay += calc.regular_pay;
            acc.ot_hours += calc.ot_hours;
            acc.ot_pay += calc.ot_pay;
            acc
        });

    totals.total_salary = totals.regular_pay + totals.ot_pay;
    totals.reimbursements = total_reimbursements(reimbursements);
    totals.grand_total = totals.total_salary + totals.reimbursements;
    totals
}
