//! Calculation logic for the salary calculator.
//!
//! This module contains the calendar utilities (calendar and working-day
//! counts, ordinal suffixes, month selection), monthly rate derivation, the
//! per-project salary calculation with its position-based tier rule, and the
//! aggregate reductions over projects and reimbursements.

mod aggregate;
mod calendar;
mod project_salary;
mod rates;

pub use aggregate::{calculate_all_project_salaries, summarize, total_reimbursements};
pub use calendar::{
    DATE_FORMAT, current_month_info, format_long_date, is_working_day, month_info_for_date,
    ordinal, ordinal_suffix, parse_date, parse_period, resolve_period, total_days, working_days,
    working_days_in_month,
};
pub use project_salary::calculate_project_salary;
pub use rates::{HOURS_PER_DAY, monthly_rates};
