//! Plain-text rendering of a salary breakdown.
//!
//! The layout is meant for pasting into chat or email, so it uses headings
//! and one fact per line.

use rust_decimal::Decimal;

use crate::calculation::format_long_date;

use super::breakdown::SalaryBreakdown;
use super::format::{format_hours, format_money};

/// Renders a breakdown as plain text.
pub fn render_text(breakdown: &SalaryBreakdown) -> String {
    let money = |amount: Decimal| format_money(&breakdown.currency_symbol, amount);
    let rates = &breakdown.rates;
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "{} SALARY BREAKDOWN",
        breakdown.organization.to_uppercase()
    ));
    lines.push(format!(
        "Generated on: {}",
        format_long_date(breakdown.generated_on)
    ));
    lines.push(String::new());

    lines.push("RATE INFORMATION".to_string());
    lines.push(format!(
        "{} has {} working days",
        breakdown.month.month_name, breakdown.month.working_days
    ));
    lines.push(format!(
        "First Project: {}/month | {}/day | {}/hour",
        money(rates.premium_monthly_rate),
        money(rates.premium_daily_rate),
        money(rates.premium_hourly_rate)
    ));
    lines.push(format!(
        "2nd & Succeeding: {}/month | {}/day | {}/hour",
        money(rates.standard_monthly_rate),
        money(rates.standard_daily_rate),
        money(rates.standard_hourly_rate)
    ));

    if !breakdown.projects.is_empty() {
        lines.push(String::new());
        lines.push("PROJECT DETAILS".to_string());

        for entry in &breakdown.projects {
            let calc = &entry.calculation;
            lines.push(String::new());
            lines.push(format!("{}: {}", entry.label, entry.project.name));
            lines.push(format!(
                "Period: {} - {}",
                format_long_date(entry.project.start_date),
                format_long_date(entry.project.end_date)
            ));
            lines.push(format!(
                "Working Days: {} days ({} hours)",
                calc.working_days, calc.working_hours
            ));
            lines.push(format!("Hourly Rate: {}/hour", money(calc.hourly_rate)));
            lines.push(format!("Regular Pay: {}", money(calc.regular_pay)));
            if calc.ot_hours > Decimal::ZERO {
                lines.push(format!("Overtime Hours: {} hours", format_hours(calc.ot_hours)));
                lines.push(format!("Overtime Pay: {}", money(calc.ot_pay)));
            }
            lines.push(format!("Total: {}", money(calc.total_salary)));
        }
    }

    if !breakdown.reimbursements.is_empty() {
        lines.push(String::new());
        lines.push("REIMBURSEMENTS".to_string());
        for item in &breakdown.reimbursements {
            lines.push(format!(
                "{} ({}): {} - {}",
                item.description,
                item.category.label(),
                money(item.amount),
                format_long_date(item.date)
            ));
        }
        lines.push(format!(
            "Total Reimbursements: {}",
            money(breakdown.totals.reimbursements)
        ));
    }

    lines.push(String::new());
    lines.push("SUMMARY".to_string());
    lines.push(format!(
        "Total Salary: {}",
        money(breakdown.totals.total_salary)
    ));
    lines.push(format!(
        "Total Reimbursements: {}",
        money(breakdown.totals.reimbursements)
    ));
    lines.push(String::new());
    lines.push(format!(
        "GRAND TOTAL: {}",
        money(breakdown.totals.grand_total)
    ));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
