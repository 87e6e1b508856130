//! Printable HTML rendering of a salary breakdown.
//!
//! Produces a standalone page with inline styles that prints cleanly on A4
//! or Letter. Every user-supplied string goes through `ammonia::clean_text`.

use ammonia::clean_text;
use rust_decimal::Decimal;

use crate::calculation::format_long_date;

use super::breakdown::SalaryBreakdown;
use super::format::{format_hours, format_money};

const STYLE: &str = "body{font-family:Helvetica,Arial,sans-serif;color:#1f2937;margin:2rem;}\
h1{color:#dc2626;margin-bottom:0;}h2{border-bottom:1px solid #e5e7eb;padding-bottom:.25rem;}\
table{border-collapse:collapse;width:100%;}td,th{padding:.35rem .5rem;text-align:left;}\
.amount{text-align:right;}.project{border:1px solid #e5e7eb;border-radius:.5rem;padding:1rem;margin:.75rem 0;}\
.total{font-weight:bold;}footer{margin-top:2rem;font-size:.8rem;color:#6b7280;text-align:center;}\
@media print{body{margin:0;}.project{page-break-inside:avoid;}}";

/// Renders a breakdown as a standalone HTML document.
pub fn render_html(breakdown: &SalaryBreakdown) -> String {
    let money = |amount: Decimal| format_money(&breakdown.currency_symbol, amount);
    let rates = &breakdown.rates;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!(
        "<title>{} Salary Breakdown</title>\n<style>{}</style>\n</head>\n<body>\n",
        clean_text(&breakdown.organization),
        STYLE
    ));

    html.push_str(&format!(
        "<header>\n<h1>{}</h1>\n<p>Salary Breakdown &middot; Generated on {}</p>\n</header>\n",
        clean_text(&breakdown.organization),
        format_long_date(breakdown.generated_on)
    ));

    html.push_str("<section>\n<h2>Rate Information</h2>\n");
    html.push_str(&format!(
        "<p><strong>{}</strong> has <strong>{} working days</strong></p>\n",
        breakdown.month.month_name,
        breakdown.month.working_days
    ));
    html.push_str("<table>\n<tr><th>Tier</th><th class=\"amount\">Monthly</th><th class=\"amount\">Daily</th><th class=\"amount\">Hourly</th></tr>\n");
    html.push_str(&format!(
        "<tr><td>1st Project Rate</td><td class=\"amount\">{}</td><td class=\"amount\">{}</td><td class=\"amount\">{}</td></tr>\n",
        money(rates.premium_monthly_rate),
        money(rates.premium_daily_rate),
        money(rates.premium_hourly_rate)
    ));
    html.push_str(&format!(
        "<tr><td>2nd+ Project Rate</td><td class=\"amount\">{}</td><td class=\"amount\">{}</td><td class=\"amount\">{}</td></tr>\n",
        money(rates.standard_monthly_rate),
        money(rates.standard_daily_rate),
        money(rates.standard_hourly_rate)
    ));
    html.push_str("</table>\n</section>\n");

    if !breakdown.projects.is_empty() {
        html.push_str("<section>\n<h2>Project Details</h2>\n");
        for entry in &breakdown.projects {
            let calc = &entry.calculation;
            html.push_str("<div class=\"project\">\n");
            html.push_str(&format!(
                "<h3>{}: {}</h3>\n<table>\n",
                entry.label,
                clean_text(&entry.project.name)
            ));
            html.push_str(&format!(
                "<tr><td>Period</td><td>{} - {}</td></tr>\n",
                format_long_date(entry.project.start_date),
                format_long_date(entry.project.end_date)
            ));
            html.push_str(&format!(
                "<tr><td>Working Days</td><td>{} days ({} hours)</td></tr>\n",
                calc.working_days, calc.working_hours
            ));
            html.push_str(&format!(
                "<tr><td>Hourly Rate</td><td>{}/hour</td></tr>\n",
                money(calc.hourly_rate)
            ));
            html.push_str(&format!(
                "<tr><td>Regular Pay</td><td>{}</td></tr>\n",
                money(calc.regular_pay)
            ));
            if calc.ot_hours > Decimal::ZERO {
                html.push_str(&format!(
                    "<tr><td>Overtime Hours</td><td>{} hours</td></tr>\n",
                    format_hours(calc.ot_hours)
                ));
                html.push_str(&format!(
                    "<tr><td>Overtime Pay</td><td>{}</td></tr>\n",
                    money(calc.ot_pay)
                ));
            }
            html.push_str(&format!(
                "<tr class=\"total\"><td>Project Total</td><td>{}</td></tr>\n</table>\n</div>\n",
                money(calc.total_salary)
            ));
        }
        html.push_str("</section>\n");
    }

    if !breakdown.reimbursements.is_empty() {
        html.push_str("<section>\n<h2>Reimbursements</h2>\n<table>\n");
        html.push_str("<tr><th>Description</th><th>Category</th><th>Date</th><th class=\"amount\">Amount</th></tr>\n");
        for item in &breakdown.reimbursements {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td class=\"amount\">{}</td></tr>\n",
                clean_text(&item.description),
                item.category.label(),
                format_long_date(item.date),
                money(item.amount)
            ));
        }
        html.push_str(&format!(
            "<tr class=\"total\"><td colspan=\"3\">Total Reimbursements</td><td class=\"amount\">{}</td></tr>\n",
            money(breakdown.totals.reimbursements)
        ));
        html.push_str("</table>\n</section>\n");
    }

    html.push_str("<section>\n<h2>Grand Total</h2>\n<table>\n");
    html.push_str(&format!(
        "<tr><td>Salary</td><td class=\"amount\">{}</td></tr>\n",
        money(breakdown.totals.total_salary)
    ));
    html.push_str(&format!(
        "<tr><td>Reimbursements</td><td class=\"amount\">{}</td></tr>\n",
        money(breakdown.totals.reimbursements)
    ));
    html.push_str(&format!(
        "<tr class=\"total\"><td>TOTAL</td><td class=\"amount\">{}</td></tr>\n",
        money(breakdown.totals.grand_total)
    ));
    html.push_str("</table>\n</section>\n");

    html.push_str(&format!(
        "<footer>{} - {}</footer>\n</body>\n</html>\n",
        clean_text(&breakdown.organization),
        clean_text(&breakdown.title)
    ));

    html
}
