//! The printable salary breakdown.
//!
//! A [`SalaryBreakdown`] gathers everything a report shows: the selected
//! month, the rates for both tiers, one entry per active project, the
//! reimbursements, and the totals. Renderers only format it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{calculate_all_project_salaries, ordinal, summarize};
use crate::config::PolicyConfig;
use crate::ledger::Ledger;
use crate::models::{
    MonthInfo, MonthlyRates, Project, ReimbursementItem, SalaryCalculation, SalaryTotals,
};

/// One active project with its salary calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectBreakdown {
    /// Ordinal label from the creation-order position, e.g. "2nd Project".
    pub label: String,
    /// The project as stored.
    pub project: Project,
    /// The project's salary calculation.
    pub calculation: SalaryCalculation,
}

/// A complete salary report for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Organization name for the header.
    pub organization: String,
    /// Report title for the footer.
    pub title: String,
    /// Currency prefix for every amount.
    pub currency_symbol: String,
    /// Date the report was produced.
    pub generated_on: NaiveDate,
    /// The month the rates were derived from.
    pub month: MonthInfo,
    /// Rates for both tiers.
    pub rates: MonthlyRates,
    /// Active projects in list order.
    pub projects: Vec<ProjectBreakdown>,
    /// Every reimbursement item.
    pub reimbursements: Vec<ReimbursementItem>,
    /// Column totals and grand total.
    pub totals: SalaryTotals,
}

impl SalaryBreakdown {
    /// Builds a breakdown from loose project and reimbursement lists.
    ///
    /// Retired projects are left out. Calculations are paired with their
    /// projects by the order the aggregate calculation preserves, so a
    /// retired project never shifts another project's figures.
    pub fn build(
        policy: &PolicyConfig,
        month: MonthInfo,
        rates: MonthlyRates,
        projects: &[Project],
        reimbursements: &[ReimbursementItem],
        overtime_hours: Decimal,
        generated_on: NaiveDate,
    ) -> Self {
        let calculations = calculate_all_project_salaries(
            projects,
            rates.premium_hourly_rate,
            rates.standard_hourly_rate,
            overtime_hours,
        );
        let totals = summarize(&calculations, reimbursements);

        let projects = projects
            .iter()
            .filter(|project| project.is_active())
            .zip(calculations)
            .map(|(project, calculation)| ProjectBreakdown {
                label: format!("{} Project", ordinal(project.position)),
                project: project.clone(),
                calculation,
            })
            .collect();

        Self {
            organization: policy.organization.clone(),
            title: policy.title.clone(),
            currency_symbol: policy.currency_symbol.clone(),
            generated_on,
            month,
            rates,
            projects,
            reimbursements: reimbursements.to_vec(),
            totals,
        }
    }

    /// Builds a breakdown of a session ledger.
    pub fn from_ledger(
        policy: &PolicyConfig,
        month: MonthInfo,
        rates: MonthlyRates,
        ledger: &Ledger,
        generated_on: NaiveDate,
    ) -> Self {
        Self::build(
            policy,
            month,
            rates,
            ledger.projects(),
            ledger.reimbursements(),
            ledger.overtime_hours(),
            generated_on,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{month_info_for_date, monthly_rates};
    use crate::models::{ProjectDraft, RateTier, ReimbursementCategory, ReimbursementDraft};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn project_draft(name: &str) -> ProjectDraft {
        ProjectDraft {
            name: name.to_string(),
            start_date: date("2024-01-01"),
            end_date: date("2024-01-05"),
        }
    }

    fn sample_ledger() -> (Ledger, uuid::Uuid) {
        let (ledger, _) = Ledger::new().add_project(project_draft("Alpha"));
        let (ledger, second) = ledger.add_project(project_draft("Beta"));
        let (ledger, _) = ledger.add_project(project_draft("Gamma"));
        let (ledger, _) = ledger
            .add_reimbursement(ReimbursementDraft {
                description: "Taxi".to_string(),
                amount: dec("150.00"),
                date: date("2024-01-02"),
                category: ReimbursementCategory::Transportation,
            })
            .unwrap();
        let ledger = ledger.with_overtime_hours(dec("4")).unwrap();
        (ledger, second)
    }

    fn build(ledger: &Ledger) -> SalaryBreakdown {
        let month = month_info_for_date(date("2024-01-01")).unwrap();
        let rates = monthly_rates(20, &PolicyConfig::default().rates).unwrap();
        SalaryBreakdown::from_ledger(
            &PolicyConfig::default(),
            month,
            rates,
            ledger,
            date("2024-01-31"),
        )
    }

    #[test]
    fn test_breakdown_lists_active_projects_with_ordinals() {
        let (ledger, _) = sample_ledger();
        let breakdown = build(&ledger);

        let labels: Vec<&str> = breakdown.projects.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["1st Project", "2nd Project", "3rd Project"]);
        assert_eq!(breakdown.projects[0].calculation.tier, RateTier::Premium);
    }

    #[test]
    fn test_retired_project_does_not_shift_pairing() {
        let (ledger, second) = sample_ledger();
        let ledger = ledger.retire_project(second).unwrap();
        let breakdown = build(&ledger);

        assert_eq!(breakdown.projects.len(), 2);
        for entry in &breakdown.projects {
            assert_eq!(entry.project.id, entry.calculation.project_id);
        }
        assert_eq!(breakdown.projects[1].label, "3rd Project");
        assert_eq!(breakdown.projects[1].project.name, "Gamma");
    }

    #[test]
    fn test_breakdown_totals() {
        let (ledger, _) = sample_ledger();
        let breakdown = build(&ledger);

        // 40h x 125 + 2 x 40h x 62.5 + 4h x 125
        assert_eq!(breakdown.totals.total_salary, dec("10500"));
        assert_eq!(breakdown.totals.reimbursements, dec("150.00"));
        assert_eq!(breakdown.totals.grand_total, dec("10650.00"));
        assert_eq!(breakdown.currency_symbol, "₱");
    }

    #[test]
    fn test_breakdown_serializes_to_json() {
        let (ledger, _) = sample_ledger();
        let json = serde_json::to_value(build(&ledger)).unwrap();
        assert_eq!(json["month"]["month_name"], "January 2024");
        assert_eq!(json["projects"][0]["label"], "1st Project");
        assert_eq!(json["generated_on"], "2024-01-31");
    }
}
