//! Session ledger of projects and reimbursements.
//!
//! The [`Ledger`] is the only mutable state in the crate. Every command
//! consumes the ledger and hands back a new one, so callers swap the whole
//! value and the calculators only ever see a consistent snapshot.
//!
//! Positions are handed out from a counter that starts at 1 and never goes
//! back. Removing the position-1 project therefore leaves the premium rate
//! unreachable for the rest of the session.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_all_project_salaries, summarize};
use crate::error::{SalaryError, SalaryResult};
use crate::models::{
    MonthlyRates, PREMIUM_POSITION, Project, ProjectDraft, ReimbursementDraft, ReimbursementItem,
    SalaryCalculation, SalaryTotals,
};

/// Projects, reimbursements, and premium overtime for one session.
///
/// # Example
///
/// ```
/// use salary_calculator::ledger::Ledger;
/// use salary_calculator::models::{ProjectDraft, RateTier};
/// use chrono::NaiveDate;
///
/// let draft = |name: &str| ProjectDraft {
///     name: name.to_string(),
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
/// };
///
/// let (ledger, first) = Ledger::new().add_project(draft("Alpha"));
/// let (ledger, _) = ledger.add_project(draft("Beta"));
/// let ledger = ledger.remove_project(first).unwrap();
///
/// assert!(ledger.premium_rate_lost());
/// assert_eq!(ledger.projects()[0].tier(), RateTier::Standard);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ledger {
    projects: Vec<Project>,
    reimbursements: Vec<ReimbursementItem>,
    next_position: u32,
    overtime_hours: Decimal,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            projects: Vec::new(),
            reimbursements: Vec::new(),
            next_position: PREMIUM_POSITION,
            overtime_hours: Decimal::ZERO,
        }
    }
}

impl Ledger {
    /// Creates an empty ledger whose first project will be premium.
    pub fn new() -> Self {
        Self::default()
    }

    /// All projects, retired ones included, in creation order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Projects that take part in salary calculations.
    pub fn active_projects(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.is_active()).collect()
    }

    /// Looks up a project by id.
    pub fn project(&self, id: Uuid) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// All reimbursement items in entry order.
    pub fn reimbursements(&self) -> &[ReimbursementItem] {
        &self.reimbursements
    }

    /// Looks up a reimbursement by id.
    pub fn reimbursement(&self, id: Uuid) -> Option<&ReimbursementItem> {
        self.reimbursements.iter().find(|r| r.id == id)
    }

    /// Overtime hours billed on the premium project.
    pub fn overtime_hours(&self) -> Decimal {
        self.overtime_hours
    }

    /// The position the next created project will receive.
    pub fn next_position(&self) -> u32 {
        self.next_position
    }

    /// True once a premium project has existed and has been removed.
    pub fn premium_rate_lost(&self) -> bool {
        self.next_position > PREMIUM_POSITION
            && !self.projects.iter().any(|p| p.position == PREMIUM_POSITION)
    }

    /// Creates a project at the next position and returns its id.
    pub fn add_project(mut self, draft: ProjectDraft) -> (Self, Uuid) {
        let project = Project {
            id: Uuid::new_v4(),
            name: draft.name,
            start_date: draft.start_date,
            end_date: draft.end_date,
            position: self.next_position,
            disbanded: false,
        };
        let id = project.id;

        info!(project_id = %id, position = project.position, "Project created");

        self.next_position = self.next_position.saturating_add(1);
        self.projects.push(project);
        (self, id)
    }

    /// Replaces a project's name and dates; id, position, and status stay.
    pub fn edit_project(mut self, id: Uuid, draft: ProjectDraft) -> SalaryResult<Self> {
        let project = self.project_mut(id)?;
        project.name = draft.name;
        project.start_date = draft.start_date;
        project.end_date = draft.end_date;
        Ok(self)
    }

    /// Deletes a project outright.
    pub fn remove_project(mut self, id: Uuid) -> SalaryResult<Self> {
        let index = self
            .projects
            .iter()
            .position(|p| p.id == id)
            .ok_or(SalaryError::ProjectNotFound { id })?;
        let removed = self.projects.remove(index);

        if removed.position == PREMIUM_POSITION {
            warn!(
                project_id = %id,
                "Premium project removed; premium rate unavailable for the rest of the session"
            );
        } else {
            info!(project_id = %id, position = removed.position, "Project removed");
        }
        Ok(self)
    }

    /// Excludes a project from calculations while keeping it listed.
    pub fn retire_project(self, id: Uuid) -> SalaryResult<Self> {
        self.set_disbanded(id, true)
    }

    /// Brings a retired project back into calculations.
    pub fn reactivate_project(self, id: Uuid) -> SalaryResult<Self> {
        self.set_disbanded(id, false)
    }

    /// Records a reimbursement and returns its id.
    pub fn add_reimbursement(mut self, draft: ReimbursementDraft) -> SalaryResult<(Self, Uuid)> {
        validate_reimbursement(&draft.description, draft.amount)?;
        let id = Uuid::new_v4();
        self.reimbursements.push(ReimbursementItem {
            id,
            description: draft.description,
            amount: draft.amount,
            date: draft.date,
            category: draft.category,
        });
        Ok((self, id))
    }

    /// Replaces every field of a reimbursement except its id.
    pub fn edit_reimbursement(mut self, id: Uuid, draft: ReimbursementDraft) -> SalaryResult<Self> {
        validate_reimbursement(&draft.description, draft.amount)?;
        let item = self
            .reimbursements
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(SalaryError::ReimbursementNotFound { id })?;
        item.description = draft.description;
        item.amount = draft.amount;
        item.date = draft.date;
        item.category = draft.category;
        Ok(self)
    }

    /// Deletes a reimbursement.
    pub fn remove_reimbursement(mut self, id: Uuid) -> SalaryResult<Self> {
        let before = self.reimbursements.len();
        self.reimbursements.retain(|r| r.id != id);
        if self.reimbursements.len() == before {
            return Err(SalaryError::ReimbursementNotFound { id });
        }
        Ok(self)
    }

    /// Sets the overtime hours billed on the premium project.
    ///
    /// Hours must lie in `0..=MAX_OVERTIME_HOURS`.
    pub fn with_overtime_hours(mut self, hours: Decimal) -> SalaryResult<Self> {
        validate_overtime_hours(hours)?;
        self.overtime_hours = hours;
        Ok(self)
    }

    /// Calculates salaries for the active projects at the given rates.
    pub fn salaries(&self, rates: &MonthlyRates) -> Vec<SalaryCalculation> {
        calculate_all_project_salaries(
            &self.projects,
            rates.premium_hourly_rate,
            rates.standard_hourly_rate,
            self.overtime_hours,
        )
    }

    /// Calculates salaries and reduces them with the reimbursements.
    pub fn totals(&self, rates: &MonthlyRates) -> SalaryTotals {
        summarize(&self.salaries(rates), &self.reimbursements)
    }

    fn project_mut(&mut self, id: Uuid) -> SalaryResult<&mut Project> {
        self.projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(SalaryError::ProjectNotFound { id })
    }

    fn set_disbanded(mut self, id: Uuid, disbanded: bool) -> SalaryResult<Self> {
        let project = self.project_mut(id)?;
        project.disbanded = disbanded;
        info!(project_id = %id, disbanded, "Project status changed");
        Ok(self)
    }
}

/// Upper bound on overtime hours: every hour of a 31-day month.
pub const MAX_OVERTIME_HOURS: Decimal = Decimal::from_parts(744, 0, 0, false, 0);

/// Upper bound on a single reimbursement amount.
pub const MAX_REIMBURSEMENT_AMOUNT: Decimal =
    Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Rejects overtime outside `0..=MAX_OVERTIME_HOURS`.
pub(crate) fn validate_overtime_hours(hours: Decimal) -> SalaryResult<()> {
    if hours < Decimal::ZERO || hours > MAX_OVERTIME_HOURS {
        return Err(SalaryError::InvalidOvertime { hours });
    }
    Ok(())
}

/// Rejects blank descriptions and amounts outside `0..=MAX_REIMBURSEMENT_AMOUNT`.
pub(crate) fn validate_reimbursement(description: &str, amount: Decimal) -> SalaryResult<()> {
    if description.trim().is_empty() {
        return Err(SalaryError::InvalidReimbursement {
            field: "description".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    if amount < Decimal::ZERO {
        return Err(SalaryError::InvalidReimbursement {
            field: "amount".to_string(),
            message: "must not be negative".to_string(),
        });
    }
    if amount > MAX_REIMBURSEMENT_AMOUNT {
        return Err(SalaryError::InvalidReimbursement {
            field: "amount".to_string(),
            message: format!("must not exceed {}", MAX_REIMBURSEMENT_AMOUNT),
        });
    }
    Ok(())
}

/// Rejects a project list with a zero or repeated position.
pub(crate) fn validate_positions(projects: &[Project]) -> SalaryResult<()> {
    let mut seen = HashSet::with_capacity(projects.len());
    for project in projects {
        if project.position == 0 {
            return Err(SalaryError::InvalidPosition {
                position: 0,
                message: "positions start at 1".to_string(),
            });
        }
        if !seen.insert(project.position) {
            return Err(SalaryError::InvalidPosition {
                position: project.position,
                message: "already held by another project".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::monthly_rates;
    use crate::config::RatePolicy;
    use crate::models::{RateTier, ReimbursementCategory};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn draft(name: &str) -> ProjectDraft {
        ProjectDraft {
            name: name.to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        }
    }

    fn expense(description: &str, amount: &str) -> ReimbursementDraft {
        ReimbursementDraft {
            description: description.to_string(),
            amount: dec(amount),
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            category: ReimbursementCategory::Meals,
        }
    }

    fn three_projects() -> (Ledger, [Uuid; 3]) {
        let (ledger, a) = Ledger::new().add_project(draft("Alpha"));
        let (ledger, b) = ledger.add_project(draft("Beta"));
        let (ledger, c) = ledger.add_project(draft("Gamma"));
        (ledger, [a, b, c])
    }

    #[test]
    fn test_positions_are_sequential_from_one() {
        let (ledger, _) = three_projects();
        let positions: Vec<u32> = ledger.projects().iter().map(|p| p.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
        assert_eq!(ledger.next_position(), 4);
        assert!(ledger.projects().iter().all(|p| p.is_active()));
    }

    #[test]
    fn test_positions_are_never_reused_after_removal() {
        let (ledger, [_, b, _]) = three_projects();
        let ledger = ledger.remove_project(b).unwrap();
        let (ledger, d) = ledger.add_project(draft("Delta"));
        assert_eq!(ledger.project(d).unwrap().position, 4);
    }

    #[test]
    fn test_edit_keeps_id_and_position() {
        let (ledger, [a, _, _]) = three_projects();
        let edited = ProjectDraft {
            name: "Alpha Renamed".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        };

        let ledger = ledger.edit_project(a, edited).unwrap();
        let project = ledger.project(a).unwrap();

        assert_eq!(project.name, "Alpha Renamed");
        assert_eq!(project.position, 1);
        assert_eq!(project.tier(), RateTier::Premium);
        assert_eq!(ledger.projects()[0].id, a);
    }

    #[test]
    fn test_edit_unknown_project_fails() {
        let id = Uuid::new_v4();
        match Ledger::new().edit_project(id, draft("Ghost")) {
            Err(SalaryError::ProjectNotFound { id: missing }) => assert_eq!(missing, id),
            other => panic!("Expected ProjectNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_removing_premium_project_loses_premium_rate() {
        let (ledger, [a, _, _]) = three_projects();
        assert!(!ledger.premium_rate_lost());

        let ledger = ledger.remove_project(a).unwrap();
        let rates = monthly_rates(20, &RatePolicy::default()).unwrap();
        let ledger = ledger.with_overtime_hours(dec("5")).unwrap();
        let calcs = ledger.salaries(&rates);

        assert!(ledger.premium_rate_lost());
        assert_eq!(calcs.len(), 2);
        assert!(calcs.iter().all(|c| c.tier == RateTier::Standard));
        assert!(calcs.iter().all(|c| c.ot_pay == Decimal::ZERO));
    }

    #[test]
    fn test_retire_and_reactivate_keep_premium() {
        let (ledger, [a, _, _]) = three_projects();
        let rates = monthly_rates(20, &RatePolicy::default()).unwrap();

        let ledger = ledger.retire_project(a).unwrap();
        assert_eq!(ledger.projects().len(), 3);
        assert_eq!(ledger.active_projects().len(), 2);
        assert!(ledger.salaries(&rates).iter().all(|c| c.tier == RateTier::Standard));
        assert!(!ledger.premium_rate_lost());

        let ledger = ledger.reactivate_project(a).unwrap();
        let calcs = ledger.salaries(&rates);
        assert_eq!(calcs.len(), 3);
        assert_eq!(calcs[0].tier, RateTier::Premium);
    }

    #[test]
    fn test_remove_unknown_project_fails() {
        let (ledger, _) = three_projects();
        assert!(ledger.remove_project(Uuid::new_v4()).is_err());
    }

    #[test]
    fn test_commands_leave_original_value_untouched() {
        let (ledger, [a, _, _]) = three_projects();
        let snapshot = ledger.clone();
        let retired = ledger.retire_project(a).unwrap();
        assert!(snapshot.project(a).unwrap().is_active());
        assert!(!retired.project(a).unwrap().is_active());
    }

    #[test]
    fn test_reimbursement_lifecycle() {
        let ledger = Ledger::new();
        let (ledger, lunch) = ledger.add_reimbursement(expense("Lunch", "150.00")).unwrap();
        let (ledger, _) = ledger.add_reimbursement(expense("Dinner", "75.50")).unwrap();
        let (ledger, _) = ledger.add_reimbursement(expense("Taxi", "320.25")).unwrap();

        let rates = monthly_rates(20, &RatePolicy::default()).unwrap();
        assert_eq!(ledger.totals(&rates).reimbursements, dec("545.75"));

        let ledger = ledger
            .edit_reimbursement(lunch, expense("Team lunch", "100.00"))
            .unwrap();
        assert_eq!(ledger.reimbursement(lunch).unwrap().description, "Team lunch");
        assert_eq!(ledger.totals(&rates).reimbursements, dec("495.75"));

        let ledger = ledger.remove_reimbursement(lunch).unwrap();
        assert_eq!(ledger.reimbursements().len(), 2);
        assert!(ledger.remove_reimbursement(lunch).is_err());
    }

    #[test]
    fn test_reimbursement_validation() {
        let blank = Ledger::new().add_reimbursement(expense("   ", "10"));
        assert!(matches!(
            blank,
            Err(SalaryError::InvalidReimbursement { ref field, .. }) if field == "description"
        ));

        let negative = Ledger::new().add_reimbursement(expense("Refund", "-1"));
        assert!(matches!(
            negative,
            Err(SalaryError::InvalidReimbursement { ref field, .. }) if field == "amount"
        ));
    }

    #[test]
    fn test_overtime_hours() {
        let ledger = Ledger::new().with_overtime_hours(dec("6")).unwrap();
        assert_eq!(ledger.overtime_hours(), dec("6"));
        assert!(Ledger::new().with_overtime_hours(dec("-1")).is_err());
    }

    #[test]
    fn test_totals_include_premium_overtime() {
        let (ledger, _) = three_projects();
        let ledger = ledger.with_overtime_hours(dec("2")).unwrap();
        let rates = monthly_rates(20, &RatePolicy::default()).unwrap();

        let totals = ledger.totals(&rates);

        // 40h at 125 + 2 x 40h at 62.5 + 2h overtime at 125
        assert_eq!(totals.regular_pay, dec("10000"));
        assert_eq!(totals.ot_pay, dec("250"));
        assert_eq!(totals.total_salary, dec("10250"));
    }

    #[test]
    fn test_overtime_above_bound_rejected() {
        assert!(Ledger::new().with_overtime_hours(MAX_OVERTIME_HOURS).is_ok());
        match Ledger::new().with_overtime_hours(Decimal::MAX) {
            Err(SalaryError::InvalidOvertime { hours }) => assert_eq!(hours, Decimal::MAX),
            other => panic!("Expected InvalidOvertime, got {:?}", other),
        }
    }

    #[test]
    fn test_totals_at_upper_bounds_do_not_overflow() {
        let (ledger, _) = three_projects();
        let ledger = ledger.with_overtime_hours(MAX_OVERTIME_HOURS).unwrap();
        let (ledger, _) = ledger
            .add_reimbursement(expense("Hotel", "1000000000"))
            .unwrap();
        let (ledger, _) = ledger
            .add_reimbursement(expense("Flights", "1000000000"))
            .unwrap();
        let rates = monthly_rates(22, &RatePolicy::default()).unwrap();

        let totals = ledger.totals(&rates);
        assert_eq!(totals.reimbursements, dec("2000000000"));
        assert!(totals.grand_total > totals.reimbursements);
    }

    #[test]
    fn test_reimbursement_above_bound_rejected() {
        let result =
            Ledger::new().add_reimbursement(expense("Yacht", "50000000000000000000000000000"));
        assert!(matches!(
            result,
            Err(SalaryError::InvalidReimbursement { ref field, .. }) if field == "amount"
        ));
    }

    #[test]
    fn test_validate_positions() {
        let project = |position: u32| Project {
            id: Uuid::new_v4(),
            name: format!("Project {}", position),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            position,
            disbanded: false,
        };

        assert!(validate_positions(&[project(1), project(3)]).is_ok());
        assert!(matches!(
            validate_positions(&[project(1), project(1)]),
            Err(SalaryError::InvalidPosition { position: 1, .. })
        ));
        assert!(matches!(
            validate_positions(&[project(0)]),
            Err(SalaryError::InvalidPosition { position: 0, .. })
        ));
    }
}
