//! Request types for the salary calculator API.
//!
//! This module defines the JSON bodies and query strings the endpoints
//! accept. Session endpoints take [`ProjectDraft`] and
//! [`ReimbursementDraft`] bodies directly.
//!
//! [`ProjectDraft`]: crate::models::ProjectDraft
//! [`ReimbursementDraft`]: crate::models::ReimbursementDraft

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::export::ExportFormat;
use crate::models::{Project, ReimbursementCategory, ReimbursementItem};

/// Request body for the stateless `/calculate` endpoint.
///
/// Carries a complete project list with positions already assigned, so the
/// result does not depend on the session ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The month whose working days set the rates, as `YYYY-MM`.
    /// Defaults to the current month.
    #[serde(default)]
    pub period: Option<String>,
    /// The projects to calculate.
    pub projects: Vec<ProjectRequest>,
    /// Reimbursement items to add to the grand total.
    #[serde(default)]
    pub reimbursements: Vec<ReimbursementRequest>,
    /// Overtime hours billed on the premium project.
    #[serde(default)]
    pub overtime_hours: Decimal,
}

/// A project in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRequest {
    /// Optional identifier; one is generated when absent.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Display name.
    pub name: String,
    /// First billed date (inclusive).
    pub start_date: NaiveDate,
    /// Last billed date (inclusive).
    pub end_date: NaiveDate,
    /// Creation-order position; 1 is the premium project.
    pub position: u32,
    /// Whether the project is retired.
    #[serde(default)]
    pub disbanded: bool,
}

/// A reimbursement in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReimbursementRequest {
    /// Optional identifier; one is generated when absent.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Free-text description.
    pub description: String,
    /// Amount claimed.
    pub amount: Decimal,
    /// Date the expense was incurred.
    pub date: NaiveDate,
    /// Expense category.
    pub category: ReimbursementCategory,
}

/// Body for `PUT /overtime`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimeRequest {
    /// Overtime hours billed on the premium project.
    pub hours: Decimal,
}

/// Query string selecting a month.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeriodQuery {
    /// The month as `YYYY-MM`; the current month when absent.
    #[serde(default)]
    pub period: Option<String>,
}

/// Query string selecting an output format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormatQuery {
    /// The output format.
    #[serde(default)]
    pub format: ExportFormat,
}

/// Query string selecting a month and an output format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportQuery {
    /// The month as `YYYY-MM`; the current month when absent.
    #[serde(default)]
    pub period: Option<String>,
    /// The output format.
    #[serde(default)]
    pub format: ExportFormat,
}

impl From<ProjectRequest> for Project {
    fn from(req: ProjectRequest) -> Self {
        Project {
            id: req.id.unwrap_or_else(Uuid::new_v4),
            name: req.name,
            start_date: req.start_date,
            end_date: req.end_date,
            position: req.position,
            disbanded: req.disbanded,
        }
    }
}

impl From<ReimbursementRequest> for ReimbursementItem {
    fn from(req: ReimbursementRequest) -> Self {
        ReimbursementItem {
            id: req.id.unwrap_or_else(Uuid::new_v4),
            description: req.description,
            amount: req.amount,
            date: req.date,
            category: req.category,
        }
    }
}
