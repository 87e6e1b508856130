//! Core data models for the salary calculator.
//!
//! This module contains all the domain models used throughout the crate.

mod project;
mod reimbursement;
mod salary;

pub use project::{PREMIUM_POSITION, Project, ProjectDraft, RateTier};
pub use reimbursement::{ReimbursementCategory, ReimbursementDraft, ReimbursementItem};
pub use salary::{MonthInfo, MonthlyRates, SalaryCalculation, SalaryTotals};
