//! Error types for the salary calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the calculator, ledger, and configuration layer can report.
//! The pure calculators never fail; errors come from parsing, configuration,
//! and the session ledger.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the salary calculator.
///
/// # Example
///
/// ```
/// use salary_calculator::error::SalaryError;
///
/// let error = SalaryError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum SalaryError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A date or month string could not be parsed.
    #[error("Invalid date '{value}': {message}")]
    InvalidDate {
        /// The text that failed to parse.
        value: String,
        /// The underlying parser message.
        message: String,
    },

    /// A zero-based month index outside 0..=11 was supplied.
    #[error("Invalid month index {month} for year {year}")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The zero-based month index.
        month: u32,
    },

    /// The selected period has no working days, so no daily rate exists.
    #[error("Cannot derive rates from a period with {working_days} working days")]
    NoWorkingDays {
        /// The working-day count that was supplied.
        working_days: u32,
    },

    /// No project with the given id exists in the ledger.
    #[error("Project not found: {id}")]
    ProjectNotFound {
        /// The id that was looked up.
        id: Uuid,
    },

    /// No reimbursement with the given id exists in the ledger.
    #[error("Reimbursement not found: {id}")]
    ReimbursementNotFound {
        /// The id that was looked up.
        id: Uuid,
    },

    /// A project list carried a zero or repeated position.
    #[error("Invalid project position {position}: {message}")]
    InvalidPosition {
        /// The offending position.
        position: u32,
        /// Why the position was rejected.
        message: String,
    },

    /// A reimbursement item was rejected.
    #[error("Invalid reimbursement field '{field}': {message}")]
    InvalidReimbursement {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Overtime hours must not be negative.
    #[error("Invalid overtime hours: {hours}")]
    InvalidOvertime {
        /// The rejected value.
        hours: rust_decimal::Decimal,
    },

    /// A breakdown could not be rendered.
    #[error("Export failed: {message}")]
    ExportError {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return SalaryError.
pub type SalaryResult<T> = Result<T, SalaryError>;
