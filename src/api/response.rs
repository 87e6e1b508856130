//! Response types for the salary calculator API.
//!
//! This module defines the JSON response bodies and the mapping from
//! [`SalaryError`] to HTTP error responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::SalaryError;
use crate::models::{
    MonthInfo, MonthlyRates, Project, ReimbursementItem, SalaryCalculation, SalaryTotals,
};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<SalaryError> for ApiErrorResponse {
    fn from(error: SalaryError) -> Self {
        let message = error.to_string();
        match error {
            SalaryError::ConfigNotFound { .. } | SalaryError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            SalaryError::InvalidDate { .. } | SalaryError::InvalidMonth { .. } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "INVALID_PERIOD",
                    message,
                    "Dates use YYYY-MM-DD and month selections use YYYY-MM",
                ))
            }
            SalaryError::NoWorkingDays { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "NO_WORKING_DAYS",
                    message,
                    "Daily and hourly rates are undefined for a period without weekdays",
                ),
            ),
            SalaryError::ProjectNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("PROJECT_NOT_FOUND", message),
            },
            SalaryError::ReimbursementNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("REIMBURSEMENT_NOT_FOUND", message),
            },
            SalaryError::InvalidPosition { .. } => {
                ApiErrorResponse::bad_request(ApiError::validation_error(message))
            }
            SalaryError::InvalidReimbursement { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_REIMBURSEMENT", message))
            }
            SalaryError::InvalidOvertime { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_OVERTIME", message))
            }
            SalaryError::ExportError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("EXPORT_ERROR", "Export failed", message),
            },
        }
    }
}

impl From<JsonRejection> for ApiErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        let error = match rejection {
            JsonRejection::JsonDataError(err) => {
                let body_text = err.body_text();
                if body_text.contains("missing field") {
                    ApiError::validation_error(body_text)
                } else {
                    ApiError::malformed_json(body_text)
                }
            }
            JsonRejection::JsonSyntaxError(err) => {
                ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
            }
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
            }
            _ => ApiError::malformed_json("Failed to parse request body"),
        };
        ApiErrorResponse::bad_request(error)
    }
}

impl From<QueryRejection> for ApiErrorResponse {
    fn from(rejection: QueryRejection) -> Self {
        ApiErrorResponse::bad_request(ApiError::new("INVALID_QUERY", rejection.body_text()))
    }
}

impl From<PathRejection> for ApiErrorResponse {
    fn from(rejection: PathRejection) -> Self {
        ApiErrorResponse::bad_request(ApiError::new("INVALID_ID", rejection.body_text()))
    }
}

/// Body of `GET /rates`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatesResponse {
    /// The selected month.
    pub month: MonthInfo,
    /// Rates for both tiers.
    pub rates: MonthlyRates,
}

/// Body of `GET /salaries`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalariesResponse {
    /// The selected month.
    pub month: MonthInfo,
    /// Rates for both tiers.
    pub rates: MonthlyRates,
    /// One calculation per active project.
    pub calculations: Vec<SalaryCalculation>,
    /// Column totals and grand total.
    pub totals: SalaryTotals,
}

/// Body of `GET /projects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectListResponse {
    /// Every project, retired ones included.
    pub projects: Vec<Project>,
    /// The position the next project will receive.
    pub next_position: u32,
    /// True once the premium project has been removed.
    pub premium_rate_lost: bool,
}

/// Body of `GET /reimbursements`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReimbursementListResponse {
    /// Every reimbursement item.
    pub reimbursements: Vec<ReimbursementItem>,
    /// Sum of all amounts.
    pub total: Decimal,
}

/// Body of `PUT /overtime`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeResponse {
    /// The stored overtime hours.
    pub overtime_hours: Decimal,
}
