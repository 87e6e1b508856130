//! HTTP API module for the salary calculator.
//!
//! This module provides the REST endpoints: a stateless calculation, rate
//! lookup, and session endpoints backed by an in-memory [`Ledger`].
//!
//! [`Ledger`]: crate::ledger::Ledger

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CalculationRequest, ExportQuery, FormatQuery, OvertimeRequest, PeriodQuery, ProjectRequest,
    ReimbursementRequest,
};
pub use response::{
    ApiError, ApiErrorResponse, OvertimeResponse, ProjectListResponse, RatesResponse,
    ReimbursementListResponse, SalariesResponse,
};
pub use state::AppState;
