//! Two-tier project salary calculator
//!
//! This crate turns a list of projects into a monthly salary breakdown. The
//! first project created (position 1) is paid at the premium rate and may
//! carry overtime; every other project is paid at the standard rate. Rates
//! are derived from the working days of the selected month, and
//! reimbursements are added on top of the salary total.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
