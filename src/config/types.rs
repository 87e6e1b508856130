//! Configuration types for the salary policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `policy.yaml`.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Premium monthly amount used when no policy file overrides it.
pub const DEFAULT_PREMIUM_MONTHLY_RATE: Decimal = Decimal::from_parts(20000, 0, 0, false, 0);

/// Standard monthly amount used when no policy file overrides it.
pub const DEFAULT_STANDARD_MONTHLY_RATE: Decimal = Decimal::from_parts(10000, 0, 0, false, 0);

/// The monthly amounts for the two rate tiers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RatePolicy {
    /// Monthly amount for the premium (first-created) project.
    #[serde(default = "default_premium_monthly")]
    pub premium_monthly: Decimal,
    /// Monthly amount for every later project.
    #[serde(default = "default_standard_monthly")]
    pub standard_monthly: Decimal,
}

fn default_premium_monthly() -> Decimal {
    DEFAULT_PREMIUM_MONTHLY_RATE
}

fn default_standard_monthly() -> Decimal {
    DEFAULT_STANDARD_MONTHLY_RATE
}

impl Default for RatePolicy {
    fn default() -> Self {
        Self {
            premium_monthly: default_premium_monthly(),
            standard_monthly: default_standard_monthly(),
        }
    }
}

/// The complete policy loaded from `policy.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PolicyConfig {
    /// Organization name printed at the top of breakdowns.
    #[serde(default = "default_organization")]
    pub organization: String,
    /// Report title printed under the organization.
    #[serde(default = "default_title")]
    pub title: String,
    /// Currency prefix for every rendered amount.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Monthly amounts for both tiers.
    #[serde(default)]
    pub rates: RatePolicy,
}

fn default_organization() -> String {
    "Rooche Digital Representative".to_string()
}

fn default_title() -> String {
    "Salary Calculator".to_string()
}

fn default_currency_symbol() -> String {
    "₱".to_string()
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            organization: default_organization(),
            title: default_title(),
            currency_symbol: default_currency_symbol(),
            rates: RatePolicy::default(),
        }
    }
}
