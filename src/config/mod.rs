//! Configuration loading and management for the salary calculator.
//!
//! This module loads the salary policy (organization name, currency symbol,
//! and the monthly amounts for both tiers) from a YAML file. Every field has
//! a built-in default, so the calculator works without any file.
//!
//! # Example
//!
//! ```no_run
//! use salary_calculator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded policy for: {}", config.config().organization);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, POLICY_FILE_NAME};
pub use types::{
    DEFAULT_PREMIUM_MONTHLY_RATE, DEFAULT_STANDARD_MONTHLY_RATE, PolicyConfig, RatePolicy,
};
