//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the salary
//! policy from a YAML file.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::{SalaryError, SalaryResult};

use super::types::{PolicyConfig, RatePolicy};

/// The file name looked up inside a configuration directory.
pub const POLICY_FILE_NAME: &str = "policy.yaml";

/// Loads and provides access to the salary policy.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── policy.yaml   # Organization, currency symbol, monthly rates
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_calculator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Premium monthly: {}", loader.rates().premium_monthly);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PolicyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if `policy.yaml` is
    /// missing (`ConfigNotFound`) or is not valid YAML (`ConfigParseError`).
    pub fn load<P: AsRef<Path>>(path: P) -> SalaryResult<Self> {
        let policy_path = path.as_ref().join(POLICY_FILE_NAME);
        let config = Self::load_yaml::<PolicyConfig>(&policy_path)?;
        Ok(Self { config })
    }

    /// Loads configuration, using the built-in policy when `policy.yaml` is
    /// absent.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> SalaryResult<Self> {
        match Self::load(path) {
            Err(SalaryError::ConfigNotFound { path }) => {
                warn!(path = %path, "Policy file not found; using built-in salary policy");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Wraps an already-built policy.
    pub fn from_config(config: PolicyConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> SalaryResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| SalaryError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| SalaryError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying policy.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Returns the monthly amounts for both tiers.
    pub fn rates(&self) -> &RatePolicy {
        &self.config.rates
    }

    /// Returns the currency prefix.
    pub fn currency_symbol(&self) -> &str {
        &self.config.currency_symbol
    }
}
