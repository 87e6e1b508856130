//! Application state for the salary calculator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers: the loaded policy and the session ledger.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ConfigLoader;
use crate::error::SalaryResult;
use crate::ledger::Ledger;

/// Shared application state.
///
/// The ledger lives behind a single lock. Commands run against a clone and
/// the result replaces the stored ledger only when the command succeeds.
#[derive(Clone)]
pub struct AppState {
    /// The loaded salary policy.
    config: Arc<ConfigLoader>,
    /// The in-memory session ledger.
    ledger: Arc<RwLock<Ledger>>,
}

impl AppState {
    /// Creates a new application state with an empty ledger.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_ledger(config, Ledger::new())
    }

    /// Creates a new application state around an existing ledger.
    pub fn with_ledger(config: ConfigLoader, ledger: Ledger) -> Self {
        Self {
            config: Arc::new(config),
            ledger: Arc::new(RwLock::new(ledger)),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a copy of the current ledger.
    pub async fn snapshot(&self) -> Ledger {
        self.ledger.read().await.clone()
    }

    /// Applies a ledger command and stores the resulting ledger.
    ///
    /// On error the stored ledger is left untouched.
    pub async fn update<T, F>(&self, command: F) -> SalaryResult<T>
    where
        F: FnOnce(Ledger) -> SalaryResult<(Ledger, T)>,
    {
        let mut ledger = self.ledger.write().await;
        let (next, value) = command(ledger.clone())?;
        *ledger = next;
        Ok(value)
    }
}
