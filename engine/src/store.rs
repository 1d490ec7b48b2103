//! Balance persistence.
//!
//! The only durable state in the system: a single decimal value stored as
//! plain text. Loading is infallible: any failure (missing
//! file, unreadable medium, non-numeric content) logs a diagnostic and
//! falls back to [`DEFAULT_BALANCE`]. Saving can fail, and that failure is
//! fatal only to the save action itself.

use parlor_types::DEFAULT_BALANCE;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Default balance file, relative to the working directory.
pub const BALANCE_FILE: &str = "balance.txt";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write balance file: {0}")]
    Write(#[from] io::Error),
}

/// Loads and saves the persisted balance.
pub struct BalanceStore {
    path: PathBuf,
}

impl Default for BalanceStore {
    fn default() -> Self {
        Self::new(BALANCE_FILE)
    }
}

impl BalanceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the stored balance.
    ///
    /// Never fails: malformed or missing storage yields
    /// [`DEFAULT_BALANCE`] and a warning.
    pub fn load(&self) -> f64 {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    %err,
                    "could not load balance, starting with ${DEFAULT_BALANCE}"
                );
                return DEFAULT_BALANCE;
            }
        };
        match contents.trim().parse::<f64>() {
            Ok(balance) => balance,
            Err(_) => {
                warn!(
                    path = %self.path.display(),
                    "balance file is not a number, starting with ${DEFAULT_BALANCE}"
                );
                DEFAULT_BALANCE
            }
        }
    }

    /// Overwrite storage with the textual representation of `balance`.
    pub fn save(&self, balance: f64) -> Result<(), StoreError> {
        fs::write(&self.path, balance.to_string())?;
        Ok(())
    }
}
