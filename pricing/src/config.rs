use std::{
    env,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use crate::{
    artifact::DEFAULT_MODEL_PATH,
    error::{PricingErr, Result},
};

pub const MODEL_PATH_VAR: &str = "HOUSE_PRICE_MODEL";
pub const SEED_VAR: &str = "HOUSE_PRICE_SEED";
pub const ROWS_VAR: &str = "HOUSE_PRICE_ROWS";

/// Size of the synthetic training set when none is configured.
pub const DEFAULT_ROWS: usize = 100;

/// Where the model artifact lives and how to synthesize one if it's missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionConfig {
    path: PathBuf,
    rows: NonZeroUsize,
    seed: Option<u64>,
}

impl ProvisionConfig {
    /// Creates a new provisioning configuration.
    ///
    /// # Args
    /// * `path` - Location of the model artifact.
    /// * `rows` - Number of synthetic samples to train on when the artifact is missing.
    /// * `seed` - Optional seed for the synthetic samples; `None` seeds from the OS.
    pub fn new(path: impl Into<PathBuf>, rows: NonZeroUsize, seed: Option<u64>) -> Self {
        Self {
            path: path.into(),
            rows,
            seed,
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`PricingErr::InvalidConfig`] if a variable is set but can't be parsed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, falling back to defaults for
    /// unset variables.
    ///
    /// # Errors
    /// Returns [`PricingErr::InvalidConfig`] if a variable is set but can't be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = lookup(MODEL_PATH_VAR)
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL_PATH.to_string());

        let seed = match lookup(SEED_VAR) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                PricingErr::InvalidConfig(format!("{SEED_VAR}='{raw}': {e}"))
            })?),
            None => None,
        };

        let rows = match lookup(ROWS_VAR) {
            Some(raw) => raw.trim().parse::<NonZeroUsize>().map_err(|e| {
                PricingErr::InvalidConfig(format!("{ROWS_VAR}='{raw}': {e}"))
            })?,
            None => NonZeroUsize::new(DEFAULT_ROWS).ok_or_else(|| {
                PricingErr::InvalidConfig("default row count must be non-zero".into())
            })?,
        };

        Ok(Self::new(path, rows, seed))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rows(&self) -> usize {
        self.rows.get()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
