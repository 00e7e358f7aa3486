//! Engine configuration.

use crate::whitening::HashAlgorithm;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Policy for batches whose distribution is degenerate (all-ones or
/// all-zeros, entropy undefined).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "policy", content = "entropy")]
pub enum DegeneratePolicy {
    /// Skip whitening for the batch and propagate the error.
    Skip,
    /// Substitute a floor entropy estimate and whiten anyway.
    Floor(f64),
}

impl Default for DegeneratePolicy {
    fn default() -> Self {
        Self::Skip
    }
}

/// Configuration for the entropy engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Hash algorithm used for whitening.
    #[serde(default)]
    pub algorithm: HashAlgorithm,
    /// Handling of degenerate batches.
    #[serde(default)]
    pub degenerate_policy: DegeneratePolicy,
    /// Cap on candidate draws per dice roll.
    #[serde(default = "default_rejection_budget")]
    pub rejection_budget: usize,
}

fn default_rejection_budget() -> usize {
    crate::consume::DEFAULT_REJECTION_BUDGET
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::default(),
            degenerate_policy: DegeneratePolicy::default(),
            rejection_budget: default_rejection_budget(),
        }
    }
}

impl EngineConfig {
    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rejection_budget == 0 {
            return Err(ConfigError::InvalidRejectionBudget);
        }
        if let DegeneratePolicy::Floor(entropy) = self.degenerate_policy {
            if !(0.0..=1.0).contains(&entropy) {
                return Err(ConfigError::InvalidFloorEntropy(entropy));
            }
        }
        Ok(())
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: EngineConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("rejection budget must be at least 1")]
    InvalidRejectionBudget,
    #[error("floor entropy {0} outside [0, 1]")]
    InvalidFloorEntropy(f64),
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}
