use super::errors::{AprioriError, AprioriResult};
use super::ingest::IngestOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MIN_SUPPORT: usize = 2;
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.5;
pub const DEFAULT_DATA_PERCENTAGE: f64 = 1.0;

/// Parameters of one mining run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// Absolute basket count an itemset must reach.
    pub min_support: usize,
    /// Fraction in `[0, 1]`.
    pub min_confidence: f64,
    /// Leading fraction of the baskets to mine, in `[0, 1]`.
    pub data_percentage: f64,
    pub ingest: IngestOptions,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            data_percentage: DEFAULT_DATA_PERCENTAGE,
            ingest: IngestOptions::default(),
        }
    }
}

impl MiningConfig {
    pub fn from_toml_str(source: &str) -> AprioriResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| AprioriError::Config { reason: e.to_string() })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> AprioriResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> AprioriResult<()> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(AprioriError::InvalidConfidence { value: self.min_confidence });
        }
        if !(0.0..=1.0).contains(&self.data_percentage) {
            return Err(AprioriError::InvalidPercentage { value: self.data_percentage });
        }
        if self.ingest.transaction_column.is_empty() || self.ingest.item_column.is_empty() {
            return Err(AprioriError::Config { reason: "column names must not be empty".into() });
        }
        Ok(())
    }
}
