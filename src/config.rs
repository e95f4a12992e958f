//! Scoring Configuration
//!
//! Factor weights and the advice threshold used when combining per-factor
//! scores. Defaults reproduce the published scoring rules; a JSON file can
//! override any subset of fields.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Environment variable naming a scoring config file
pub const CONFIG_ENV_VAR: &str = "IRIS_SCORER_CONFIG";

/// Allowed drift of the weight sum from 1.0
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Weight of each factor in the overall score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorWeights {
    pub temperature: f64,
    pub moisture: f64,
    pub soil: f64,
    pub light: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            temperature: 0.30,
            moisture: 0.30,
            soil: 0.20,
            light: 0.20,
        }
    }
}

impl FactorWeights {
    pub fn sum(&self) -> f64 {
        self.temperature + self.moisture + self.soil + self.light
    }

    fn as_array(&self) -> [(&'static str, f64); 4] {
        [
            ("temperature", self.temperature),
            ("moisture", self.moisture),
            ("soil", self.soil),
            ("light", self.light),
        ]
    }
}

/// Configuration for a [`SuitabilityScorer`](crate::suitability::SuitabilityScorer)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: FactorWeights,

    /// Factors scoring below this produce a recommendation and a challenge
    pub challenge_threshold: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: FactorWeights::default(),
            challenge_threshold: 70,
        }
    }
}

/// Invalid scoring configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("weight '{name}' must be a finite non-negative number, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("factor weights must sum to 1.0, got {0}")]
    WeightSum(f64),

    #[error("challenge threshold must be at most 100, got {0}")]
    Threshold(u8),
}

impl ScoringConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scoring config: {:?}", path))?;

        let config: ScoringConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse scoring config JSON: {:?}", path))?;

        config.validate()
            .with_context(|| format!("Invalid scoring config: {:?}", path))?;

        tracing::info!(
            "Loaded scoring config from {:?} (weights {:?}, threshold {})",
            path, config.weights, config.challenge_threshold
        );

        Ok(config)
    }

    /// Load from the file named by `IRIS_SCORER_CONFIG`, or use defaults
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in self.weights.as_array() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }

        let sum = self.weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightSum(sum));
        }

        if self.challenge_threshold > 100 {
            return Err(ConfigError::Threshold(self.challenge_threshold));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        let config = ScoringConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_relative_eq!(config.weights.sum(), 1.0, epsilon = 1e-12);
        assert_eq!(config.challenge_threshold, 70);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"challenge_threshold": 80}}"#).unwrap();

        let config = ScoringConfig::load(file.path()).unwrap();
        assert_eq!(config.challenge_threshold, 80);
        assert_eq!(config.weights, FactorWeights::default());
    }

    #[test]
    fn test_load_rejects_bad_weight_sum() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"weights": {{"temperature": 0.5, "moisture": 0.5, "soil": 0.5, "light": 0.5}}}}"#
        ).unwrap();

        let err = ScoringConfig::load(file.path()).unwrap_err();
        let root = err.downcast_ref::<ConfigError>().unwrap();
        assert_eq!(*root, ConfigError::WeightSum(2.0));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ScoringConfig::load(Path::new("/nonexistent/scoring.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read scoring config"));
    }

    #[test]
    fn test_validate_negative_weight() {
        let config = ScoringConfig {
            weights: FactorWeights { temperature: -0.1, moisture: 0.5, soil: 0.3, light: 0.3 },
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidWeight { name: "temperature", value: -0.1 })
        );
    }

    #[test]
    fn test_validate_threshold() {
        let config = ScoringConfig { challenge_threshold: 101, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigError::Threshold(101)));
    }
}
