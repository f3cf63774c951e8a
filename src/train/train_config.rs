use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};
use crate::loss::ErrorFormula;
use crate::optim::{AdaptiveLearningRate, Sgd};

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`: full passes over the training set; there is no early stop
/// - `max_error`: samples whose scalar error is `<= max_error` are skipped
/// - `min_alpha`: learning rate used for the smallest error
/// - `max_alpha`: learning rate used for the largest error
/// - `error_formula`: how the scalar error is computed (see `ErrorFormula`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub epochs: usize,
    pub max_error: f64,
    pub min_alpha: f64,
    pub max_alpha: f64,
    #[serde(default)]
    pub error_formula: ErrorFormula,
}

impl TrainConfig {
    pub fn new(epochs: usize) -> Self {
        TrainConfig {
            epochs,
            ..TrainConfig::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_error.is_nan() || self.max_error < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "max_error must be >= 0, got {}",
                self.max_error
            )));
        }
        if self.min_alpha.is_nan() || self.max_alpha.is_nan() || self.min_alpha < 0.0 || self.min_alpha > self.max_alpha {
            return Err(Error::InvalidConfig(format!(
                "learning rate bounds must satisfy 0 <= min_alpha <= max_alpha, got {}..{}",
                self.min_alpha, self.max_alpha
            )));
        }
        Ok(())
    }

    /// Optimizer for a network with `output_size` output units.
    pub fn optimizer(&self, output_size: usize) -> Sgd {
        Sgd::new(AdaptiveLearningRate::new(self.min_alpha, self.max_alpha, output_size))
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            epochs: 100,
            max_error: 0.1,
            min_alpha: 0.01,
            max_alpha: 0.3,
            error_formula: ErrorFormula::TargetMinusError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TrainConfig::default();
        assert_eq!(config.epochs, 100);
        assert_eq!(config.max_error, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_inverted_bounds() {
        let config = TrainConfig { min_alpha: 0.5, max_alpha: 0.1, ..TrainConfig::default() };
        assert!(config.validate().is_err());
        let config = TrainConfig { max_error: f64::NAN, ..TrainConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn deserializes_with_default_formula() {
        let json = r#"{"epochs": 5, "max_error": 0.2, "min_alpha": 0.01, "max_alpha": 0.3}"#;
        let config: TrainConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.epochs, 5);
        assert_eq!(config.error_formula, ErrorFormula::TargetMinusError);
    }
}
