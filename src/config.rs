use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::generator::DatasetConfig;
use crate::loss::ErrorFormula;
use crate::network::NetworkConfig;
use crate::train::TrainConfig;

/// Application configuration as read from a JSON file or assembled from
/// command-line flags.
///
/// Every field is optional so partial files are valid; `None` falls back to
/// the defaults of `NetworkConfig`, `TrainConfig` and `DatasetConfig`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Side of the square pixel grid.
    pub image_side: Option<usize>,
    /// Width of the hidden layer.
    pub hidden_size: Option<usize>,
    pub epochs: Option<usize>,
    /// Training samples per shape class.
    pub train_count: Option<usize>,
    /// Validation samples per shape class.
    pub validation_count: Option<usize>,
    pub max_error: Option<f64>,
    pub min_alpha: Option<f64>,
    pub max_alpha: Option<f64>,
    pub error_formula: Option<ErrorFormula>,
    /// Probability of flipping a generated pixel.
    pub noise: Option<f64>,
    /// Seeds both weight initialization and data generation.
    pub seed: Option<u64>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl AppConfig {
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Merge configs where the second overwrites the first.
    pub fn merge(self, other: Self) -> Self {
        Self {
            image_side: other.image_side.or(self.image_side),
            hidden_size: other.hidden_size.or(self.hidden_size),
            epochs: other.epochs.or(self.epochs),
            train_count: other.train_count.or(self.train_count),
            validation_count: other.validation_count.or(self.validation_count),
            max_error: other.max_error.or(self.max_error),
            min_alpha: other.min_alpha.or(self.min_alpha),
            max_alpha: other.max_alpha.or(self.max_alpha),
            error_formula: other.error_formula.or(self.error_formula),
            noise: other.noise.or(self.noise),
            seed: other.seed.or(self.seed),
            host: other.host.or(self.host),
            port: other.port.or(self.port),
        }
    }

    pub fn network_config(&self) -> Result<NetworkConfig> {
        let defaults = NetworkConfig::default();
        let config = NetworkConfig {
            image_side: self.image_side.unwrap_or(defaults.image_side),
            hidden_size: self.hidden_size.unwrap_or(defaults.hidden_size),
            output_size: defaults.output_size,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn train_config(&self) -> Result<TrainConfig> {
        let defaults = TrainConfig::default();
        let config = TrainConfig {
            epochs: self.epochs.unwrap_or(defaults.epochs),
            max_error: self.max_error.unwrap_or(defaults.max_error),
            min_alpha: self.min_alpha.unwrap_or(defaults.min_alpha),
            max_alpha: self.max_alpha.unwrap_or(defaults.max_alpha),
            error_formula: self.error_formula.unwrap_or(defaults.error_formula),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn dataset_config(&self) -> Result<DatasetConfig> {
        let defaults = DatasetConfig::default();
        let config = DatasetConfig {
            image_side: self.image_side.unwrap_or(defaults.image_side),
            train_count: self.train_count.unwrap_or(defaults.train_count),
            validation_count: self.validation_count.unwrap_or(defaults.validation_count),
            noise: self.noise.unwrap_or(defaults.noise),
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or("127.0.0.1")
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(8080)
    }
}
