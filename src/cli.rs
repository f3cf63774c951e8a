use std::path::PathBuf;

use clap::Args;

use crate::config::AppConfig;
use crate::error::Result;
use crate::loss::ErrorFormula;

/// Configuration flags shared by the `figure-nn` and `figure-server`
/// binaries. Flags override values from `--config`.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// JSON config file; every field is optional
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Side of the square pixel grid
    #[arg(long, value_name = "INT")]
    pub image_side: Option<usize>,
    /// Width of the hidden layer
    #[arg(long, value_name = "INT")]
    pub hidden_size: Option<usize>,
    #[arg(short, long, value_name = "INT")]
    pub epochs: Option<usize>,
    /// Training samples per shape class
    #[arg(long, value_name = "INT")]
    pub train_count: Option<usize>,
    /// Validation samples per shape class
    #[arg(long, value_name = "INT")]
    pub validation_count: Option<usize>,
    /// Samples with error at or below this value are not trained on
    #[arg(long, value_name = "FLOAT")]
    pub max_error: Option<f64>,
    #[arg(long, value_name = "FLOAT")]
    pub min_alpha: Option<f64>,
    #[arg(long, value_name = "FLOAT")]
    pub max_alpha: Option<f64>,
    /// Per-sample error formula used for gating
    #[arg(long, value_enum)]
    pub error_formula: Option<ErrorFormulaArg>,
    /// Probability of flipping each generated pixel
    #[arg(long, value_name = "FLOAT")]
    pub noise: Option<f64>,
    /// Seed for weight initialization and data generation
    #[arg(short, long, value_name = "INT")]
    pub seed: Option<u64>,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorFormulaArg {
    TargetMinusError,
    TargetMinusOutput,
}

impl From<ErrorFormulaArg> for ErrorFormula {
    fn from(arg: ErrorFormulaArg) -> Self {
        match arg {
            ErrorFormulaArg::TargetMinusError => ErrorFormula::TargetMinusError,
            ErrorFormulaArg::TargetMinusOutput => ErrorFormula::TargetMinusOutput,
        }
    }
}

impl ConfigArgs {
    /// Reads `--config` if given and layers the flags on top.
    pub fn load(&self) -> Result<AppConfig> {
        let file = match &self.config {
            Some(path) => AppConfig::load_json(path)?,
            None => AppConfig::default(),
        };
        Ok(file.merge(self.overrides()))
    }

    fn overrides(&self) -> AppConfig {
        AppConfig {
            image_side: self.image_side,
            hidden_size: self.hidden_size,
            epochs: self.epochs,
            train_count: self.train_count,
            validation_count: self.validation_count,
            max_error: self.max_error,
            min_alpha: self.min_alpha,
            max_alpha: self.max_alpha,
            error_formula: self.error_formula.map(ErrorFormula::from),
            noise: self.noise,
            seed: self.seed,
            host: None,
            port: None,
        }
    }
}
