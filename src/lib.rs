pub mod math;
pub mod activation;
pub mod shape;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod generator;
pub mod eval;
pub mod config;
pub mod cli;
pub mod error;
pub mod logging;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::sigmoid::Sigmoid;
pub use shape::{ShapeLabel, ShapeSample};
pub use network::{Activations, Network, NetworkConfig};
pub use loss::ErrorFormula;
pub use optim::{AdaptiveLearningRate, Sgd};
pub use train::{train_loop, EpochStats, TrainConfig, TrainReport};
pub use generator::{DatasetConfig, DatasetGenerator, FigureGenerator};
pub use eval::EvaluationReport;
pub use config::AppConfig;
pub use error::{Error, Result};
