pub mod config;
pub mod network;
pub mod predictor;

pub use config::NetworkConfig;
pub use network::{Activations, Network};
