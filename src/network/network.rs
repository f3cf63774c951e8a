use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::activation::Sigmoid;
use crate::error::Result;
use crate::math::Matrix;
use crate::network::config::NetworkConfig;

/// Hidden and output activations produced by one forward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Activations {
    pub hidden: Vec<f64>,
    pub output: Vec<f64>,
}

/// Two dense weight matrices, input→hidden and hidden→output, no biases.
///
/// The matrices are private so their shapes cannot change after
/// construction; only the training code in this crate mutates the values.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    config: NetworkConfig,
    pub(crate) weights_input_hidden: Matrix,
    pub(crate) weights_hidden_output: Matrix,
}

impl Network {
    /// Builds a network with weights uniform in `[-0.5, 0.5)`, seeded from
    /// `config.seed` when present.
    pub fn new(config: NetworkConfig) -> Result<Network> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Network::new_with_rng(config, &mut rng)
    }

    pub fn new_with_rng<R: Rng + ?Sized>(config: NetworkConfig, rng: &mut R) -> Result<Network> {
        config.validate()?;
        let weights_input_hidden = Matrix::random_uniform(config.input_size(), config.hidden_size, rng);
        let weights_hidden_output = Matrix::random_uniform(config.hidden_size, config.output_size, rng);
        debug!(
            input = config.input_size(),
            hidden = config.hidden_size,
            output = config.output_size,
            seeded = config.seed.is_some(),
            "initialized network weights"
        );
        Ok(Network {
            config,
            weights_input_hidden,
            weights_hidden_output,
        })
    }

    /// Builds a network from explicit weights. Panics if the matrix shapes
    /// do not match `config`.
    pub fn from_weights(config: NetworkConfig, weights_input_hidden: Matrix, weights_hidden_output: Matrix) -> Result<Network> {
        config.validate()?;
        assert_eq!(
            weights_input_hidden.shape(),
            (config.input_size(), config.hidden_size),
            "input→hidden weights have the wrong shape"
        );
        assert_eq!(
            weights_hidden_output.shape(),
            (config.hidden_size, config.output_size),
            "hidden→output weights have the wrong shape"
        );
        Ok(Network {
            config,
            weights_input_hidden,
            weights_hidden_output,
        })
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn input_size(&self) -> usize {
        self.weights_input_hidden.rows
    }

    pub fn hidden_size(&self) -> usize {
        self.weights_input_hidden.cols
    }

    pub fn output_size(&self) -> usize {
        self.weights_hidden_output.cols
    }

    pub fn weights_input_hidden(&self) -> &Matrix {
        &self.weights_input_hidden
    }

    pub fn weights_hidden_output(&self) -> &Matrix {
        &self.weights_hidden_output
    }

    /// Forward pass: `hidden = σ(input · Wih)`, `output = σ(hidden · Who)`.
    ///
    /// Read-only; panics if `input.len() != input_size()`.
    pub fn forward(&self, input: &[f64]) -> Activations {
        let hidden = Sigmoid::apply(&self.weights_input_hidden.vec_mul(input));
        let output = Sigmoid::apply(&self.weights_hidden_output.vec_mul(&hidden));
        Activations { hidden, output }
    }
}
