use crate::network::{Activations, Network};
use crate::optim::learning_rate::AdaptiveLearningRate;
use crate::train::backprop::backpropagate;

/// Per-sample gradient descent with an error-scaled learning rate.
pub struct Sgd {
    pub learning_rate: AdaptiveLearningRate,
}

impl Sgd {
    pub fn new(learning_rate: AdaptiveLearningRate) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one weight update for a sample whose scalar error is `error`.
    /// Returns the learning rate that was used.
    pub fn step(
        &self,
        network: &mut Network,
        input: &[f64],
        activations: &Activations,
        output_error: &[f64],
        error: f64,
    ) -> f64 {
        let lr = self.learning_rate.rate(error);
        backpropagate(network, input, activations, output_error, lr);
        lr
    }
}
