use crate::activation::Sigmoid;
use crate::math::{hadamard, Matrix};
use crate::network::{Activations, Network};

/// Weight changes for one sample, already scaled by the learning rate.
/// Applying them means subtracting each matrix from the matching weights.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightDeltas {
    pub input_hidden: Matrix,
    pub hidden_output: Matrix,
}

/// Hidden-layer error: `(Who · output_error) ⊙ σ'(hidden)`.
///
/// Reads the current hidden→output weights, so it must run before those
/// weights are updated.
pub fn hidden_error(network: &Network, hidden: &[f64], output_error: &[f64]) -> Vec<f64> {
    let back = network.weights_hidden_output.mul_vec(output_error);
    hadamard(&back, &Sigmoid::derivative_vec(hidden))
}

/// Computes both weight deltas from the pre-update weights.
///
/// - `Who[j][i] -= lr · output_error[i] · σ'(output[i]) · hidden[j]`
/// - `Wih[j][i] -= lr · hidden_error[i] · σ'(hidden[i]) · input[j]`
///
/// `σ'` is evaluated on activation values.
pub fn compute_deltas(
    input: &[f64],
    activations: &Activations,
    hidden_error: &[f64],
    output_error: &[f64],
    learning_rate: f64,
) -> WeightDeltas {
    let output_grad = hadamard(output_error, &Sigmoid::derivative_vec(&activations.output));
    let hidden_grad = hadamard(hidden_error, &Sigmoid::derivative_vec(&activations.hidden));

    WeightDeltas {
        hidden_output: Matrix::outer(&activations.hidden, &output_grad, learning_rate),
        input_hidden: Matrix::outer(input, &hidden_grad, learning_rate),
    }
}

/// One full backpropagation step for a sample: hidden error, deltas, then
/// in-place update of both matrices.
pub fn backpropagate(
    network: &mut Network,
    input: &[f64],
    activations: &Activations,
    output_error: &[f64],
    learning_rate: f64,
) {
    let hidden_err = hidden_error(network, &activations.hidden, output_error);
    let deltas = compute_deltas(input, activations, &hidden_err, output_error, learning_rate);
    apply_deltas(network, &deltas);
}

/// Subtracts `deltas` from the network's weights. Panics on shape mismatch.
pub fn apply_deltas(network: &mut Network, deltas: &WeightDeltas) {
    network.weights_hidden_output -= &deltas.hidden_output;
    network.weights_input_hidden -= &deltas.input_hidden;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::subtract;
    use crate::network::NetworkConfig;
    use crate::shape::ShapeLabel;

    fn sample_input() -> Vec<f64> {
        (0..9).map(|i| if i % 3 == 0 { 1.0 } else { 0.0 }).collect()
    }

    #[test]
    fn output_update_moves_outputs_toward_target() {
        let mut network = Network::new(NetworkConfig::new(3, 5).with_seed(11)).unwrap();
        let input = sample_input();
        let target = ShapeLabel::Triangle.one_hot();

        let before = network.forward(&input);
        let output_error = subtract(&before.output, &target);
        backpropagate(&mut network, &input, &before, &output_error, 0.2);

        // Re-evaluate the output layer with the old hidden activations so only
        // the hidden→output update is measured.
        let z = network.weights_hidden_output().vec_mul(&before.hidden);
        let after = Sigmoid::apply(&z);
        for i in 0..3 {
            assert!(output_error[i] != 0.0);
            assert!(
                (after[i] - before.output[i]) * output_error[i] < 0.0,
                "output {} moved away from its target",
                i
            );
            assert!((after[i] - target[i]).abs() < (before.output[i] - target[i]).abs());
        }
    }

    #[test]
    fn hidden_error_uses_pre_update_weights() {
        let network = Network::new(NetworkConfig::new(3, 4).with_seed(5)).unwrap();
        let input = sample_input();
        let act = network.forward(&input);
        let output_error = subtract(&act.output, &ShapeLabel::Circle.one_hot());

        let expected = hidden_error(&network, &act.hidden, &output_error);
        let deltas = compute_deltas(&input, &act, &expected, &output_error, 0.3);

        let mut two_phase = network.clone();
        apply_deltas(&mut two_phase, &deltas);

        let mut one_call = network.clone();
        backpropagate(&mut one_call, &input, &act, &output_error, 0.3);

        assert_eq!(two_phase, one_call);
    }

    #[test]
    fn zero_inputs_leave_input_weights_untouched() {
        let mut network = Network::new(NetworkConfig::new(3, 4).with_seed(9)).unwrap();
        let input = vec![0.0; 9];
        let act = network.forward(&input);
        let output_error = subtract(&act.output, &ShapeLabel::Square.one_hot());
        let wih = network.weights_input_hidden().clone();
        let who = network.weights_hidden_output().clone();

        backpropagate(&mut network, &input, &act, &output_error, 0.3);

        assert_eq!(network.weights_input_hidden(), &wih);
        assert_ne!(network.weights_hidden_output(), &who);
    }

    #[test]
    fn delta_shapes_match_weights() {
        let network = Network::new(NetworkConfig::new(3, 6).with_seed(2)).unwrap();
        let input = sample_input();
        let act = network.forward(&input);
        let output_error = subtract(&act.output, &ShapeLabel::Square.one_hot());
        let he = hidden_error(&network, &act.hidden, &output_error);
        let deltas = compute_deltas(&input, &act, &he, &output_error, 0.1);
        assert_eq!(deltas.input_hidden.shape(), (9, 6));
        assert_eq!(deltas.hidden_output.shape(), (6, 3));
    }
}
