use crate::math::argmax;
use crate::network::network::Network;
use crate::shape::{flatten_pixels, ShapeLabel, ShapeSample};

impl Network {
    /// Classifies a sample's pixel grid; the sample's own label is ignored.
    pub fn predict(&self, sample: &ShapeSample) -> ShapeLabel {
        self.predict_pixels(sample.pixels())
    }

    /// Runs the forward pass on a raw grid and maps the arg-max output slot
    /// back to its label. Panics unless the grid is `image_side × image_side`.
    pub fn predict_pixels(&self, pixels: &[Vec<bool>]) -> ShapeLabel {
        self.classify(pixels).0
    }

    /// Predicted label together with the raw output activations, indexed by
    /// label slot.
    pub fn predict_with_scores(&self, sample: &ShapeSample) -> (ShapeLabel, Vec<f64>) {
        self.classify(sample.pixels())
    }

    fn classify(&self, pixels: &[Vec<bool>]) -> (ShapeLabel, Vec<f64>) {
        let side = self.config().image_side;
        assert_eq!(pixels.len(), side, "grid has {} rows, expected {}", pixels.len(), side);
        for (row, cells) in pixels.iter().enumerate() {
            assert_eq!(cells.len(), side, "row {} has {} pixels, expected {}", row, cells.len(), side);
        }
        let output = self.forward(&flatten_pixels(pixels)).output;
        let slot = argmax(&output);
        let label = ShapeLabel::from_slot(slot)
            .unwrap_or_else(|| panic!("output slot {} has no label", slot));
        (label, output)
    }
}

#[cfg(test)]
mod tests {
    use crate::math::Matrix;
    use crate::network::config::NetworkConfig;
    use crate::network::network::Network;
    use crate::shape::{ShapeLabel, ShapeSample};

    fn network_biased_to(slot: usize) -> Network {
        let config = NetworkConfig::new(2, 1);
        let wih = Matrix::zeros(4, 1);
        let mut who = Matrix::zeros(1, 3);
        who.data[0][slot] = 5.0;
        Network::from_weights(config, wih, who).unwrap()
    }

    #[test]
    fn predicts_label_of_largest_output() {
        let sample = ShapeSample::from_fn(2, ShapeLabel::Circle, |_, _| true);
        for label in ShapeLabel::ALL {
            assert_eq!(network_biased_to(label.slot()).predict(&sample), label);
        }
    }

    #[test]
    fn ties_resolve_to_first_slot() {
        let network = Network::from_weights(
            NetworkConfig::new(2, 1),
            Matrix::zeros(4, 1),
            Matrix::zeros(1, 3),
        )
        .unwrap();
        let sample = ShapeSample::from_fn(2, ShapeLabel::Triangle, |r, c| r == c);
        assert_eq!(network.predict(&sample), ShapeLabel::from_slot(0).unwrap());
    }

    #[test]
    #[should_panic(expected = "grid has 2 rows, expected 3")]
    fn ragged_grid_with_matching_cell_count_panics() {
        let network = Network::new(NetworkConfig::new(3, 4).with_seed(1)).unwrap();
        network.predict_pixels(&[vec![true; 5], vec![false; 4]]);
    }

    #[test]
    #[should_panic(expected = "row 1 has 2 pixels, expected 3")]
    fn short_row_panics() {
        let network = Network::new(NetworkConfig::new(3, 4).with_seed(1)).unwrap();
        network.predict_pixels(&[vec![true; 3], vec![false; 2], vec![true; 4]]);
    }
}
