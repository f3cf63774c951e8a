use serde::{Serialize, Deserialize};
use tracing::info;

use crate::network::Network;
use crate::shape::{ShapeLabel, ShapeSample};

/// Accuracy of a network over a held-out set.
///
/// `confusion[t][p]` counts samples whose true label has slot `t` and whose
/// prediction has slot `p`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub count_all: usize,
    pub count_true: usize,
    pub count_false: usize,
    pub percent_true: f64,
    pub confusion: Vec<Vec<usize>>,
}

impl EvaluationReport {
    /// Runs the predictor over every sample. Read-only with respect to the
    /// network. An empty set yields `percent_true == 0.0`.
    pub fn evaluate(network: &Network, samples: &[ShapeSample]) -> EvaluationReport {
        let mut confusion = vec![vec![0; ShapeLabel::COUNT]; ShapeLabel::COUNT];
        let mut count_true = 0;

        for sample in samples {
            let predicted = network.predict(sample);
            confusion[sample.label().slot()][predicted.slot()] += 1;
            if predicted == sample.label() {
                count_true += 1;
            }
        }

        let count_all = samples.len();
        let report = EvaluationReport {
            count_all,
            count_true,
            count_false: count_all - count_true,
            percent_true: percent(count_true, count_all),
            confusion,
        };

        info!(
            count_all = report.count_all,
            count_true = report.count_true,
            count_false = report.count_false,
            percent_true = report.percent_true,
            "evaluation finished"
        );

        report
    }

    /// Per-label recall in percent, in slot order.
    pub fn recall_by_label(&self) -> Vec<(ShapeLabel, f64)> {
        ShapeLabel::ALL
            .iter()
            .map(|&label| {
                let row = &self.confusion[label.slot()];
                let total: usize = row.iter().sum();
                (label, percent(row[label.slot()], total))
            })
            .collect()
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Matrix;
    use crate::network::NetworkConfig;

    /// Predicts `label` for every input.
    fn constant_network(label: ShapeLabel) -> Network {
        let mut who = Matrix::zeros(1, 3);
        who.data[0][label.slot()] = 4.0;
        Network::from_weights(NetworkConfig::new(2, 1), Matrix::zeros(4, 1), who).unwrap()
    }

    #[test]
    fn empty_set_does_not_divide_by_zero() {
        let report = EvaluationReport::evaluate(&constant_network(ShapeLabel::Circle), &[]);
        assert_eq!(report.count_all, 0);
        assert_eq!(report.percent_true, 0.0);
        assert!(report.recall_by_label().iter().all(|(_, r)| *r == 0.0));
    }

    #[test]
    fn counts_and_confusion() {
        let samples: Vec<ShapeSample> = [ShapeLabel::Circle, ShapeLabel::Circle, ShapeLabel::Square, ShapeLabel::Triangle]
            .iter()
            .map(|&l| ShapeSample::from_fn(2, l, |_, _| false))
            .collect();
        let report = EvaluationReport::evaluate(&constant_network(ShapeLabel::Circle), &samples);
        assert_eq!(report.count_all, 4);
        assert_eq!(report.count_true, 2);
        assert_eq!(report.count_false, 2);
        assert_eq!(report.percent_true, 50.0);
        assert_eq!(report.confusion[ShapeLabel::Circle.slot()][ShapeLabel::Circle.slot()], 2);
        assert_eq!(report.confusion[ShapeLabel::Square.slot()][ShapeLabel::Circle.slot()], 1);
        assert_eq!(report.recall_by_label()[0], (ShapeLabel::Circle, 100.0));
    }
}
