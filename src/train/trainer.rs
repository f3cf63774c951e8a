use crate::loss::ErrorFormula;
use crate::math::subtract;
use crate::network::Network;
use crate::optim::Sgd;
use crate::shape::ShapeSample;

/// What happened to a single sample during training.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleOutcome {
    Updated { error: f64, learning_rate: f64 },
    Skipped { error: f64 },
}

impl SampleOutcome {
    pub fn error(&self) -> f64 {
        match *self {
            SampleOutcome::Updated { error, .. } | SampleOutcome::Skipped { error } => error,
        }
    }
}

/// Running totals for one pass over the training set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EpochTotals {
    pub updates: usize,
    pub skipped: usize,
    pub error_sum: f64,
    pub learning_rate_sum: f64,
}

impl EpochTotals {
    fn record(&mut self, outcome: SampleOutcome) {
        self.error_sum += outcome.error();
        match outcome {
            SampleOutcome::Updated { learning_rate, .. } => {
                self.updates += 1;
                self.learning_rate_sum += learning_rate;
            }
            SampleOutcome::Skipped { .. } => self.skipped += 1,
        }
    }

    pub fn samples(&self) -> usize {
        self.updates + self.skipped
    }

    pub fn mean_error(&self) -> f64 {
        if self.samples() == 0 {
            return 0.0;
        }
        self.error_sum / self.samples() as f64
    }

    pub fn mean_learning_rate(&self) -> f64 {
        if self.updates == 0 {
            return 0.0;
        }
        self.learning_rate_sum / self.updates as f64
    }
}

/// Forward pass, error, and a gated update for one sample.
///
/// The network is only touched when the scalar error is strictly greater
/// than `max_error`.
pub fn train_sample(
    network: &mut Network,
    sample: &ShapeSample,
    optimizer: &Sgd,
    max_error: f64,
    formula: ErrorFormula,
) -> SampleOutcome {
    let input = sample.flatten();
    let target = sample.label().one_hot();

    let activations = network.forward(&input);
    let output_error = subtract(&activations.output, &target);
    let error = formula.error(&target, &activations.output, &output_error);

    if error > max_error {
        let learning_rate = optimizer.step(network, &input, &activations, &output_error, error);
        SampleOutcome::Updated { error, learning_rate }
    } else {
        SampleOutcome::Skipped { error }
    }
}

/// One pass over `samples` in the order given.
pub fn train_epoch(
    network: &mut Network,
    samples: &[ShapeSample],
    optimizer: &Sgd,
    max_error: f64,
    formula: ErrorFormula,
) -> EpochTotals {
    let mut totals = EpochTotals::default();
    for sample in samples {
        totals.record(train_sample(network, sample, optimizer, max_error, formula));
    }
    totals
}
