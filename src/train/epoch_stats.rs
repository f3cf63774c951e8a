use serde::{Serialize, Deserialize};

/// Per-epoch training statistics produced by `train_loop`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Samples whose error exceeded the threshold and triggered an update.
    pub updates: usize,
    /// Samples at or below the threshold, left untouched.
    pub skipped: usize,
    /// Mean scalar error over all samples, measured before each update.
    pub mean_error: f64,
    /// Mean learning rate over the updates of this epoch; 0 when nothing was updated.
    pub mean_learning_rate: f64,
    /// Wall-clock duration of this epoch in milliseconds.
    pub elapsed_ms: u64,
}

/// All epochs of one training run, in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    pub epochs: Vec<EpochStats>,
}

impl TrainReport {
    pub fn last(&self) -> Option<&EpochStats> {
        self.epochs.last()
    }

    pub fn total_updates(&self) -> usize {
        self.epochs.iter().map(|e| e.updates).sum()
    }

    pub fn total_elapsed_ms(&self) -> u64 {
        self.epochs.iter().map(|e| e.elapsed_ms).sum()
    }
}
