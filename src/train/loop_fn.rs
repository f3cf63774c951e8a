use std::time::Instant;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::network::Network;
use crate::shape::ShapeSample;
use crate::train::epoch_stats::{EpochStats, TrainReport};
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_epoch;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` in place for `config.epochs` epochs and returns one
/// `EpochStats` per epoch.
///
/// # Arguments
/// - `network`: mutable reference to the network; modified in place
/// - `samples`: training set, visited in the given order every epoch. The
///   caller shuffles once beforehand; the loop never reorders.
/// - `config`: epochs, error threshold, learning-rate bounds
///
/// # Behavior
/// - Every epoch runs; there is no early stopping and no cancellation.
/// - An empty training set is a no-op: the network keeps its initial weights.
///
/// # Errors
/// Returns `Error::InvalidConfig` if `config` fails validation.
///
/// # Panics
/// Panics if a sample's grid does not flatten to the network's input size.
pub fn train_loop(network: &mut Network, samples: &[ShapeSample], config: &TrainConfig) -> Result<TrainReport> {
    config.validate()?;

    if samples.is_empty() {
        warn!("training set is empty, network keeps its initial weights");
    }

    info!(
        samples = samples.len(),
        epochs = config.epochs,
        max_error = config.max_error,
        min_alpha = config.min_alpha,
        max_alpha = config.max_alpha,
        formula = ?config.error_formula,
        "training started"
    );

    let optimizer = config.optimizer(network.output_size());
    let mut report = TrainReport { epochs: Vec::with_capacity(config.epochs) };

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        let totals = train_epoch(network, samples, &optimizer, config.max_error, config.error_formula);

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            updates: totals.updates,
            skipped: totals.skipped,
            mean_error: totals.mean_error(),
            mean_learning_rate: totals.mean_learning_rate(),
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };

        debug!(
            epoch = stats.epoch,
            total = stats.total_epochs,
            updates = stats.updates,
            skipped = stats.skipped,
            mean_error = stats.mean_error,
            mean_lr = stats.mean_learning_rate,
            elapsed_ms = stats.elapsed_ms,
            "epoch finished"
        );

        report.epochs.push(stats);
    }

    info!(
        epochs = report.epochs.len(),
        updates = report.total_updates(),
        final_mean_error = report.last().map(|e| e.mean_error).unwrap_or(0.0),
        elapsed_ms = report.total_elapsed_ms(),
        "training finished"
    );

    Ok(report)
}
