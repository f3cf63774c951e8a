pub mod backprop;
pub mod epoch_stats;
pub mod loop_fn;
pub mod train_config;
pub mod trainer;

pub use backprop::{apply_deltas, backpropagate, compute_deltas, hidden_error, WeightDeltas};
pub use epoch_stats::{EpochStats, TrainReport};
pub use loop_fn::train_loop;
pub use train_config::TrainConfig;
pub use trainer::{train_epoch, train_sample, EpochTotals, SampleOutcome};
