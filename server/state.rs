use std::sync::Arc;

use figure_nn::{DatasetGenerator, Network, TrainReport};

/// Everything the request handlers need, frozen once training finishes.
///
/// Handlers only read from this, so it is shared through an `Arc` without
/// a lock; the network is never trained again after the server starts.
pub struct AppState {
    pub network: Network,
    pub data: DatasetGenerator,
    pub train_report: TrainReport,
}

impl AppState {
    pub fn image_side(&self) -> usize {
        self.network.config().image_side
    }
}

/// Shared state type, an `Arc<AppState>` passed to every handler.
pub type SharedState = Arc<AppState>;
