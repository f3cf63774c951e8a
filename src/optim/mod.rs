pub mod learning_rate;
pub mod sgd;

pub use learning_rate::AdaptiveLearningRate;
pub use sgd::Sgd;
