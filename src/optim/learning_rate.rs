use serde::{Serialize, Deserialize};

/// Learning rate that grows with the sample's error.
///
/// `rate = clamp(2·error / output_size, 0, 1) · (max_alpha - min_alpha) + min_alpha`,
/// so a perfect sample would train at `min_alpha` and a maximally wrong one
/// at `max_alpha`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveLearningRate {
    pub min_alpha: f64,
    pub max_alpha: f64,
    pub output_size: usize,
}

impl AdaptiveLearningRate {
    pub fn new(min_alpha: f64, max_alpha: f64, output_size: usize) -> AdaptiveLearningRate {
        AdaptiveLearningRate { min_alpha, max_alpha, output_size }
    }

    pub fn rate(&self, error: f64) -> f64 {
        let relative = (2.0 * error / self.output_size as f64).clamp(0.0, 1.0);
        relative * (self.max_alpha - self.min_alpha) + self.min_alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_is_bounded_by_alphas() {
        let lr = AdaptiveLearningRate::new(0.01, 0.3, 3);
        assert_eq!(lr.rate(0.0), 0.01);
        assert!((lr.rate(1.5) - 0.3).abs() < 1e-12);
        assert!((lr.rate(10.0) - 0.3).abs() < 1e-12);
        assert_eq!(lr.rate(-1.0), 0.01);
    }

    #[test]
    fn rate_interpolates_linearly() {
        let lr = AdaptiveLearningRate::new(0.01, 0.3, 3);
        // 2 · 0.75 / 3 = 0.5
        assert!((lr.rate(0.75) - 0.155).abs() < 1e-12);
    }
}
