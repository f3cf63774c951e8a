use rand::{Rng, RngCore};

use crate::shape::{ShapeLabel, ShapeSample};

/// Produces noisy samples of a single shape class.
///
/// Implementors only describe the clean outline through `is_edge`; the
/// provided `generate` draws one uniform number per pixel and inverts the
/// pixel when that number falls below `noise`.
pub trait FigureGenerator: Send + Sync {
    fn label(&self) -> ShapeLabel;

    /// Whether `(row, col)` lies on the outline in a `side×side` grid.
    fn is_edge(&self, side: usize, row: usize, col: usize) -> bool;

    fn generate(&self, side: usize, count: usize, noise: f64, rng: &mut dyn RngCore) -> Vec<ShapeSample> {
        (0..count)
            .map(|_| {
                ShapeSample::from_fn(side, self.label(), |row, col| {
                    let edge = self.is_edge(side, row, col);
                    let noisy = rng.gen::<f64>() < noise;
                    edge ^ noisy
                })
            })
            .collect()
    }
}

/// `(side - 1) / 2`, the center coordinate shared by all outlines.
pub(crate) fn center(side: usize) -> f64 {
    (side as f64 - 1.0) / 2.0
}

/// Distance from the border to the square and triangle outlines.
pub(crate) fn inset(side: usize) -> i64 {
    let c = center(side);
    let half_span = ((side as f64 - c) / 2.0).ceil();
    (c - half_span).ceil() as i64
}

#[cfg(test)]
pub(crate) fn clean(generator: &dyn FigureGenerator, side: usize) -> Vec<Vec<bool>> {
    use rand::SeedableRng;
    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    generator.generate(side, 1, 0.0, &mut rng).remove(0).pixels().to_vec()
}
