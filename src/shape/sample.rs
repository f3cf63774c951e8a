use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};
use crate::shape::label::ShapeLabel;

/// One labeled square grid of boolean pixels.
///
/// Fields are private so a sample can only be built through `new`, which
/// checks that the grid is square. Samples are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeSample {
    pixels: Vec<Vec<bool>>,
    label: ShapeLabel,
}

impl ShapeSample {
    /// Validates that `pixels` is a non-empty `N×N` grid.
    pub fn new(pixels: Vec<Vec<bool>>, label: ShapeLabel) -> Result<ShapeSample> {
        let side = pixels.len();
        if side == 0 {
            return Err(Error::InvalidShape("pixel grid is empty".to_owned()));
        }
        if let Some((row, r)) = pixels.iter().enumerate().find(|(_, r)| r.len() != side) {
            return Err(Error::InvalidShape(format!(
                "row {} has {} pixels, expected {} for a square grid",
                row,
                r.len(),
                side
            )));
        }
        Ok(ShapeSample { pixels, label })
    }

    /// Like `new`, but also requires the side to equal `side`.
    pub fn with_side(pixels: Vec<Vec<bool>>, label: ShapeLabel, side: usize) -> Result<ShapeSample> {
        let sample = ShapeSample::new(pixels, label)?;
        if sample.side() != side {
            return Err(Error::InvalidShape(format!(
                "grid side is {}, expected {}",
                sample.side(),
                side
            )));
        }
        Ok(sample)
    }

    /// Builds an `N×N` grid from a pixel predicate `f(row, col)`.
    pub fn from_fn<F>(side: usize, label: ShapeLabel, mut f: F) -> ShapeSample
    where
        F: FnMut(usize, usize) -> bool,
    {
        let pixels = (0..side)
            .map(|row| (0..side).map(|col| f(row, col)).collect())
            .collect();
        ShapeSample { pixels, label }
    }

    pub fn pixels(&self) -> &[Vec<bool>] {
        &self.pixels
    }

    pub fn label(&self) -> ShapeLabel {
        self.label
    }

    pub fn side(&self) -> usize {
        self.pixels.len()
    }

    /// Row-major linearization, `true → 1.0`, `false → 0.0`.
    pub fn flatten(&self) -> Vec<f64> {
        flatten_pixels(&self.pixels)
    }
}

pub fn flatten_pixels(pixels: &[Vec<bool>]) -> Vec<f64> {
    pixels
        .iter()
        .flat_map(|row| row.iter().map(|&p| if p { 1.0 } else { 0.0 }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn flatten_is_row_major() {
        let sample = ShapeSample::new(
            vec![vec![true, false], vec![false, false]],
            ShapeLabel::Circle,
        )
        .unwrap();
        assert_eq!(sample.flatten(), vec![1.0, 0.0, 0.0, 0.0]);

        let sample = ShapeSample::from_fn(3, ShapeLabel::Square, |row, col| row == 1 && col == 2);
        assert_eq!(sample.flatten()[5], 1.0);
        assert_eq!(sample.flatten().iter().sum::<f64>(), 1.0);
    }

    #[test]
    fn rejects_non_square_grids() {
        let err = ShapeSample::new(vec![vec![true, false], vec![true]], ShapeLabel::Circle);
        assert!(matches!(err, Err(Error::InvalidShape(_))));
        assert!(ShapeSample::new(vec![], ShapeLabel::Circle).is_err());
    }

    #[test]
    fn with_side_checks_configured_side() {
        let grid = vec![vec![false; 3]; 3];
        assert!(ShapeSample::with_side(grid.clone(), ShapeLabel::Triangle, 3).is_ok());
        assert!(ShapeSample::with_side(grid, ShapeLabel::Triangle, 7).is_err());
    }

    proptest! {
        #[test]
        fn flattened_length_is_side_squared(side in 1usize..12, bits in any::<u64>()) {
            let sample = ShapeSample::from_fn(side, ShapeLabel::Circle, |r, c| (bits >> ((r * side + c) % 64)) & 1 == 1);
            let flat = sample.flatten();
            prop_assert_eq!(flat.len(), side * side);
            prop_assert!(flat.iter().all(|&x| x == 0.0 || x == 1.0));
        }
    }
}
