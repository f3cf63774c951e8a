use crate::generator::figure::{center, FigureGenerator};
use crate::shape::ShapeLabel;

/// Ring centered in the grid, radius `ceil((side - c) / 2)` where `c` is
/// the center coordinate.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleGenerator;

impl FigureGenerator for CircleGenerator {
    fn label(&self) -> ShapeLabel {
        ShapeLabel::Circle
    }

    fn is_edge(&self, side: usize, row: usize, col: usize) -> bool {
        let c = center(side);
        let radius = ((side as f64 - c) / 2.0).ceil() as i64;
        let distance = (col as f64 - c).hypot(row as f64 - c);
        distance.round() as i64 == radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::figure::clean;

    #[test]
    fn ring_on_seven_by_seven() {
        let grid = clean(&CircleGenerator, 7);
        assert!(grid[3][1] && grid[3][5] && grid[1][3] && grid[5][3]);
        assert!(grid[2][1]);
        assert!(!grid[3][3]);
        assert!(!grid[0][0] && !grid[1][1]);
        for row in &grid {
            assert_eq!(row.len(), 7);
        }
    }

    #[test]
    fn ring_is_symmetric() {
        let grid = clean(&CircleGenerator, 7);
        for r in 0..7 {
            for c in 0..7 {
                assert_eq!(grid[r][c], grid[6 - r][c]);
                assert_eq!(grid[r][c], grid[c][r]);
            }
        }
    }
}
