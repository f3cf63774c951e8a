use crate::generator::figure::{inset, FigureGenerator};
use crate::shape::ShapeLabel;

/// Isosceles triangle with its apex on the top inset row and its base on
/// the bottom inset row. Rows outside that band are empty before noise.
#[derive(Debug, Clone, Copy, Default)]
pub struct TriangleGenerator;

impl FigureGenerator for TriangleGenerator {
    fn label(&self) -> ShapeLabel {
        ShapeLabel::Triangle
    }

    fn is_edge(&self, side: usize, row: usize, col: usize) -> bool {
        let n = side as i64;
        let near = inset(side);
        let far = n - near - 1;
        let (row, col) = (row as i64, col as i64);

        if row < near || row > far {
            return false;
        }

        let steps = (n + 1) / 2;
        let width = ((row - near) * steps) / n * 2 + 1;
        let start = (n - width) / 2;

        col == start || col == start + width - 1 || (row == far && col >= near && col < far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::figure::clean;

    #[test]
    fn triangle_on_seven_by_seven() {
        let grid = clean(&TriangleGenerator, 7);
        // apex
        assert_eq!(grid[1], vec![false, false, false, true, false, false, false]);
        // base
        assert_eq!(grid[5], vec![false, true, true, true, true, true, false]);
        assert!(grid[0].iter().all(|&p| !p));
        assert!(grid[6].iter().all(|&p| !p));
    }

    #[test]
    fn is_left_right_symmetric() {
        let grid = clean(&TriangleGenerator, 7);
        for row in &grid {
            for c in 0..7 {
                assert_eq!(row[c], row[6 - c]);
            }
        }
    }
}
