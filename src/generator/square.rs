use crate::generator::figure::{inset, FigureGenerator};
use crate::shape::ShapeLabel;

/// Square outline inset from the border.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquareGenerator;

impl FigureGenerator for SquareGenerator {
    fn label(&self) -> ShapeLabel {
        ShapeLabel::Square
    }

    fn is_edge(&self, side: usize, row: usize, col: usize) -> bool {
        let near = inset(side);
        let far = side as i64 - near - 1;
        let (row, col) = (row as i64, col as i64);
        let within = |x: i64| near <= x && x <= far;

        ((row == near || row == far) && within(col)) || ((col == near || col == far) && within(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::figure::clean;

    #[test]
    fn outline_on_seven_by_seven() {
        let grid = clean(&SquareGenerator, 7);
        let lit: usize = grid.iter().flatten().filter(|&&p| p).count();
        // 5×5 outline
        assert_eq!(lit, 16);
        assert!(grid[1][1] && grid[1][5] && grid[5][1] && grid[5][5]);
        assert!(!grid[0][0] && !grid[3][3] && !grid[6][3]);
    }
}
