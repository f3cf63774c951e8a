use rand::Rng;
use serde::{Serialize, Deserialize};
use std::ops::SubAssign;

/// Dense row-major matrix of `f64`.
///
/// Shape is fixed at construction; every operation that combines a matrix
/// with another matrix or a vector asserts matching dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Fills every entry independently and uniformly in `[-0.5, 0.5)`.
    pub fn random_uniform<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>() - 0.5;
            }
        }

        res
    }

    /// Builds a matrix from rows. Panics on ragged input.
    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        let rows = data.len();
        let cols = data.first().map(|r| r.len()).unwrap_or(0);
        assert!(
            data.iter().all(|r| r.len() == cols),
            "all rows must have {} columns",
            cols
        );
        Matrix { rows, cols, data }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row vector times matrix: `out[j] = Σ_i v[i] · self[i][j]`.
    pub fn vec_mul(&self, v: &[f64]) -> Vec<f64> {
        assert_eq!(
            v.len(),
            self.rows,
            "vector len {} does not match matrix rows {}",
            v.len(),
            self.rows
        );

        let mut res = vec![0.0; self.cols];
        for (i, row) in self.data.iter().enumerate() {
            for (j, w) in row.iter().enumerate() {
                res[j] += v[i] * w;
            }
        }
        res
    }

    /// Matrix times column vector: `out[i] = Σ_j self[i][j] · v[j]`.
    ///
    /// Equivalent to `v · selfᵀ`; used to push an error vector back through
    /// the weights that produced it.
    pub fn mul_vec(&self, v: &[f64]) -> Vec<f64> {
        assert_eq!(
            v.len(),
            self.cols,
            "vector len {} does not match matrix cols {}",
            v.len(),
            self.cols
        );

        self.data
            .iter()
            .map(|row| row.iter().zip(v.iter()).map(|(w, x)| w * x).sum())
            .collect()
    }

    /// Outer product `a ⊗ b` scaled by `scale`: `out[i][j] = scale · a[i] · b[j]`.
    pub fn outer(a: &[f64], b: &[f64], scale: f64) -> Matrix {
        let data = a
            .iter()
            .map(|x| b.iter().map(|y| scale * x * y).collect())
            .collect();
        Matrix {
            rows: a.len(),
            cols: b.len(),
            data,
        }
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

impl SubAssign<&Matrix> for Matrix {
    fn sub_assign(&mut self, rhs: &Matrix) {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!(
                "Matrices are of incorrect sizes: {:?} -= {:?}",
                self.shape(),
                rhs.shape()
            )
        }

        for (row, rhs_row) in self.data.iter_mut().zip(rhs.data.iter()) {
            for (x, d) in row.iter_mut().zip(rhs_row.iter()) {
                *x -= d;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn random_uniform_stays_in_half_open_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = Matrix::random_uniform(49, 20, &mut rng);
        assert_eq!(m.shape(), (49, 20));
        assert!(m.data.iter().flatten().all(|&x| (-0.5..0.5).contains(&x)));
    }

    #[test]
    fn vec_mul_is_row_vector_product() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
        assert_eq!(m.vec_mul(&[1.0, 0.0, 2.0]), vec![11.0, 14.0]);
    }

    #[test]
    fn mul_vec_is_transposed_product() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
        assert_eq!(m.mul_vec(&[1.0, -1.0]), vec![-1.0, -1.0, -1.0]);
    }

    #[test]
    #[should_panic(expected = "does not match matrix rows")]
    fn vec_mul_rejects_wrong_length() {
        Matrix::zeros(3, 2).vec_mul(&[1.0, 2.0]);
    }

    #[test]
    #[should_panic(expected = "incorrect sizes")]
    fn sub_assign_rejects_wrong_shape() {
        let mut a = Matrix::zeros(2, 2);
        a -= &Matrix::zeros(2, 3);
    }

    #[test]
    fn outer_scales_every_entry() {
        let m = Matrix::outer(&[1.0, 2.0], &[3.0, 4.0, 5.0], 0.5);
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.data[1], vec![3.0, 4.0, 5.0]);
    }
}
