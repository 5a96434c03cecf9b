//! Doolittle LU decomposition with partial pivoting.
//!
//! The decomposition packs both factors into one matrix: entries strictly
//! below the diagonal hold the multipliers of L (whose unit diagonal is
//! implicit), entries on and above the diagonal hold U. Row exchanges are
//! recorded in a permutation vector and their parity in a `±1` toggle.

use tracing::trace;

use crate::linalg::error::{LinalgError, Result};
use crate::linalg::matrix::Matrix;

#[derive(Debug, Clone, PartialEq)]
pub struct LuDecomposition {
    lu: Matrix,
    perm: Vec<usize>,
    toggle: i8,
}

impl LuDecomposition {
    /// Factors a square matrix. The input is copied, never modified.
    ///
    /// Each column first takes the row with the largest absolute value as
    /// pivot (earliest row on ties). If the pivot is still exactly zero, the
    /// last row below it with a non-zero entry in that column is swapped in;
    /// when there is none the matrix is singular. A zero left on the final
    /// diagonal after elimination is also reported as singular, so [`solve`]
    /// never divides by zero.
    ///
    /// [`solve`]: LuDecomposition::solve
    pub fn decompose(matrix: &Matrix) -> Result<Self> {
        if !matrix.is_square() {
            return Err(LinalgError::NotSquare {
                rows: matrix.rows(),
                cols: matrix.cols(),
            });
        }

        let n = matrix.rows();
        if n == 0 {
            return Err(LinalgError::InvalidShape("empty matrix".to_string()));
        }
        let mut lu = matrix.clone();
        let mut perm: Vec<usize> = (0..n).collect();
        let mut toggle: i8 = 1;

        for j in 0..n.saturating_sub(1) {
            let mut col_max = lu[(j, j)].abs();
            let mut p_row = j;
            for i in j + 1..n {
                if lu[(i, j)].abs() > col_max {
                    col_max = lu[(i, j)].abs();
                    p_row = i;
                }
            }

            if p_row != j {
                lu.swap_rows(p_row, j);
                perm.swap(p_row, j);
                toggle = -toggle;
            }

            if lu[(j, j)] == 0.0 {
                let good_row = (j + 1..n)
                    .filter(|&row| lu[(row, j)] != 0.0)
                    .last()
                    .ok_or(LinalgError::Singular { column: j })?;
                trace!(column = j, row = good_row, "zero pivot, swapping in non-zero row");

                lu.swap_rows(good_row, j);
                perm.swap(good_row, j);
                toggle = -toggle;
            }

            let pivot = lu[(j, j)];
            for i in j + 1..n {
                lu[(i, j)] /= pivot;
                let factor = lu[(i, j)];
                for k in j + 1..n {
                    lu[(i, k)] -= factor * lu[(j, k)];
                }
            }
        }

        if let Some(column) = (0..n).find(|&i| lu[(i, i)] == 0.0) {
            return Err(LinalgError::Singular { column });
        }

        Ok(Self { lu, perm, toggle })
    }

    /// Combined L and U factors.
    pub fn lu(&self) -> &Matrix {
        &self.lu
    }

    /// `perm()[i]` is the original row now stored at row `i`.
    pub fn perm(&self) -> &[usize] {
        &self.perm
    }

    /// `+1` for an even number of row swaps, `-1` for odd.
    pub fn toggle(&self) -> i8 {
        self.toggle
    }

    pub fn size(&self) -> usize {
        self.perm.len()
    }

    pub fn determinant(&self) -> f64 {
        let diagonal: f64 = (0..self.size()).map(|i| self.lu[(i, i)]).product();
        f64::from(self.toggle) * diagonal
    }

    /// Applies the row permutation to a right-hand side.
    pub fn permute(&self, rhs: &[f64]) -> Vec<f64> {
        self.perm.iter().map(|&p| rhs[p]).collect()
    }

    /// Identity column `i` with the row permutation applied.
    pub fn permuted_unit(&self, i: usize) -> Vec<f64> {
        self.perm
            .iter()
            .map(|&p| if p == i { 1.0 } else { 0.0 })
            .collect()
    }

    /// Forward then back substitution on an already permuted right-hand side.
    ///
    /// # Panics
    ///
    /// Panics when `permuted_rhs` does not have one entry per row.
    pub fn solve(&self, permuted_rhs: &[f64]) -> Vec<f64> {
        let n = self.size();
        assert_eq!(permuted_rhs.len(), n, "right-hand side length does not match matrix");

        let mut x = permuted_rhs.to_vec();
        for i in 1..n {
            let sum: f64 = (0..i).map(|j| self.lu[(i, j)] * x[j]).sum();
            x[i] -= sum;
        }

        for i in (0..n).rev() {
            let sum: f64 = (i + 1..n).map(|j| self.lu[(i, j)] * x[j]).sum();
            x[i] = (x[i] - sum) / self.lu[(i, i)];
        }
        x
    }

    /// Solves `A x = b` for the original matrix `A`.
    pub fn solve_system(&self, rhs: &[f64]) -> Vec<f64> {
        self.solve(&self.permute(rhs))
    }

    pub fn inverse(&self) -> Matrix {
        let n = self.size();
        let mut result = Matrix::zeros(n, n);
        for i in 0..n {
            let x = self.solve(&self.permuted_unit(i));
            result.set_column(i, &x);
        }
        result
    }
}

/// Inverts a square matrix through a single LU decomposition.
pub fn invert(matrix: &Matrix) -> Result<Matrix> {
    Ok(LuDecomposition::decompose(matrix)?.inverse())
}
